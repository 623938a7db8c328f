// src/commands/mod.rs
// Prefix command parsing and the command modules it routes to.

pub mod help;
pub mod lookup;
pub mod recipe;

use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Recipe,
    Usage,
    Item,
    Help,
    Unknown,
}

impl FromStr for Command {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "recipe" | "r" => Ok(Command::Recipe),
            "usage" | "u" => Ok(Command::Usage),
            "item" | "i" => Ok(Command::Item),
            "help" | "h" => Ok(Command::Help),
            _ => Ok(Command::Unknown),
        }
    }
}
