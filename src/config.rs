//! Runtime configuration read from the environment (after `.env` is loaded).
use crate::constants::{
    MAX_MENU_SWEEP_SECS, MAX_MENU_TTL_SECS, MENU_SWEEP_SECS, MENU_TTL_SECS,
};
use crate::data::DEFAULT_LOCALE;
use crate::error::ConfigError;
use serenity::model::id::GuildId;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_DATA_PATH: &str = "data/dataset.json";
pub const DEFAULT_PREFIX: &str = "!";

#[derive(Debug, Clone)]
pub struct Config {
    pub token: String,
    pub data_path: PathBuf,
    pub prefix: String,
    pub locale: String,
    /// When set, only this guild is served.
    pub allowed_guild_id: Option<GuildId>,
    pub menu_ttl: Duration,
    pub sweep_interval: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds a config from an arbitrary variable source.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let token = get("DISCORD_TOKEN")
            .filter(|t| !t.trim().is_empty())
            .ok_or(ConfigError::Missing("DISCORD_TOKEN"))?;
        let allowed_guild_id = match get("SERVER_ID") {
            Some(raw) => Some(GuildId::new(parse_bounded("SERVER_ID", &raw, u64::MAX)?)),
            None => None,
        };
        let menu_ttl = match get("MENU_TTL_SECS") {
            Some(raw) => Duration::from_secs(parse_bounded(
                "MENU_TTL_SECS",
                &raw,
                MAX_MENU_TTL_SECS,
            )?),
            None => Duration::from_secs(MENU_TTL_SECS),
        };
        let sweep_interval = match get("MENU_SWEEP_SECS") {
            Some(raw) => Duration::from_secs(parse_bounded(
                "MENU_SWEEP_SECS",
                &raw,
                MAX_MENU_SWEEP_SECS,
            )?),
            None => Duration::from_secs(MENU_SWEEP_SECS),
        };
        Ok(Self {
            token,
            data_path: get("RECIPE_DATA_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH)),
            prefix: get("COMMAND_PREFIX").unwrap_or_else(|| DEFAULT_PREFIX.to_string()),
            locale: get("BOT_LOCALE").unwrap_or_else(|| DEFAULT_LOCALE.to_string()),
            allowed_guild_id,
            menu_ttl,
            sweep_interval,
        })
    }
}

/// Parses a value in `1..=max`.
fn parse_bounded(name: &'static str, raw: &str, max: u64) -> Result<u64, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(v) if v > 0 && v <= max => Ok(v),
        _ => Err(ConfigError::Invalid {
            name,
            value: raw.to_string(),
        }),
    }
}
