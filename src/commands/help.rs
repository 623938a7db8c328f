//! The `help` command: a static overview of the available lookups.

use crate::ui::style::{
    COLOR_ITEM, GLYPH_BACK, GLYPH_BACK_10, GLYPH_FIRST, GLYPH_FORWARD, GLYPH_FORWARD_10,
    GLYPH_LAST, GLYPH_MORE, GLYPH_TABLE, GLYPH_USAGE,
};
use serenity::builder::{CreateEmbed, CreateEmbedFooter, CreateMessage};
use serenity::model::channel::Message;
use serenity::prelude::*;

pub struct CommandInfo {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub description: &'static str,
}

pub const COMMANDS: &[CommandInfo] = &[
    CommandInfo {
        name: "recipe",
        aliases: &["r"],
        description: "Browse every recipe that makes an item.",
    },
    CommandInfo {
        name: "usage",
        aliases: &["u"],
        description: "Browse every recipe that uses an item.",
    },
    CommandInfo {
        name: "item",
        aliases: &["i"],
        description: "Look up items by name or id.",
    },
    CommandInfo {
        name: "help",
        aliases: &["h"],
        description: "Shows this help message.",
    },
];

pub fn all_command_names() -> Vec<&'static str> {
    COMMANDS.iter().map(|c| c.name).collect()
}

pub fn help_embed(prefix: &str) -> CreateEmbed {
    let commands = COMMANDS
        .iter()
        .map(|c| {
            let aliases = c
                .aliases
                .iter()
                .map(|a| format!("`{prefix}{a}`"))
                .collect::<Vec<_>>()
                .join(", ");
            format!(
                "`{prefix}{} <query>` ({aliases})\n{}",
                c.name, c.description
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n");
    let buttons = format!(
        "{GLYPH_FIRST}{GLYPH_LAST} first/last page · {GLYPH_BACK}{GLYPH_FORWARD} one page · \
         {GLYPH_BACK_10}{GLYPH_FORWARD_10} ten pages\n\
         {GLYPH_TABLE} crafting station · {GLYPH_USAGE} what the result is used in\n\
         1️⃣-9️⃣ recipes of an ingredient · {GLYPH_MORE} more ingredients"
    );
    CreateEmbed::new()
        .title("Recipe Bot")
        .description(commands)
        .field("Menu buttons", buttons, false)
        .footer(CreateEmbedFooter::new(
            "Only the person who ran a command can use its buttons.",
        ))
        .color(COLOR_ITEM)
}

pub async fn run_prefix(ctx: &Context, msg: &Message, prefix: &str) {
    let builder = CreateMessage::new().embed(help_embed(prefix));
    if let Err(e) = msg.channel_id.send_message(&ctx.http, builder).await {
        tracing::warn!(target="commands.help", error=?e, "failed to send help");
    }
}
