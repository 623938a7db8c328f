//! Central UI style constants and helpers.
use crate::data::RecipeType;
use serenity::builder::CreateEmbed;

pub const COLOR_CRAFTING: u32 = 0x964B00; // Brown
pub const COLOR_SMELTING: u32 = 0xE67E22; // Orange
pub const COLOR_STONECUTTING: u32 = 0x95A5A6; // Grey
pub const COLOR_BREWING: u32 = 0x9B59B6; // Purple
pub const COLOR_SMITHING: u32 = 0x34495E; // Slate
pub const COLOR_ITEM: u32 = 0x3498DB; // Blue
pub const COLOR_EXPIRED: u32 = 0x7F8C8D; // Muted grey
pub const COLOR_ALERT: u32 = 0xE74C3C; // Red

pub const GLYPH_FIRST: &str = "⏮️";
pub const GLYPH_BACK_10: &str = "⏪";
pub const GLYPH_BACK: &str = "◀️";
pub const GLYPH_FORWARD: &str = "▶️";
pub const GLYPH_FORWARD_10: &str = "⏩";
pub const GLYPH_LAST: &str = "⏭️";
pub const GLYPH_TABLE: &str = "🛠️";
pub const GLYPH_USAGE: &str = "🔀";
pub const GLYPH_MORE: &str = "🔄";
/// Shown in place of actions that are currently unavailable.
pub const GLYPH_PLACEHOLDER: &str = "▪️";
pub const GLYPH_INGREDIENTS: [&str; 9] = [
    "1️⃣", "2️⃣", "3️⃣", "4️⃣", "5️⃣", "6️⃣", "7️⃣", "8️⃣", "9️⃣",
];

pub fn recipe_color(kind: RecipeType) -> u32 {
    match kind {
        RecipeType::Shaped | RecipeType::Shapeless => COLOR_CRAFTING,
        RecipeType::Smelting => COLOR_SMELTING,
        RecipeType::Stonecutting => COLOR_STONECUTTING,
        RecipeType::Brewing => COLOR_BREWING,
        RecipeType::Smithing | RecipeType::SmithingTemplate => COLOR_SMITHING,
        RecipeType::Unsupported => COLOR_ALERT,
    }
}


/// Convenience builder for an alert/error-styled embed.
pub fn error_embed<T: Into<String>, U: Into<String>>(title: T, description: U) -> CreateEmbed {
    CreateEmbed::new()
        .title(title)
        .description(description)
        .color(COLOR_ALERT)
}
