//! Conversion of rendered pages into Discord embeds.
use crate::menu::render::Page;
use serenity::builder::{CreateEmbed, CreateEmbedFooter};

pub fn page_embed(page: &Page) -> CreateEmbed {
    let mut description = page.description.clone();
    if let Some(note) = &page.note {
        if !description.is_empty() {
            description.push_str("\n\n");
        }
        description.push_str(&format!("⚠️ {note}"));
    }

    let mut embed = CreateEmbed::new()
        .title(&page.title)
        .color(page.color)
        .footer(CreateEmbedFooter::new(&page.footer));
    if !description.is_empty() {
        embed = embed.description(description);
    }
    for (name, value) in &page.fields {
        embed = embed.field(name, value, false);
    }
    // Only absolute URLs can be embedded; bare asset names are skipped.
    if let Some(image) = page.image.as_deref().filter(|i| i.starts_with("http")) {
        embed = embed.thumbnail(image);
    }
    embed
}
