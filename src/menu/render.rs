//! Turns a menu node into a displayable page.
use super::buttons::ButtonMap;
use super::state::Node;
use crate::constants::{EXPIRED_NOTE, PERMISSION_NOTE};
use crate::data::{GraphSource, IngredientRef, Item, Recipe};
use crate::ui::style::{COLOR_EXPIRED, COLOR_ITEM, GLYPH_INGREDIENTS, recipe_color};
use std::collections::HashMap;

/// Platform-neutral page content.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub title: String,
    pub description: String,
    pub fields: Vec<(String, String)>,
    pub image: Option<String>,
    pub footer: String,
    pub color: u32,
    pub note: Option<String>,
}

impl Page {
    /// The same content marked as expired.
    pub fn expired(mut self) -> Self {
        self.color = COLOR_EXPIRED;
        self.note = Some(EXPIRED_NOTE.to_string());
        self
    }

    pub fn with_permission_note(mut self) -> Self {
        self.note = Some(PERMISSION_NOTE.to_string());
        self
    }
}

/// Renders page `page` of `nodes`. Ingredient glyphs come from `buttons`.
pub fn render_page(
    graph: &GraphSource,
    locale: &str,
    nodes: &[Node],
    page: usize,
    buttons: &ButtonMap,
) -> Page {
    let footer = format!("Page {}/{}", page + 1, nodes.len());
    match nodes.get(page) {
        Some(Node::Recipe(key)) => match graph.recipe(key) {
            Some(recipe) => render_recipe(graph, locale, recipe, buttons, footer),
            None => missing(key, footer),
        },
        Some(Node::Item(key)) => match graph.item(key) {
            Some(item) => render_item(graph, locale, item, footer),
            None => missing(key, footer),
        },
        None => missing("?", footer),
    }
}

fn missing(key: &str, footer: String) -> Page {
    Page {
        title: key.to_string(),
        description: "This entry is no longer available.".to_string(),
        fields: Vec::new(),
        image: None,
        footer,
        color: COLOR_EXPIRED,
        note: None,
    }
}

fn render_recipe(
    graph: &GraphSource,
    locale: &str,
    recipe: &Recipe,
    buttons: &ButtonMap,
    footer: String,
) -> Page {
    let result = graph.item(&recipe.result);
    let result_name = graph.display_name(&recipe.result, locale);
    let title = if recipe.count > 1 {
        format!("{} ×{}", result_name, recipe.count)
    } else {
        result_name.to_string()
    };

    let glyph_for: HashMap<&str, &str> = buttons
        .ingredient_targets()
        .map(|(slot, item)| (item, GLYPH_INGREDIENTS[slot]))
        .collect();
    let label = |key: &str| match glyph_for.get(key) {
        Some(glyph) => format!("{glyph} {}", graph.display_name(key, locale)),
        None => graph.display_name(key, locale).to_string(),
    };

    let mut ingredient_lines = Vec::new();
    for ingredient in &recipe.ingredients {
        match ingredient {
            IngredientRef::Item(key) => ingredient_lines.push(format!("• {}", label(key))),
            IngredientRef::Tag(tag) => {
                let members: Vec<String> = graph
                    .expand_tag(tag)
                    .unwrap_or_default()
                    .iter()
                    .map(|k| label(k.as_str()))
                    .collect();
                ingredient_lines.push(format!("• any of `#{tag}`: {}", members.join(", ")));
            }
        }
    }
    if ingredient_lines.is_empty() {
        ingredient_lines.push("• none".to_string());
    }

    let mut fields = vec![
        ("Type".to_string(), recipe.kind.label().to_string()),
        ("Ingredients".to_string(), ingredient_lines.join("\n")),
    ];
    if let Some(xp) = recipe.experience {
        fields.push(("Experience".to_string(), format!("{xp}")));
    }
    let mut history = Vec::new();
    if let Some(v) = &recipe.introduced {
        history.push(format!("Added in {v}"));
    }
    if let Some(v) = &recipe.removed {
        history.push(format!("Removed in {v}"));
    }
    if let Some(flag) = recipe.feature {
        history.push(format!("Requires {}", flag.label()));
    }
    if !history.is_empty() {
        fields.push(("History".to_string(), history.join("\n")));
    }

    Page {
        title,
        description: format!("`{}`", recipe.key),
        fields,
        image: result.and_then(|i| i.image.clone()),
        footer,
        color: recipe_color(recipe.kind),
        note: None,
    }
}

fn render_item(graph: &GraphSource, locale: &str, item: &Item, footer: String) -> Page {
    let mut fields = vec![("Key".to_string(), format!("`{}`", item.key))];
    if let Some(legacy) = item.legacy {
        fields.push((
            "Legacy ID".to_string(),
            format!("`{}:{}`", legacy.id, legacy.data),
        ));
    }
    if let Some(prev) = &item.previous_id {
        fields.push((
            "Previously".to_string(),
            format!("{} (`{prev}`)", graph.display_name(prev, locale)),
        ));
    }
    if let Some(flag) = item.feature {
        fields.push(("Requires".to_string(), flag.label().to_string()));
    }
    let produced = graph.recipes_producing(&item.key).len();
    let consumed = graph.recipes_consuming(&item.key).len();
    fields.push((
        "Recipes".to_string(),
        format!("Made by {produced} · Used in {consumed}"),
    ));

    Page {
        title: item.display_name(locale).to_string(),
        description: String::new(),
        fields,
        image: item.image.clone(),
        footer,
        color: COLOR_ITEM,
        note: None,
    }
}
