//! Recipes the game performs without a formal recipe definition.
use super::models::{IngredientRef, Recipe, RecipeType};
use std::collections::HashMap;

/// Filling a glass bottle from a water source. Only supplied when both items exist.
pub fn synthetic_recipes() -> Vec<Recipe> {
    vec![Recipe {
        key: "synthetic:water_bottle".to_string(),
        kind: RecipeType::Brewing,
        result: "minecraft:water_bottle".to_string(),
        count: 1,
        ingredients: vec![IngredientRef::Item("minecraft:glass_bottle".to_string())],
        introduced: None,
        removed: None,
        feature: None,
        experience: None,
    }]
}

/// Synthetic recipes whose result and direct item ingredients are all present.
pub fn applicable<T>(items: &HashMap<String, T>) -> Vec<Recipe> {
    synthetic_recipes()
        .into_iter()
        .filter(|recipe| {
            let applies = items.contains_key(&recipe.result)
                && recipe.ingredients.iter().all(|i| match i {
                    IngredientRef::Item(key) => items.contains_key(key),
                    IngredientRef::Tag(_) => true,
                });
            if !applies {
                tracing::debug!(target="data.load", recipe=%recipe.key, "skipping synthetic recipe; referenced items absent");
            }
            applies
        })
        .collect()
}
