//! The read-only item/recipe graph loaded once at startup.
use super::models::{Dataset, IngredientRef, Item, Recipe, Tag};
use super::ordering::recipe_order;
use super::{synthetic, tags};
use crate::error::DataError;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use tracing::{info, instrument};

/// Immutable dataset of items, recipes and tags with precomputed producer/consumer
/// indexes. Safe to share behind an `Arc` without locking.
#[derive(Debug)]
pub struct GraphSource {
    items: HashMap<String, Item>,
    recipes: HashMap<String, Recipe>,
    expanded_tags: HashMap<String, Vec<String>>,
    producing: HashMap<String, Vec<String>>,
    consuming: HashMap<String, Vec<String>>,
}

impl GraphSource {
    #[instrument(level = "info", skip_all, fields(path = %path.as_ref().display()))]
    pub fn load_file(path: impl AsRef<Path>) -> Result<Self, DataError> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&raw)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, DataError> {
        let dataset: Dataset = serde_json::from_str(raw)?;
        Self::from_dataset(dataset)
    }

    /// Validates every reference and builds the query indexes.
    pub fn from_dataset(dataset: Dataset) -> Result<Self, DataError> {
        let items: HashMap<String, Item> = dataset
            .items
            .into_iter()
            .map(|(key, mut item)| {
                item.key = key.clone();
                (key, item)
            })
            .collect();

        for item in items.values() {
            if let Some(prev) = &item.previous_id
                && !items.contains_key(prev)
            {
                return Err(DataError::UnknownItem {
                    owner: format!("item `{}`", item.key),
                    key: prev.clone(),
                });
            }
        }

        let tags: HashMap<String, Tag> = dataset
            .tags
            .into_iter()
            .map(|(key, partitions)| (key.clone(), Tag { key, partitions }))
            .collect();
        let item_keys: HashSet<&str> = items.keys().map(String::as_str).collect();
        let expanded_tags = tags::expand_all(&tags, &item_keys)?;

        let mut recipes: HashMap<String, Recipe> = dataset
            .recipes
            .into_iter()
            .map(|(key, mut recipe)| {
                recipe.key = key.clone();
                (key, recipe)
            })
            .collect();
        for recipe in synthetic::applicable(&items) {
            if recipes.contains_key(&recipe.key) {
                return Err(DataError::DuplicateRecipe(recipe.key));
            }
            recipes.insert(recipe.key.clone(), recipe);
        }

        for recipe in recipes.values() {
            let owner = || format!("recipe `{}`", recipe.key);
            if !items.contains_key(&recipe.result) {
                return Err(DataError::UnknownItem {
                    owner: owner(),
                    key: recipe.result.clone(),
                });
            }
            for ingredient in &recipe.ingredients {
                match ingredient {
                    IngredientRef::Item(key) if !items.contains_key(key) => {
                        return Err(DataError::UnknownItem {
                            owner: owner(),
                            key: key.clone(),
                        });
                    }
                    IngredientRef::Tag(key) if !expanded_tags.contains_key(key) => {
                        return Err(DataError::UnknownTag {
                            owner: owner(),
                            key: key.clone(),
                        });
                    }
                    _ => {}
                }
            }
        }

        let mut producing: HashMap<String, Vec<String>> = HashMap::new();
        let mut consuming: HashMap<String, Vec<String>> = HashMap::new();
        for recipe in recipes.values().filter(|r| r.kind.is_valid()) {
            producing
                .entry(recipe.result.clone())
                .or_default()
                .push(recipe.key.clone());
            for item in resolve(recipe, &expanded_tags) {
                consuming
                    .entry(item.to_string())
                    .or_default()
                    .push(recipe.key.clone());
            }
        }
        for index in [&mut producing, &mut consuming] {
            for keys in index.values_mut() {
                keys.sort_by(|a, b| recipe_order(&recipes[a], &recipes[b]));
            }
        }

        info!(
            target = "data.load",
            items = items.len(),
            recipes = recipes.len(),
            tags = tags.len(),
            "dataset loaded"
        );
        Ok(Self {
            items,
            recipes,
            expanded_tags,
            producing,
            consuming,
        })
    }

    pub fn item(&self, key: &str) -> Option<&Item> {
        self.items.get(key)
    }

    pub fn recipe(&self, key: &str) -> Option<&Recipe> {
        self.recipes.get(key)
    }

    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.items.values()
    }

    pub fn recipe_count(&self) -> usize {
        self.recipes.len()
    }

    /// Items in a tag, nested tags flattened, flag partitions merged in priority order.
    pub fn expand_tag(&self, key: &str) -> Option<&[String]> {
        self.expanded_tags.get(key).map(Vec::as_slice)
    }

    /// Ordered, deduplicated item keys a recipe accepts.
    pub fn resolve_ingredients<'a>(&'a self, recipe: &'a Recipe) -> Vec<&'a str> {
        resolve(recipe, &self.expanded_tags)
    }

    pub fn recipes_producing(&self, item: &str) -> Vec<&Recipe> {
        self.lookup_index(&self.producing, item)
    }

    pub fn recipes_consuming(&self, item: &str) -> Vec<&Recipe> {
        self.lookup_index(&self.consuming, item)
    }

    pub fn has_producers(&self, item: &str) -> bool {
        self.producing.get(item).is_some_and(|v| !v.is_empty())
    }

    pub fn has_consumers(&self, item: &str) -> bool {
        self.consuming.get(item).is_some_and(|v| !v.is_empty())
    }

    /// Resolved ingredients that can themselves be crafted, in ingredient order.
    pub fn craftable_ingredients<'a>(&'a self, recipe: &'a Recipe) -> Vec<&'a str> {
        self.resolve_ingredients(recipe)
            .into_iter()
            .filter(|item| self.has_producers(item))
            .collect()
    }

    pub fn display_name<'a>(&'a self, key: &'a str, locale: &str) -> &'a str {
        self.items
            .get(key)
            .map(|item| item.display_name(locale))
            .unwrap_or(key)
    }

    fn lookup_index(&self, index: &HashMap<String, Vec<String>>, item: &str) -> Vec<&Recipe> {
        index
            .get(item)
            .map(|keys| keys.iter().filter_map(|k| self.recipes.get(k)).collect())
            .unwrap_or_default()
    }
}

fn resolve<'a>(recipe: &'a Recipe, expanded: &'a HashMap<String, Vec<String>>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for ingredient in &recipe.ingredients {
        match ingredient {
            IngredientRef::Item(key) => {
                if seen.insert(key.as_str()) {
                    out.push(key.as_str());
                }
            }
            IngredientRef::Tag(tag) => {
                for key in expanded.get(tag).into_iter().flatten() {
                    if seen.insert(key.as_str()) {
                        out.push(key.as_str());
                    }
                }
            }
        }
    }
    out
}
