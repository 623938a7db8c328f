//! The game dataset: items, recipes, tags and the graph queries over them.

pub mod graph;
pub mod models;
pub mod ordering;
pub mod search;
pub mod synthetic;
pub mod tags;

pub use graph::GraphSource;
pub use models::{
    DEFAULT_LOCALE, Dataset, FeatureFlag, GameVersion, IngredientRef, Item, LegacyId, Recipe,
    RecipeType, Tag,
};
