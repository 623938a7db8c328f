//! Core game objects of the recipe graph: items, recipes and tags.
use crate::error::DataError;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

pub const DEFAULT_LOCALE: &str = "en_us";

/// Experimental toggles gating game content, in declared priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureFlag {
    Vanilla,
    Bundle,
    TradeRebalance,
    #[serde(rename = "update_1_21")]
    Update121,
    WinterDrop,
    RedstoneExperiments,
    MinecartImprovements,
}

impl FeatureFlag {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Vanilla => "Vanilla",
            Self::Bundle => "Bundle",
            Self::TradeRebalance => "Villager Trade Rebalance",
            Self::Update121 => "Update 1.21",
            Self::WinterDrop => "Winter Drop",
            Self::RedstoneExperiments => "Redstone Experiments",
            Self::MinecartImprovements => "Minecart Improvements",
        }
    }
}

/// A dotted game version such as `1.20.4`, compared segment by segment.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct GameVersion(Vec<u32>);

impl GameVersion {
    pub fn parse(raw: &str) -> Result<Self, DataError> {
        let segments = raw
            .split('.')
            .map(|s| s.parse::<u32>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| DataError::MalformedVersion(raw.to_string()))?;
        if segments.is_empty() {
            return Err(DataError::MalformedVersion(raw.to_string()));
        }
        Ok(Self(segments))
    }
}

impl TryFrom<String> for GameVersion {
    type Error = DataError;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl fmt::Display for GameVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(u32::to_string).collect();
        f.write_str(&parts.join("."))
    }
}

/// A reference to either a single item or a tag (`#namespace:path`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum IngredientRef {
    Item(String),
    Tag(String),
}

impl IngredientRef {
    pub fn parse(raw: &str) -> Result<Self, DataError> {
        match raw.strip_prefix('#') {
            Some("") => Err(DataError::MalformedIngredient(raw.to_string())),
            Some(tag) => Ok(Self::Tag(tag.to_string())),
            None if raw.is_empty() => Err(DataError::MalformedIngredient(raw.to_string())),
            None => Ok(Self::Item(raw.to_string())),
        }
    }
}

impl TryFrom<String> for IngredientRef {
    type Error = DataError;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct LegacyId {
    pub id: u32,
    #[serde(default)]
    pub data: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Item {
    #[serde(skip)]
    pub key: String,
    /// Display names keyed by locale code.
    #[serde(default)]
    pub name: HashMap<String, String>,
    #[serde(default)]
    pub legacy: Option<LegacyId>,
    #[serde(default)]
    pub previous_id: Option<String>,
    #[serde(default)]
    pub feature: Option<FeatureFlag>,
    #[serde(default)]
    pub image: Option<String>,
}

impl Item {
    /// Localized name, falling back to the default locale and then to the key.
    pub fn display_name(&self, locale: &str) -> &str {
        self.name
            .get(locale)
            .or_else(|| self.name.get(DEFAULT_LOCALE))
            .map(String::as_str)
            .unwrap_or(&self.key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecipeType {
    Shaped,
    Shapeless,
    Smelting,
    Stonecutting,
    Brewing,
    Smithing,
    SmithingTemplate,
    /// Any type outside the supported set; kept for validation only.
    #[serde(other)]
    Unsupported,
}

impl RecipeType {
    pub fn is_valid(&self) -> bool {
        !matches!(self, RecipeType::Unsupported)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Shaped => "Shaped Crafting",
            Self::Shapeless => "Shapeless Crafting",
            Self::Smelting => "Smelting",
            Self::Stonecutting => "Stonecutting",
            Self::Brewing => "Brewing",
            Self::Smithing => "Smithing",
            Self::SmithingTemplate => "Smithing (Template)",
            Self::Unsupported => "Unsupported",
        }
    }

    /// The item key of the block this recipe is made at.
    pub fn station(&self) -> Option<&'static str> {
        match self {
            Self::Shaped | Self::Shapeless => Some("minecraft:crafting_table"),
            Self::Smelting => Some("minecraft:furnace"),
            Self::Stonecutting => Some("minecraft:stonecutter"),
            Self::Brewing => Some("minecraft:brewing_stand"),
            Self::Smithing | Self::SmithingTemplate => Some("minecraft:smithing_table"),
            Self::Unsupported => None,
        }
    }
}

fn default_count() -> u32 {
    1
}

#[derive(Debug, Clone, Deserialize)]
pub struct Recipe {
    #[serde(skip)]
    pub key: String,
    #[serde(rename = "type")]
    pub kind: RecipeType,
    pub result: String,
    #[serde(default = "default_count")]
    pub count: u32,
    #[serde(default)]
    pub ingredients: Vec<IngredientRef>,
    #[serde(default)]
    pub introduced: Option<GameVersion>,
    #[serde(default)]
    pub removed: Option<GameVersion>,
    #[serde(default)]
    pub feature: Option<FeatureFlag>,
    #[serde(default)]
    pub experience: Option<f32>,
}

/// Tag contents partitioned by feature flag; iteration follows flag priority.
#[derive(Debug, Clone)]
pub struct Tag {
    pub key: String,
    pub partitions: BTreeMap<FeatureFlag, Vec<IngredientRef>>,
}

/// The raw on-disk shape of the dataset.
#[derive(Debug, Default, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub items: BTreeMap<String, Item>,
    #[serde(default)]
    pub recipes: BTreeMap<String, Recipe>,
    #[serde(default)]
    pub tags: BTreeMap<String, BTreeMap<FeatureFlag, Vec<IngredientRef>>>,
}
