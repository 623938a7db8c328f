//! Shared fixtures: a small in-memory dataset and a recording chat platform.
#![allow(dead_code)]

use recipe_bot::data::{Dataset, GraphSource};
use recipe_bot::error::PlatformError;
use recipe_bot::menu::{MenuEngine, MenuRegistry, Page};
use recipe_bot::platform::ChatPlatform;
use serde_json::{Map, Value, json};
use async_trait::async_trait;
use serenity::model::id::{ChannelId, MessageId, UserId};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const WOODS: [&str; 11] = [
    "oak", "spruce", "birch", "jungle", "acacia", "dark_oak", "mangrove", "bamboo", "crimson",
    "warped", "cherry",
];

pub fn item(name: &str) -> Value {
    json!({ "name": { "en_us": name } })
}

fn title_case(s: &str) -> String {
    s.split('_')
        .map(|w| {
            let mut c = w.chars();
            match c.next() {
                Some(f) => f.to_uppercase().collect::<String>() + c.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// A compact slice of the game: 11 plank types behind a nested tag, a crafting table
/// that accepts any of them, a stick with 23 recipes in varied version states, and a
/// few smelting/stonecutting/brewing recipes.
pub fn fixture_json() -> Value {
    let mut items = Map::new();
    let mut recipes = Map::new();
    for wood in WOODS {
        items.insert(format!("minecraft:{wood}_log"), item(&title_case(&format!("{wood}_log"))));
        items.insert(
            format!("minecraft:{wood}_planks"),
            item(&title_case(&format!("{wood}_planks"))),
        );
        recipes.insert(
            format!("minecraft:{wood}_planks"),
            json!({
                "type": "shapeless",
                "result": format!("minecraft:{wood}_planks"),
                "count": 4,
                "ingredients": [format!("minecraft:{wood}_log")],
                "introduced": "1.0"
            }),
        );
    }
    for (key, name) in [
        ("minecraft:crafting_table", "Crafting Table"),
        ("minecraft:stick", "Stick"),
        ("minecraft:furnace", "Furnace"),
        ("minecraft:cobblestone", "Cobblestone"),
        ("minecraft:stone", "Stone"),
        ("minecraft:stone_slab", "Stone Slab"),
        ("minecraft:stonecutter", "Stonecutter"),
        ("minecraft:glass_bottle", "Glass Bottle"),
        ("minecraft:water_bottle", "Water Bottle"),
        ("minecraft:brewing_stand", "Brewing Stand"),
        ("minecraft:ladder", "Ladder"),
    ] {
        items.insert(key.to_string(), item(name));
    }
    items.insert(
        "minecraft:grass_block".to_string(),
        json!({ "name": { "en_us": "Grass Block", "de_de": "Grasblock" },
                "legacy": { "id": 2, "data": 0 } }),
    );
    items.insert(
        "minecraft:short_grass".to_string(),
        json!({ "name": { "en_us": "Short Grass" }, "previous_id": "minecraft:grass_block",
                "feature": "update_1_21", "image": "https://example.invalid/grass.png" }),
    );

    recipes.insert(
        "minecraft:crafting_table".into(),
        json!({ "type": "shaped", "result": "minecraft:crafting_table",
                "ingredients": ["#minecraft:planks"], "introduced": "1.0" }),
    );
    recipes.insert(
        "minecraft:stick".into(),
        json!({ "type": "shaped", "result": "minecraft:stick", "count": 4,
                "ingredients": ["#minecraft:planks"], "introduced": "1.0" }),
    );
    recipes.insert(
        "minecraft:ladder".into(),
        json!({ "type": "shaped", "result": "minecraft:ladder", "count": 3,
                "ingredients": ["minecraft:stick"], "introduced": "1.0" }),
    );
    recipes.insert(
        "minecraft:furnace".into(),
        json!({ "type": "shaped", "result": "minecraft:furnace",
                "ingredients": ["minecraft:cobblestone"], "introduced": "1.0" }),
    );
    recipes.insert(
        "minecraft:stone".into(),
        json!({ "type": "smelting", "result": "minecraft:stone",
                "ingredients": ["minecraft:cobblestone"], "experience": 0.1 }),
    );
    recipes.insert(
        "minecraft:stone_slab".into(),
        json!({ "type": "shaped", "result": "minecraft:stone_slab", "count": 6,
                "ingredients": ["minecraft:stone"] }),
    );
    recipes.insert(
        "minecraft:stone_slab_from_stonecutting".into(),
        json!({ "type": "stonecutting", "result": "minecraft:stone_slab", "count": 2,
                "ingredients": ["minecraft:stone"], "introduced": "1.14" }),
    );
    recipes.insert(
        "minecraft:ladder_dye".into(),
        json!({ "type": "crafting_special_dye", "result": "minecraft:ladder",
                "ingredients": ["minecraft:stick"] }),
    );
    // Ordering fixtures: 22 extra stick recipes on top of the real one make 23.
    recipes.insert(
        "test:stick_removed_late".into(),
        json!({ "type": "shapeless", "result": "minecraft:stick",
                "ingredients": ["minecraft:bamboo_planks"], "removed": "1.13" }),
    );
    recipes.insert(
        "test:stick_removed_early".into(),
        json!({ "type": "shapeless", "result": "minecraft:stick",
                "ingredients": ["minecraft:bamboo_planks"], "removed": "1.9" }),
    );
    recipes.insert(
        "test:stick_winter".into(),
        json!({ "type": "shapeless", "result": "minecraft:stick",
                "ingredients": ["minecraft:bamboo_planks"], "feature": "winter_drop" }),
    );
    recipes.insert(
        "test:stick_bundle".into(),
        json!({ "type": "shapeless", "result": "minecraft:stick",
                "ingredients": ["minecraft:bamboo_planks"], "feature": "bundle" }),
    );
    recipes.insert(
        "test:stick_new".into(),
        json!({ "type": "shapeless", "result": "minecraft:stick",
                "ingredients": ["minecraft:bamboo_planks"], "introduced": "1.20" }),
    );
    for i in 0..17 {
        recipes.insert(
            format!("test:stick_filler_{i:02}"),
            json!({ "type": "shapeless", "result": "minecraft:stick",
                    "ingredients": ["minecraft:oak_log"], "introduced": "1.10" }),
        );
    }

    json!({
        "items": items,
        "recipes": recipes,
        "tags": {
            "minecraft:planks": {
                "vanilla": [
                    "minecraft:oak_planks", "minecraft:spruce_planks", "minecraft:birch_planks",
                    "minecraft:jungle_planks", "minecraft:acacia_planks",
                    "minecraft:dark_oak_planks", "minecraft:mangrove_planks",
                    "minecraft:bamboo_planks", "#minecraft:nether_planks"
                ],
                "winter_drop": ["minecraft:cherry_planks", "minecraft:oak_planks"]
            },
            "minecraft:nether_planks": {
                "vanilla": ["minecraft:crimson_planks", "minecraft:warped_planks"]
            }
        }
    })
}

pub fn graph_from(value: Value) -> Result<GraphSource, recipe_bot::error::DataError> {
    let dataset: Dataset = serde_json::from_value(value)?;
    GraphSource::from_dataset(dataset)
}

pub fn fixture_graph() -> Arc<GraphSource> {
    Arc::new(graph_from(fixture_json()).expect("fixture dataset is valid"))
}

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Post { channel: ChannelId, page: Page },
    Edit { message: MessageId, page: Page },
    AddReaction { message: MessageId, glyph: String },
    ClearButtons { message: MessageId },
    RemoveReaction { message: MessageId, user: UserId, glyph: String },
}

/// Records every outbound call. Adding reactions and managing other users'
/// reactions can each be made to fail with a permission error, as on Discord.
pub struct RecordingPlatform {
    pub calls: Mutex<Vec<Call>>,
    next_id: AtomicU64,
    pub deny_add: AtomicBool,
    pub deny_manage: AtomicBool,
}

impl Default for RecordingPlatform {
    fn default() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(1000),
            deny_add: AtomicBool::new(false),
            deny_manage: AtomicBool::new(false),
        }
    }
}

impl RecordingPlatform {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.calls.lock().unwrap().clear();
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    /// Denies both permissions.
    pub fn deny_all(&self, deny: bool) {
        self.deny_add.store(deny, Ordering::SeqCst);
        self.deny_manage.store(deny, Ordering::SeqCst);
    }

    /// Glyphs added to `message`, in order.
    pub fn reactions_on(&self, message: MessageId) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::AddReaction { message: m, glyph } if m == message => Some(glyph),
                _ => None,
            })
            .collect()
    }

    fn check(flag: &AtomicBool, op: &'static str) -> Result<(), PlatformError> {
        if flag.load(Ordering::SeqCst) {
            Err(PlatformError::MissingPermissions(op))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl ChatPlatform for RecordingPlatform {
    async fn post_message(
        &self,
        channel: ChannelId,
        page: &Page,
    ) -> Result<MessageId, PlatformError> {
        self.record(Call::Post {
            channel,
            page: page.clone(),
        });
        Ok(MessageId::new(self.next_id.fetch_add(1, Ordering::SeqCst)))
    }

    async fn edit_message(
        &self,
        _channel: ChannelId,
        message: MessageId,
        page: &Page,
    ) -> Result<(), PlatformError> {
        self.record(Call::Edit {
            message,
            page: page.clone(),
        });
        Ok(())
    }

    async fn add_reaction(
        &self,
        _channel: ChannelId,
        message: MessageId,
        glyph: &str,
    ) -> Result<(), PlatformError> {
        Self::check(&self.deny_add, "add reactions")?;
        self.record(Call::AddReaction {
            message,
            glyph: glyph.to_string(),
        });
        Ok(())
    }

    async fn clear_buttons(
        &self,
        _channel: ChannelId,
        message: MessageId,
    ) -> Result<(), PlatformError> {
        Self::check(&self.deny_manage, "manage messages")?;
        self.record(Call::ClearButtons { message });
        Ok(())
    }

    async fn remove_reaction(
        &self,
        _channel: ChannelId,
        message: MessageId,
        user: UserId,
        glyph: &str,
    ) -> Result<(), PlatformError> {
        Self::check(&self.deny_manage, "manage messages")?;
        self.record(Call::RemoveReaction {
            message,
            user,
            glyph: glyph.to_string(),
        });
        Ok(())
    }
}

pub const TTL: Duration = Duration::from_secs(600);

pub fn engine(platform: Arc<RecordingPlatform>) -> Arc<MenuEngine> {
    Arc::new(MenuEngine::new(
        Arc::new(MenuRegistry::new()),
        fixture_graph(),
        platform,
        "en_us",
        TTL,
    ))
}
