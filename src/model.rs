//! This module defines the shared data structures used throughout the application.
//! These structs are used as `TypeMapKey`s to store shared state in Serenity's global context.

use crate::data::GraphSource;
use crate::menu::MenuEngine;
use serenity::prelude::TypeMapKey;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

/// The central, shared state of the application.
/// An `Arc<AppState>` is stored in the global context for easy and safe access
/// from any command or event handler.
pub struct AppState {
    /// Lifecycle, dispatch and sweep for every interactive menu.
    pub engine: Arc<MenuEngine>,
    /// The loaded item/recipe graph, shared read-only.
    pub graph: Arc<GraphSource>,
    pub prefix: String,
    pub locale: String,
    /// Set once the expiry sweeper has been spawned (`ready` can fire on reconnects).
    pub sweeper_started: AtomicBool,
}

impl AppState {
    pub fn new(engine: Arc<MenuEngine>, prefix: String, locale: String) -> Self {
        Self {
            graph: engine.graph().clone(),
            engine,
            prefix,
            locale,
            sweeper_started: AtomicBool::new(false),
        }
    }

    pub async fn from_ctx(ctx: &serenity::prelude::Context) -> Option<Arc<Self>> {
        ctx.data.read().await.get::<AppState>().cloned()
    }
}

impl TypeMapKey for AppState {
    type Value = Arc<AppState>;
}
