//! Background task driving the periodic expiry sweep.
use super::engine::MenuEngine;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Spawns a loop calling [`MenuEngine::sweep`] every `every`.
pub fn spawn_sweeper(engine: Arc<MenuEngine>, every: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick completes immediately.
        ticker.tick().await;
        loop {
            ticker.tick().await;
            engine.sweep(Instant::now()).await;
        }
    })
}
