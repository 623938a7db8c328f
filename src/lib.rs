// Library entry so integration tests and the binary share the same modules.
pub mod commands;
pub mod config;
pub mod constants;
pub mod data;
pub mod error;
pub mod handler;
pub mod menu;
pub mod model;
pub mod platform;
pub mod ui;

pub use model::AppState;
