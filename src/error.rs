//! Error types shared across the crate.
//!
//! Data faults are fatal at load time, menu faults are caller misuse, and platform
//! faults are recovered locally by the menu engine.
use serenity::model::id::MessageId;
use thiserror::Error;

/// A corrupt or unreadable dataset. The bot refuses to start when one of these surfaces.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse dataset: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{owner} references unknown item `{key}`")]
    UnknownItem { owner: String, key: String },
    #[error("{owner} references unknown tag `{key}`")]
    UnknownTag { owner: String, key: String },
    #[error("cyclic tag nesting: {}", path.join(" -> "))]
    TagCycle { path: Vec<String> },
    #[error("duplicate recipe key `{0}`")]
    DuplicateRecipe(String),
    #[error("malformed version `{0}`")]
    MalformedVersion(String),
    #[error("malformed ingredient reference `{0}`")]
    MalformedIngredient(String),
}

/// Programming errors around menu construction and registration.
#[derive(Debug, Error)]
pub enum MenuError {
    #[error("a menu needs at least one node")]
    EmptyNodeList,
    #[error("a menu is already registered for message {0}")]
    DuplicateMessage(MessageId),
    #[error(transparent)]
    Platform(#[from] PlatformError),
}

/// Failures talking to the chat platform.
#[derive(Debug, Clone, Error)]
pub enum PlatformError {
    #[error("missing permissions to {0}")]
    MissingPermissions(&'static str),
    #[error("platform request failed: {0}")]
    Request(String),
}

impl PlatformError {
    pub fn is_permission(&self) -> bool {
        matches!(self, PlatformError::MissingPermissions(_))
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("expected {0} in the environment or .env file")]
    Missing(&'static str),
    #[error("{name} has an invalid value `{value}`")]
    Invalid { name: &'static str, value: String },
}
