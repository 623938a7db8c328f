//! The reaction-driven menu engine.
//!
//! A menu turns one posted message into a paginated view over graph nodes. Menus are
//! registered by message id, mutated only under their own lock, and disabled either
//! by the expiry sweep or when their message (or the command that made them) is deleted.

pub mod buttons;
pub mod dispatch;
pub mod engine;
pub mod registry;
pub mod render;
pub mod state;
pub mod sweep;

pub use buttons::{Action, ActionEntry, ActionState, ButtonMap, Jump, Transition};
pub use dispatch::{DispatchOutcome, ReactionEvent, StripReason};
pub use engine::MenuEngine;
pub use registry::{MenuHandle, MenuRegistry};
pub use render::Page;
pub use state::{Menu, Node, RenderTarget};
pub use sweep::spawn_sweeper;
