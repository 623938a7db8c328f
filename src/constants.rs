// Central constants for menu lifetime and layout.
pub const MENU_TTL_SECS: u64 = 600; // idle lifetime of a menu, refreshed on every accepted press
pub const MENU_SWEEP_SECS: u64 = 60; // interval of the expiry sweep
pub const MAX_MENU_TTL_SECS: u64 = 7 * 24 * 60 * 60;
pub const MAX_MENU_SWEEP_SECS: u64 = 24 * 60 * 60;
pub const REDELIVERY_WINDOW_MS: u64 = 1500; // same press again within this is a replay
pub const PAGE_JUMP: usize = 10; // stride of the fast back/forward buttons
pub const INGREDIENT_WINDOW: usize = 9; // ingredient jump buttons shown at once

pub const PERMISSION_NOTE: &str = "I can't manage reactions here. Ask a server admin to grant me \
    the **Add Reactions**, **Manage Messages** and **Read Message History** permissions.";
pub const EXPIRED_NOTE: &str = "This menu has expired. Run the command again to browse.";
