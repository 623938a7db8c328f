//! Menu lifecycle: creation, rendering, disabling and the expiry sweep.
use super::buttons::ButtonMap;
use super::registry::{MenuHandle, MenuRegistry};
use super::render::{Page, render_page};
use super::state::{Menu, Node, RenderTarget};
use crate::data::GraphSource;
use crate::error::{MenuError, PlatformError};
use crate::platform::ChatPlatform;
use serenity::model::id::UserId;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument, warn};

/// Owns everything a menu needs to live: the registry, the graph, and the platform.
pub struct MenuEngine {
    pub(crate) registry: Arc<MenuRegistry>,
    pub(crate) graph: Arc<GraphSource>,
    pub(crate) platform: Arc<dyn ChatPlatform>,
    pub(crate) locale: String,
    pub(crate) ttl: Duration,
}

impl MenuEngine {
    pub fn new(
        registry: Arc<MenuRegistry>,
        graph: Arc<GraphSource>,
        platform: Arc<dyn ChatPlatform>,
        locale: impl Into<String>,
        ttl: Duration,
    ) -> Self {
        Self {
            registry,
            graph,
            platform,
            locale: locale.into(),
            ttl,
        }
    }

    pub fn registry(&self) -> &Arc<MenuRegistry> {
        &self.registry
    }

    pub fn graph(&self) -> &Arc<GraphSource> {
        &self.graph
    }

    /// Renders the menu's current page, including any permission note.
    pub fn render(&self, menu: &Menu) -> Page {
        let page = render_page(
            &self.graph,
            &self.locale,
            menu.nodes(),
            menu.page(),
            menu.buttons(),
        );
        if menu.permission_note() {
            page.with_permission_note()
        } else {
            page
        }
    }

    /// Posts the first page of `nodes`, registers the menu and attaches its buttons.
    #[instrument(level = "debug", skip(self, nodes), fields(nodes = nodes.len()))]
    pub async fn create_menu(
        &self,
        nodes: Vec<Node>,
        owner: UserId,
        target: RenderTarget,
        now: Instant,
    ) -> Result<MenuHandle, MenuError> {
        if nodes.is_empty() {
            return Err(MenuError::EmptyNodeList);
        }
        let buttons = ButtonMap::build(&self.graph, &nodes[0], 0);
        let first = render_page(&self.graph, &self.locale, &nodes, 0, &buttons);
        let message_id = self
            .platform
            .post_message(target.channel_id, &first)
            .await?;

        let menu = Menu::new(&self.graph, message_id, target, owner, nodes, self.ttl, now)?;
        let glyphs = menu.buttons().glyphs();
        let handle = self.registry.register(menu).await?;
        debug!(target="menu.create", message_id=%message_id, owner=%owner, "menu registered");

        let mut menu = handle.lock().await;
        self.push_buttons(&mut menu, &glyphs, false).await;
        drop(menu);
        Ok(handle)
    }

    /// Attaches `glyphs`, replacing the current reactions when `replace` is set.
    /// Whatever permission is missing, the page is re-rendered with a note.
    pub(crate) async fn push_buttons(&self, menu: &mut Menu, glyphs: &[&str], replace: bool) {
        let channel = menu.target().channel_id;
        let message = menu.message_id();
        let pushed = if replace {
            self.platform.set_buttons(channel, message, glyphs).await
        } else {
            self.platform.add_buttons(channel, message, glyphs).await
        };
        match pushed {
            Ok(()) => {
                if menu.permission_note() {
                    menu.set_permission_note(false);
                    self.push_page(menu).await;
                }
            }
            Err(PlatformError::MissingPermissions(op)) => {
                debug!(target="menu.buttons", message_id=%menu.message_id(), op, "cannot manage reactions");
                if !menu.permission_note() {
                    menu.set_permission_note(true);
                    self.push_page(menu).await;
                }
            }
            Err(e) => {
                warn!(target="menu.buttons", message_id=%menu.message_id(), error=%e, "set_buttons failed");
            }
        }
    }

    pub(crate) async fn push_page(&self, menu: &Menu) {
        let page = self.render(menu);
        if let Err(e) = self
            .platform
            .edit_message(menu.target().channel_id, menu.message_id(), &page)
            .await
        {
            warn!(target="menu.edit", message_id=%menu.message_id(), error=%e, "edit_message failed");
        }
    }

    /// Marks the message expired, detaches its buttons and deregisters the menu.
    /// Returns false when the menu was already disabled.
    pub async fn disable(&self, handle: &MenuHandle) -> bool {
        let mut menu = handle.lock().await;
        self.disable_locked(&mut menu, handle).await
    }

    /// Disable sequence for a menu whose lock the caller already holds.
    async fn disable_locked(&self, menu: &mut Menu, handle: &MenuHandle) -> bool {
        if menu.is_disabled() {
            return false;
        }
        menu.mark_disabled();
        let target = menu.target();
        let page = self.render(menu).expired();
        if let Err(e) = self
            .platform
            .edit_message(target.channel_id, menu.message_id(), &page)
            .await
        {
            debug!(target="menu.disable", message_id=%menu.message_id(), error=%e, "could not mark expired");
        }
        if let Err(e) = self
            .platform
            .clear_buttons(target.channel_id, menu.message_id())
            .await
            && !e.is_permission()
        {
            warn!(target="menu.disable", message_id=%menu.message_id(), error=%e, "clear_buttons failed");
        }
        self.registry.remove_handle(menu.message_id(), handle).await;
        true
    }

    /// Disables every menu whose expiry lies before `now`. Returns how many were removed.
    #[instrument(level = "debug", skip(self, now))]
    pub async fn sweep(&self, now: Instant) -> usize {
        let mut removed = 0;
        for (id, handle) in self.registry.snapshot().await {
            let mut menu = handle.lock().await;
            if menu.is_expired(now) && self.disable_locked(&mut menu, &handle).await {
                debug!(target="menu.sweep", message_id=%id, "menu expired");
                removed += 1;
            }
        }
        if removed > 0 {
            info!(target = "menu.sweep", removed, "expired menus disabled");
        }
        removed
    }
}
