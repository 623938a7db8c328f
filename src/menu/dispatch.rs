//! Routes inbound reactions and deletions into menu transitions.
use super::engine::MenuEngine;
use super::state::Menu;
use serenity::model::id::{ChannelId, MessageId, UserId};
use std::time::Instant;
use tracing::{debug, instrument};

/// A reaction added to some message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReactionEvent {
    pub channel_id: ChannelId,
    pub message_id: MessageId,
    pub user_id: UserId,
    pub glyph: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripReason {
    NotOwner,
    UnknownGlyph,
    DisabledAction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// No live menu for the message.
    Ignored,
    /// The reaction was removed without effect.
    Stripped(StripReason),
    /// The transition ran; carries the resulting page and page count.
    Applied { page: usize, pages: usize },
    /// A replay of the last accepted press; the page was only redrawn.
    Refreshed { page: usize, pages: usize },
}

impl MenuEngine {
    /// Handles one reaction. Events for the same menu are serialized by its lock.
    #[instrument(level = "debug", skip(self, now), fields(message_id = %event.message_id, user_id = %event.user_id))]
    pub async fn dispatch_reaction(&self, event: &ReactionEvent, now: Instant) -> DispatchOutcome {
        let Some(handle) = self.registry.lookup(event.message_id).await else {
            return DispatchOutcome::Ignored;
        };
        let mut menu = handle.lock().await;
        if menu.is_disabled() {
            return DispatchOutcome::Ignored;
        }

        if event.user_id != menu.owner() {
            self.strip(&menu, event).await;
            return DispatchOutcome::Stripped(StripReason::NotOwner);
        }
        let transition = match menu.buttons().find(&event.glyph) {
            None => {
                self.strip(&menu, event).await;
                return DispatchOutcome::Stripped(StripReason::UnknownGlyph);
            }
            Some(entry) => match entry.transition() {
                None => {
                    self.strip(&menu, event).await;
                    return DispatchOutcome::Stripped(StripReason::DisabledAction);
                }
                Some(t) => t.clone(),
            },
        };

        self.strip(&menu, event).await;
        if menu.is_redelivery(event.user_id, &event.glyph, now) {
            debug!(target="menu.dispatch", glyph=%event.glyph, "repeated delivery; refreshing only");
            self.push_page(&menu).await;
            return DispatchOutcome::Refreshed {
                page: menu.page(),
                pages: menu.page_count(),
            };
        }
        menu.keep_alive(now);
        let before = menu.buttons().glyphs();
        menu.apply(&self.graph, &transition);
        menu.record_press(event.user_id, &event.glyph, now);
        debug!(target="menu.dispatch", ?transition, page=menu.page(), pages=menu.page_count(), "transition applied");

        self.push_page(&menu).await;
        let after = menu.buttons().glyphs();
        if after != before {
            self.push_buttons(&mut menu, &after, true).await;
        }
        DispatchOutcome::Applied {
            page: menu.page(),
            pages: menu.page_count(),
        }
    }

    /// Best-effort removal of the triggering reaction.
    async fn strip(&self, menu: &Menu, event: &ReactionEvent) {
        if let Err(e) = self
            .platform
            .remove_reaction(
                menu.target().channel_id,
                menu.message_id(),
                event.user_id,
                &event.glyph,
            )
            .await
        {
            debug!(target="menu.dispatch", error=%e, "could not strip reaction");
        }
    }

    /// A message was deleted. Deleting the menu itself drops it silently; deleting the
    /// command message that produced a menu disables that menu.
    #[instrument(level = "debug", skip(self))]
    pub async fn content_removed(&self, message_id: MessageId) -> bool {
        if let Some(handle) = self.registry.lookup(message_id).await {
            let mut menu = handle.lock().await;
            if menu.is_disabled() {
                return false;
            }
            menu.mark_disabled();
            self.registry.remove_handle(message_id, &handle).await;
            debug!(target="menu.dispatch", message_id=%message_id, "menu message deleted");
            return true;
        }

        let mut disabled = false;
        for (_, handle) in self.registry.snapshot().await {
            let triggered_by = handle.lock().await.target().trigger;
            if triggered_by == Some(message_id) {
                disabled |= self.disable(&handle).await;
            }
        }
        disabled
    }
}
