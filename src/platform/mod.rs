//! The outbound seam to the chat platform.
//!
//! The menu engine only talks to the platform through [`ChatPlatform`]; the Discord
//! implementation lives in [`discord`].
use crate::error::PlatformError;
use crate::menu::render::Page;
use async_trait::async_trait;
use serenity::model::id::{ChannelId, MessageId, UserId};

pub mod discord;

pub use discord::DiscordPlatform;

#[async_trait]
pub trait ChatPlatform: Send + Sync {
    /// Posts a page and returns the id of the new message.
    async fn post_message(&self, channel: ChannelId, page: &Page)
    -> Result<MessageId, PlatformError>;

    async fn edit_message(
        &self,
        channel: ChannelId,
        message: MessageId,
        page: &Page,
    ) -> Result<(), PlatformError>;

    /// Adds the bot's own reaction.
    async fn add_reaction(
        &self,
        channel: ChannelId,
        message: MessageId,
        glyph: &str,
    ) -> Result<(), PlatformError>;

    async fn clear_buttons(&self, channel: ChannelId, message: MessageId)
    -> Result<(), PlatformError>;

    /// Removes one user's reaction.
    async fn remove_reaction(
        &self,
        channel: ChannelId,
        message: MessageId,
        user: UserId,
        glyph: &str,
    ) -> Result<(), PlatformError>;

    /// Adds `glyphs` in order. Stops at the first failure.
    async fn add_buttons(
        &self,
        channel: ChannelId,
        message: MessageId,
        glyphs: &[&str],
    ) -> Result<(), PlatformError> {
        for glyph in glyphs {
            self.add_reaction(channel, message, glyph).await?;
        }
        Ok(())
    }

    /// Replaces every reaction on the message with `glyphs`.
    ///
    /// Clearing needs more permissions than adding, so a denied clear does not stop
    /// the new buttons from being attached. The permission fault is still returned
    /// once the buttons are in place.
    async fn set_buttons(
        &self,
        channel: ChannelId,
        message: MessageId,
        glyphs: &[&str],
    ) -> Result<(), PlatformError> {
        let denied = match self.clear_buttons(channel, message).await {
            Ok(()) => None,
            Err(e) if e.is_permission() => Some(e),
            Err(e) => return Err(e),
        };
        self.add_buttons(channel, message, glyphs).await?;
        denied.map_or(Ok(()), Err)
    }
}
