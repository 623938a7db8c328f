//! Discord implementation of [`ChatPlatform`] over serenity's HTTP client.
use super::ChatPlatform;
use crate::error::PlatformError;
use crate::menu::render::Page;
use crate::ui::embed::page_embed;
use async_trait::async_trait;
use serenity::builder::{CreateMessage, EditMessage};
use serenity::http::{Http, HttpError};
use serenity::model::channel::ReactionType;
use serenity::model::id::{ChannelId, MessageId, UserId};
use std::sync::Arc;

const DISCORD_MISSING_PERMISSIONS: isize = 50013;

pub struct DiscordPlatform {
    http: Arc<Http>,
}

impl DiscordPlatform {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

/// Whether a failed request was refused for lack of permissions.
pub fn is_permission_fault(status: u16, code: isize) -> bool {
    status == 403 || code == DISCORD_MISSING_PERMISSIONS
}

/// Maps a serenity error onto the platform taxonomy.
fn classify(op: &'static str, err: serenity::Error) -> PlatformError {
    if let serenity::Error::Http(HttpError::UnsuccessfulRequest(resp)) = &err
        && is_permission_fault(resp.status_code.as_u16(), resp.error.code)
    {
        return PlatformError::MissingPermissions(op);
    }
    PlatformError::Request(format!("{op}: {err}"))
}

fn reaction(glyph: &str) -> ReactionType {
    ReactionType::Unicode(glyph.to_string())
}

#[async_trait]
impl ChatPlatform for DiscordPlatform {
    async fn post_message(
        &self,
        channel: ChannelId,
        page: &Page,
    ) -> Result<MessageId, PlatformError> {
        let builder = CreateMessage::new().embed(page_embed(page));
        channel
            .send_message(&self.http, builder)
            .await
            .map(|msg| msg.id)
            .map_err(|e| classify("send messages", e))
    }

    async fn edit_message(
        &self,
        channel: ChannelId,
        message: MessageId,
        page: &Page,
    ) -> Result<(), PlatformError> {
        let builder = EditMessage::new().embed(page_embed(page));
        channel
            .edit_message(&self.http, message, builder)
            .await
            .map(|_| ())
            .map_err(|e| classify("edit messages", e))
    }

    async fn add_reaction(
        &self,
        channel: ChannelId,
        message: MessageId,
        glyph: &str,
    ) -> Result<(), PlatformError> {
        channel
            .create_reaction(&self.http, message, reaction(glyph))
            .await
            .map_err(|e| classify("add reactions", e))
    }

    async fn clear_buttons(
        &self,
        channel: ChannelId,
        message: MessageId,
    ) -> Result<(), PlatformError> {
        channel
            .delete_reactions(&self.http, message)
            .await
            .map_err(|e| classify("manage messages", e))
    }

    async fn remove_reaction(
        &self,
        channel: ChannelId,
        message: MessageId,
        user: UserId,
        glyph: &str,
    ) -> Result<(), PlatformError> {
        channel
            .delete_reaction(&self.http, message, Some(user), reaction(glyph))
            .await
            .map_err(|e| classify("manage messages", e))
    }
}
