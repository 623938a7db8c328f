use crate::commands::lookup::LookupKind;
use crate::commands::{self, Command};
use crate::menu::{ReactionEvent, spawn_sweeper};
use crate::AppState;
use serenity::async_trait;
use serenity::client::Context;
use serenity::model::channel::{Message, Reaction, ReactionType};
use serenity::model::gateway::Ready;
use serenity::model::id::{ChannelId, GuildId, MessageId};
use serenity::prelude::EventHandler;
use std::str::FromStr;
use std::sync::Arc;
use std::sync::atomic::Ordering;
use std::time::{Duration, Instant};
use tracing::{debug, error, info};

pub struct Handler {
    pub allowed_guild_id: Option<GuildId>,
    pub sweep_interval: Duration,
}

impl Handler {
    fn serves(&self, guild_id: Option<GuildId>) -> bool {
        self.allowed_guild_id.is_none() || guild_id == self.allowed_guild_id
    }
}

async fn app_state(ctx: &Context) -> Option<Arc<AppState>> {
    let state = AppState::from_ctx(ctx).await;
    if state.is_none() {
        error!(target = "handler", "AppState missing from the TypeMap");
    }
    state
}

#[async_trait]
impl EventHandler for Handler {
    async fn message(&self, ctx: Context, msg: Message) {
        if !self.serves(msg.guild_id) || msg.author.bot {
            return;
        }
        let Some(app_state) = app_state(&ctx).await else {
            return;
        };
        let Some(command_body) = msg.content.strip_prefix(app_state.prefix.as_str()) else {
            return;
        };
        let mut args = command_body.split_whitespace();
        let Some(command_str) = args.next() else {
            return;
        };
        let command = Command::from_str(command_str).unwrap_or(Command::Unknown);
        let args_vec: Vec<&str> = args.collect();
        match command {
            Command::Recipe => {
                commands::recipe::run_prefix(&ctx, &msg, args_vec, app_state, LookupKind::Producing)
                    .await
            }
            Command::Usage => {
                commands::recipe::run_prefix(&ctx, &msg, args_vec, app_state, LookupKind::Consuming)
                    .await
            }
            Command::Item => {
                commands::recipe::run_prefix(&ctx, &msg, args_vec, app_state, LookupKind::Items)
                    .await
            }
            Command::Help => commands::help::run_prefix(&ctx, &msg, &app_state.prefix).await,
            Command::Unknown => {}
        }
    }

    async fn reaction_add(&self, ctx: Context, reaction: Reaction) {
        if !self.serves(reaction.guild_id) {
            return;
        }
        let Some(user_id) = reaction.user_id else {
            return;
        };
        if user_id == ctx.cache.current_user().id {
            return;
        }
        // Custom emoji never match a menu button; the dispatcher strips them like any unknown glyph.
        let glyph = match &reaction.emoji {
            ReactionType::Unicode(s) => s.clone(),
            other => other.to_string(),
        };
        let event = ReactionEvent {
            channel_id: reaction.channel_id,
            message_id: reaction.message_id,
            user_id,
            glyph,
        };
        let Some(app_state) = app_state(&ctx).await else {
            return;
        };
        let outcome = app_state
            .engine
            .dispatch_reaction(&event, Instant::now())
            .await;
        debug!(target="handler.reaction", message_id=%event.message_id, ?outcome);
    }

    async fn message_delete(
        &self,
        ctx: Context,
        _channel_id: ChannelId,
        deleted_message_id: MessageId,
        guild_id: Option<GuildId>,
    ) {
        if !self.serves(guild_id) {
            return;
        }
        let Some(app_state) = app_state(&ctx).await else {
            return;
        };
        app_state.engine.content_removed(deleted_message_id).await;
    }

    async fn ready(&self, ctx: Context, ready: Ready) {
        info!(target="handler.ready", user=%ready.user.name, "connected and ready");
        let Some(app_state) = app_state(&ctx).await else {
            return;
        };
        if !app_state.sweeper_started.swap(true, Ordering::SeqCst) {
            spawn_sweeper(app_state.engine.clone(), self.sweep_interval);
            info!(target="handler.ready", every_secs=self.sweep_interval.as_secs(), "menu sweeper started");
        }
    }
}
