//! `recipe`, `usage` and `item`: open a menu over a graph query.
use super::lookup::{LookupKind, nodes_for};
use crate::AppState;
use crate::error::MenuError;
use crate::menu::RenderTarget;
use crate::ui::style::error_embed;
use serenity::builder::CreateMessage;
use serenity::model::channel::Message;
use serenity::prelude::Context;
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, instrument, warn};

#[instrument(level = "debug", skip(ctx, msg, app_state), fields(user_id = msg.author.id.get()))]
pub async fn run_prefix(
    ctx: &Context,
    msg: &Message,
    args: Vec<&str>,
    app_state: Arc<AppState>,
    kind: LookupKind,
) {
    let query = args.join(" ");
    let nodes = match nodes_for(&app_state.graph, kind, &query, &app_state.locale) {
        Ok(nodes) => nodes,
        Err(miss) => {
            msg.reply(&ctx.http, miss.message()).await.ok();
            return;
        }
    };

    let target = RenderTarget {
        channel_id: msg.channel_id,
        trigger: Some(msg.id),
    };
    match app_state
        .engine
        .create_menu(nodes, msg.author.id, target, Instant::now())
        .await
    {
        Ok(_) => {}
        Err(MenuError::Platform(e)) => {
            // Nothing was posted; the channel probably forbids embeds or messages.
            warn!(target="commands.menu", channel_id=%msg.channel_id, error=%e, "could not post menu");
        }
        Err(e) => {
            error!(target="commands.menu", error=%e, "menu creation failed");
            let embed = error_embed("Something went wrong", e.to_string());
            msg.channel_id
                .send_message(&ctx.http, CreateMessage::new().embed(embed))
                .await
                .ok();
        }
    }
}
