use std::sync::Arc;

use anyhow::Context as _;
use recipe_bot::config::Config;
use recipe_bot::data::GraphSource;
use recipe_bot::handler::Handler;
use recipe_bot::menu::{MenuEngine, MenuRegistry};
use recipe_bot::platform::DiscordPlatform;
use recipe_bot::AppState;
use serenity::model::gateway::GatewayIntents;
use serenity::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = Config::from_env().context("invalid configuration")?;

    // A corrupt dataset is fatal: refuse to start rather than fail mid-query.
    let graph = Arc::new(
        GraphSource::load_file(&config.data_path)
            .with_context(|| format!("failed to load {}", config.data_path.display()))?,
    );

    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::GUILD_MESSAGE_REACTIONS
        | GatewayIntents::MESSAGE_CONTENT;

    let mut client = Client::builder(&config.token, intents)
        .event_handler(Handler {
            allowed_guild_id: config.allowed_guild_id,
            sweep_interval: config.sweep_interval,
        })
        .await
        .context("error creating the Discord client")?;

    let engine = Arc::new(MenuEngine::new(
        Arc::new(MenuRegistry::new()),
        graph,
        Arc::new(DiscordPlatform::new(client.http.clone())),
        config.locale.clone(),
        config.menu_ttl,
    ));
    {
        let mut data = client.data.write().await;
        data.insert::<AppState>(Arc::new(AppState::new(
            engine,
            config.prefix.clone(),
            config.locale.clone(),
        )));
    }

    client.start().await.context("client error")?;
    Ok(())
}
