use std::sync::Arc;

use anyhow::Context;
use migration::MigratorTrait;
use teloxide::utils::command::BotCommands;
use token_monitor_bot::{
    api,
    bot::{ self, BotState, Command, CommandRouter },
    db,
    notifier,
    services::MarketDataService,
    Config,
};
use tracing_subscriber::{ layer::SubscriberExt, util::SubscriberInitExt };

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber
        ::registry()
        .with(
            tracing_subscriber::EnvFilter
                ::try_from_default_env()
                .unwrap_or_else(|_| "token_monitor_bot=debug,tower_http=debug".into())
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Arc::new(
        Config::from_env().map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?
    );

    let db = db::connect(&config).await.context("Failed to connect to database")?;
    tracing::info!("Database connected successfully");

    migration::Migrator::up(&db, None).await.context("Failed to run migrations")?;
    tracing::info!("Migrations completed successfully");

    let market_data = Arc::new(
        MarketDataService::new(&config.market_data_api_url, config.market_data_timeout)?
    );

    let state = Arc::new(BotState::new(db, market_data, config.clone()));
    let router = Arc::new(CommandRouter::new(state.clone()));

    let app = api::router(api::AppState::new(state.stats.clone(), state.health.clone()));
    let addr = config.server_addr();
    let listener = tokio::net::TcpListener
        ::bind(&addr).await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Health server listening on {}", addr);

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            tracing::error!("Health server stopped: {}", e);
        }
    });

    if let Some(url) = &config.startup_webhook_url {
        notifier::announce_startup(url, Command::bot_commands().len()).await;
    }

    bot::run_bot(config.telegram_bot_token.clone(), router).await;

    tracing::info!("Bot stopped");
    Ok(())
}
