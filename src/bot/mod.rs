pub mod commands;
pub mod constants;
pub mod reply;
pub mod router;
mod handlers;
mod utils;

use std::sync::Arc;

use sea_orm::DatabaseConnection;
use teloxide::dispatching::{ UpdateFilterExt, UpdateHandler };
use teloxide::prelude::*;
use teloxide::types::ParseMode;
use teloxide::utils::command::BotCommands;

use crate::config::Config;
use crate::db::{
    KeywordRepository,
    NotificationRepository,
    PlatformPreferenceRepository,
    StatsRepository,
    TokenRepository,
};
use crate::providers::MarketDataProvider;
use crate::services::{ ExportService, HealthService };

pub use commands::Command;
pub use reply::{ Reply, ReplyKind };
pub use router::{ CommandContext, CommandRouter };

#[derive(Clone)]
pub struct BotState {
    pub keywords: Arc<KeywordRepository>,
    pub tokens: Arc<TokenRepository>,
    pub notifications: Arc<NotificationRepository>,
    pub preferences: Arc<PlatformPreferenceRepository>,
    pub stats: Arc<StatsRepository>,
    pub health: Arc<HealthService>,
    pub export: Arc<ExportService>,
    pub market_data: Arc<dyn MarketDataProvider>,
    pub config: Arc<Config>,
}

impl BotState {
    pub fn new(
        db: DatabaseConnection,
        market_data: Arc<dyn MarketDataProvider>,
        config: Arc<Config>
    ) -> Self {
        let keywords = Arc::new(KeywordRepository::new(db.clone()));
        let tokens = Arc::new(TokenRepository::new(db.clone()));
        let notifications = Arc::new(NotificationRepository::new(db.clone()));
        let preferences = Arc::new(PlatformPreferenceRepository::new(db.clone()));
        let stats = Arc::new(StatsRepository::new(db));

        Self {
            health: Arc::new(HealthService::new(stats.clone(), tokens.clone())),
            export: Arc::new(ExportService::new(keywords.clone(), notifications.clone())),
            keywords,
            tokens,
            notifications,
            preferences,
            stats,
            market_data,
            config,
        }
    }
}

async fn handle_command_dispatch(
    bot: Bot,
    msg: Message,
    cmd: Command,
    router: Arc<CommandRouter>
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Channel posts carry no sender; fall back to the chat id
    let ctx = match &msg.from {
        Some(user) => CommandContext::new(user.id.0.to_string(), user.username.clone()),
        None => CommandContext::new(msg.chat.id.0.to_string(), None),
    };

    let reply = router.dispatch(ctx, cmd).await;

    bot.send_message(msg.chat.id, reply.render_markdown()).parse_mode(ParseMode::MarkdownV2).await?;
    Ok(())
}

fn schema() -> UpdateHandler<Box<dyn std::error::Error + Send + Sync + 'static>> {
    Update::filter_message().filter_command::<Command>().endpoint(handle_command_dispatch)
}

pub async fn run_bot(bot_token: String, router: Arc<CommandRouter>) {
    tracing::info!("Starting Telegram bot...");

    let bot = Bot::new(bot_token);

    if let Err(e) = bot.set_my_commands(Command::bot_commands()).await {
        tracing::warn!("Failed to set bot commands: {}", e);
    } else {
        tracing::info!("Registered {} bot commands", Command::bot_commands().len());
    }

    Dispatcher::builder(bot, schema())
        .dependencies(dptree::deps![router])
        .enable_ctrlc_handler()
        .build()
        .dispatch().await;
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use async_trait::async_trait;
    use chrono::Utc;

    use super::*;
    use crate::db::test_support::{ insert_notification, insert_token, memory_db };
    use crate::providers::MarketSnapshot;
    use crate::services::export_service::{ EXPORT_MAX_CHARS, TRUNCATION_MARKER };

    struct StubMarketData(MarketSnapshot);

    #[async_trait]
    impl MarketDataProvider for StubMarketData {
        async fn snapshot(&self, _token_address: &str) -> MarketSnapshot {
            self.0
        }
    }

    struct SlowMarketData;

    #[async_trait]
    impl MarketDataProvider for SlowMarketData {
        async fn snapshot(&self, _token_address: &str) -> MarketSnapshot {
            tokio::time::sleep(Duration::from_secs(5)).await;
            MarketSnapshot::default()
        }
    }

    async fn router_with(market_data: Arc<dyn MarketDataProvider>) -> (CommandRouter, DatabaseConnection) {
        let db = memory_db().await;
        let state = BotState::new(db.clone(), market_data, Arc::new(Config::for_tests()));
        (CommandRouter::new(Arc::new(state)), db)
    }

    async fn router() -> (CommandRouter, DatabaseConnection) {
        router_with(Arc::new(StubMarketData(MarketSnapshot::default()))).await
    }

    fn alice() -> CommandContext {
        CommandContext::new("1001", Some("alice".to_string()))
    }

    #[tokio::test]
    async fn test_keyword_lifecycle() {
        let (router, _db) = router().await;

        let added = router.dispatch(alice(), Command::AddKeyword("Pepe".into())).await;
        assert_eq!(added.kind, ReplyKind::Success);
        assert_eq!(added.description.as_deref(), Some("Now monitoring: pepe"));

        let duplicate = router.dispatch(alice(), Command::AddKeyword("pepe".into())).await;
        assert_eq!(duplicate.kind, ReplyKind::Warning);
        assert_eq!(duplicate.title, "❌ Keyword Already Exists");
        assert_eq!(router.state().keywords.count_for_user("1001").await.unwrap(), 1);

        let removed = router.dispatch(alice(), Command::RemoveKeyword("pepe".into())).await;
        assert_eq!(removed.title, "✅ Keyword Removed");

        let missing = router.dispatch(alice(), Command::RemoveKeyword("pepe".into())).await;
        assert_eq!(missing.kind, ReplyKind::Warning);
        assert_eq!(missing.title, "❌ Keyword Not Found");
    }

    #[tokio::test]
    async fn test_short_keyword_is_rejected() {
        let (router, _db) = router().await;

        let reply = router.dispatch(alice(), Command::AddKeyword("a".into())).await;
        assert_eq!(reply.kind, ReplyKind::Error);
        assert_eq!(reply.title, "❌ Keyword must be at least 2 characters long");
    }

    #[tokio::test]
    async fn test_clear_keywords_reports_count() {
        let (router, _db) = router().await;
        router.dispatch(alice(), Command::AddKeyword("pepe".into())).await;
        router.dispatch(alice(), Command::AddKeyword("doge".into())).await;

        let reply = router.dispatch(alice(), Command::ClearKeywords).await;
        assert_eq!(reply.description.as_deref(), Some("Removed 2 keywords from monitoring"));

        let list = router.dispatch(alice(), Command::ListKeywords).await;
        assert!(list.description.unwrap().contains("not monitoring any keywords"));
    }

    #[tokio::test]
    async fn test_token_info_without_market_data() {
        let (router, db) = router().await;
        insert_token(&db, "So1anaPepeAddress", "Pepe", "PEPE", Utc::now()).await;

        let reply = router.dispatch(alice(), Command::TokenInfo("So1anaPepeAddress".into())).await;
        assert_eq!(reply.kind, ReplyKind::Info);
        assert_eq!(reply.title, "🪙 Pepe (PEPE)");
        assert!(reply.has_field("📍 Address"));
        assert!(!reply.has_field("💰 Price"));
        assert!(!reply.has_field("💧 Liquidity"));
    }

    #[tokio::test]
    async fn test_token_info_with_market_data() {
        let snapshot = MarketSnapshot {
            price: Some(0.000123),
            market_cap: Some(1_500_000.0),
            volume_24h: None,
            liquidity: Some(45_000.0),
        };
        let (router, db) = router_with(Arc::new(StubMarketData(snapshot))).await;
        insert_token(&db, "addr", "Pepe", "PEPE", Utc::now()).await;

        let reply = router.dispatch(alice(), Command::TokenInfo("addr".into())).await;
        assert_eq!(reply.field_value("💰 Price"), Some("$0.00012300"));
        assert_eq!(reply.field_value("📊 Market Cap"), Some("$1.5M"));
        assert_eq!(reply.field_value("💧 Liquidity"), Some("$45K"));
        assert!(!reply.has_field("📈 Volume 24h"));
    }

    #[tokio::test]
    async fn test_unknown_token() {
        let (router, _db) = router().await;

        let reply = router.dispatch(alice(), Command::TokenInfo("nope".into())).await;
        assert_eq!(reply.title, "❌ Token Not Found");
    }

    #[tokio::test]
    async fn test_price_check_without_data() {
        let (router, _db) = router().await;

        let reply = router.dispatch(alice(), Command::PriceCheck("addr".into())).await;
        assert_eq!(reply.title, "❌ Price data not available");

        let market = router.dispatch(alice(), Command::MarketData("addr".into())).await;
        assert_eq!(market.title, "❌ No market data found for this token");
    }

    #[tokio::test]
    async fn test_recent_tokens_limit() {
        let (router, db) = router().await;
        for i in 0..30 {
            insert_token(
                &db,
                &format!("addr{}", i),
                &format!("Token{}", i),
                "TKN",
                Utc::now() - chrono::Duration::minutes(i)
            ).await;
        }

        let default = router.dispatch(alice(), Command::RecentTokens(String::new())).await;
        assert_eq!(default.fields.len(), 10);
        assert_eq!(default.fields[0].name, "Token0 (TKN)");

        let capped = router.dispatch(alice(), Command::RecentTokens("100".into())).await;
        assert_eq!(capped.title, "🆕 Recent Tokens (25)");

        let zero = router.dispatch(alice(), Command::RecentTokens("0".into())).await;
        assert!(zero.fields.is_empty());

        let invalid = router.dispatch(alice(), Command::RecentTokens("many".into())).await;
        assert_eq!(invalid.kind, ReplyKind::Error);
    }

    #[tokio::test]
    async fn test_search_requires_query() {
        let (router, _db) = router().await;

        let reply = router.dispatch(alice(), Command::SearchTokens("  ".into())).await;
        assert_eq!(reply.kind, ReplyKind::Error);
    }

    #[tokio::test]
    async fn test_platform_preferences_defaults_and_update() {
        let (router, _db) = router().await;

        let view = router.dispatch(alice(), Command::PlatformPreferences("view".into())).await;
        assert_eq!(view.field_value("🟠 LetsBonk"), Some("✅ Enabled"));
        assert_eq!(view.field_value("🔵 Pump.fun"), Some("✅ Enabled"));
        assert_eq!(view.field_value("⚪ Other"), Some("❌ Disabled"));

        let set = router.dispatch(alice(), Command::PlatformPreferences("other on".into())).await;
        assert_eq!(set.kind, ReplyKind::Success);

        let view = router.dispatch(alice(), Command::PlatformPreferences(String::new())).await;
        assert_eq!(view.field_value("⚪ Other"), Some("✅ Enabled"));

        let invalid = router.dispatch(alice(), Command::PlatformPreferences("raydium true".into())).await;
        assert_eq!(invalid.kind, ReplyKind::Error);
        assert!(invalid.title.contains("Valid options"));
    }

    #[tokio::test]
    async fn test_placeholders_are_not_implemented() {
        let (router, _db) = router().await;

        for cmd in [
            Command::TopTokens,
            Command::VolumeLeaders,
            Command::BuySignal("addr".into()),
            Command::SellSignal(String::new()),
            Command::TrendAnalysis(String::new()),
            Command::Portfolio,
            Command::RestartMonitor,
        ] {
            let reply = router.dispatch(alice(), cmd).await;
            assert_eq!(reply.kind, ReplyKind::NotImplemented);
        }
    }

    #[tokio::test]
    async fn test_export_is_capped() {
        let (router, db) = router().await;
        for i in 0..100 {
            insert_notification(
                &db,
                "1001",
                &format!("Some Fairly Long Token Name {}", i),
                "pepe",
                Utc::now()
            ).await;
        }

        let reply = router.dispatch(alice(), Command::ExportData).await;
        let text = reply.description.unwrap();
        assert!(text.chars().count() <= EXPORT_MAX_CHARS);
        assert!(text.ends_with(TRUNCATION_MARKER));
    }

    #[tokio::test]
    async fn test_alert_history_and_counts() {
        let (router, db) = router().await;
        insert_notification(&db, "1001", "Pepe", "pepe", Utc::now()).await;
        insert_notification(&db, "2002", "Doge", "doge", Utc::now()).await;

        let history = router.dispatch(alice(), Command::AlertHistory(String::new())).await;
        assert_eq!(history.title, "🚨 Recent Alerts (1)");
        assert!(history.has_field("Pepe"));

        let notifications = router.dispatch(alice(), Command::Notifications).await;
        assert_eq!(notifications.field_value("📨 Total Notifications"), Some("1"));
    }

    #[tokio::test]
    async fn test_status_and_stats() {
        let (router, db) = router().await;
        insert_token(&db, "a1", "Pepe", "PEPE", Utc::now()).await;
        router.dispatch(alice(), Command::AddKeyword("pepe".into())).await;

        let status = router.dispatch(alice(), Command::Status).await;
        assert_eq!(status.field_value("🗄️ Database"), Some("✅ Connected"));
        assert_eq!(status.field_value("🔍 Keywords"), Some("1 active"));
        assert_eq!(status.field_value("📊 Tokens (24h)"), Some("1 detected"));

        let stats = router.dispatch(alice(), Command::DatabaseStats).await;
        assert_eq!(stats.field_value("👥 Total Users"), Some("1"));

        let health = router.dispatch(alice(), Command::SystemHealth).await;
        assert_eq!(health.field_value("📊 Overall"), Some("✅ Operational"));
    }

    #[tokio::test]
    async fn test_closed_database_replies_unavailable() {
        let (router, db) = router().await;
        db.close().await.unwrap();

        let reply = router.dispatch(alice(), Command::ListKeywords).await;
        assert_eq!(reply.kind, ReplyKind::Unavailable);
    }

    #[tokio::test]
    async fn test_slow_command_times_out() {
        let (router, _db) = router_with(Arc::new(SlowMarketData)).await;
        let mut config = Config::for_tests();
        config.command_timeout = Duration::from_millis(100);
        let state = BotState { config: Arc::new(config), ..router.state().clone() };
        let router = CommandRouter::new(Arc::new(state));

        let reply = router.dispatch(alice(), Command::PriceCheck("addr".into())).await;
        assert_eq!(reply.kind, ReplyKind::Unavailable);
        assert_eq!(reply.title, "⏱️ Request timed out");
    }
}
