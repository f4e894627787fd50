use teloxide::utils::command::BotCommands;

#[derive(BotCommands, Clone, Debug, PartialEq)]
#[command(rename_rule = "snake_case", description = "Token Monitor Bot Commands:")]
pub enum Command {
    #[command(description = "Start the bot and see welcome message")]
    Start,

    #[command(description = "Show all available commands")]
    Help,

    #[command(description = "Check bot and system status")]
    Status,

    #[command(description = "Show detailed bot information")]
    Info,

    #[command(description = "Add a new keyword to monitor - Usage: /add_keyword <keyword>")] AddKeyword(
        String,
    ),

    #[command(description = "Remove a keyword - Usage: /remove_keyword <keyword>")] RemoveKeyword(
        String,
    ),

    #[command(description = "Show all your monitored keywords")]
    ListKeywords,

    #[command(description = "Remove all your keywords")]
    ClearKeywords,

    #[command(description = "Show recently detected tokens - Usage: /recent_tokens [limit]")] RecentTokens(
        String,
    ),

    #[command(description = "Get detailed token information - Usage: /token_info <address>")] TokenInfo(
        String,
    ),

    #[command(description = "Search tokens by name or symbol - Usage: /search_tokens <query>")] SearchTokens(
        String,
    ),

    #[command(description = "Show token detection statistics")]
    TokenStats,

    #[command(description = "Get market data for a token - Usage: /market_data <address>")] MarketData(
        String,
    ),

    #[command(description = "Quick price check for a token - Usage: /price_check <address>")] PriceCheck(
        String,
    ),

    #[command(description = "Show top performing tokens")]
    TopTokens,

    #[command(description = "Show highest volume tokens")]
    VolumeLeaders,

    #[command(description = "Show your notification settings")]
    Notifications,

    #[command(description = "Show recent alert history - Usage: /alert_history [limit]")] AlertHistory(
        String,
    ),

    #[command(description = "Send a test notification")]
    TestNotification,

    #[command(
        description = "Choose alert platforms - Usage: /platform_preferences <LetsBonk|Pump.fun|Other|view> [true|false]"
    )] PlatformPreferences(String),

    #[command(description = "Get buy recommendations - Usage: /buy_signal <address>")] BuySignal(
        String,
    ),

    #[command(description = "Get sell recommendations - Usage: /sell_signal <address>")] SellSignal(
        String,
    ),

    #[command(description = "Analyze token trends - Usage: /trend_analysis <address>")] TrendAnalysis(
        String,
    ),

    #[command(description = "Show your portfolio")]
    Portfolio,

    #[command(description = "Show database statistics")]
    DatabaseStats,

    #[command(description = "Check overall system health")]
    SystemHealth,

    #[command(description = "Restart the monitoring system")]
    RestartMonitor,

    #[command(description = "Export your monitoring data")]
    ExportData,
}

impl Command {
    /// Command name as typed in chat, without the slash.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Start => "start",
            Command::Help => "help",
            Command::Status => "status",
            Command::Info => "info",
            Command::AddKeyword(_) => "add_keyword",
            Command::RemoveKeyword(_) => "remove_keyword",
            Command::ListKeywords => "list_keywords",
            Command::ClearKeywords => "clear_keywords",
            Command::RecentTokens(_) => "recent_tokens",
            Command::TokenInfo(_) => "token_info",
            Command::SearchTokens(_) => "search_tokens",
            Command::TokenStats => "token_stats",
            Command::MarketData(_) => "market_data",
            Command::PriceCheck(_) => "price_check",
            Command::TopTokens => "top_tokens",
            Command::VolumeLeaders => "volume_leaders",
            Command::Notifications => "notifications",
            Command::AlertHistory(_) => "alert_history",
            Command::TestNotification => "test_notification",
            Command::PlatformPreferences(_) => "platform_preferences",
            Command::BuySignal(_) => "buy_signal",
            Command::SellSignal(_) => "sell_signal",
            Command::TrendAnalysis(_) => "trend_analysis",
            Command::Portfolio => "portfolio",
            Command::DatabaseStats => "database_stats",
            Command::SystemHealth => "system_health",
            Command::RestartMonitor => "restart_monitor",
            Command::ExportData => "export_data",
        }
    }

    /// Gerund phrase used in generic error replies ("Error adding keyword").
    pub fn action(&self) -> &'static str {
        match self {
            Command::Start | Command::Help => "showing help",
            Command::Status => "checking status",
            Command::Info => "showing info",
            Command::AddKeyword(_) => "adding keyword",
            Command::RemoveKeyword(_) => "removing keyword",
            Command::ListKeywords => "listing keywords",
            Command::ClearKeywords => "clearing keywords",
            Command::RecentTokens(_) => "fetching recent tokens",
            Command::TokenInfo(_) => "getting token info",
            Command::SearchTokens(_) => "searching tokens",
            Command::TokenStats => "getting stats",
            Command::MarketData(_) => "getting market data",
            Command::PriceCheck(_) => "checking price",
            Command::TopTokens => "getting top tokens",
            Command::VolumeLeaders => "getting volume leaders",
            Command::Notifications => "getting notifications",
            Command::AlertHistory(_) => "getting alert history",
            Command::TestNotification => "sending test",
            Command::PlatformPreferences(_) => "managing platform preferences",
            Command::BuySignal(_) => "analyzing buy signal",
            Command::SellSignal(_) => "analyzing sell signal",
            Command::TrendAnalysis(_) => "analyzing trends",
            Command::Portfolio => "showing portfolio",
            Command::DatabaseStats => "getting database stats",
            Command::SystemHealth => "checking system health",
            Command::RestartMonitor => "restarting monitor",
            Command::ExportData => "exporting data",
        }
    }
}
