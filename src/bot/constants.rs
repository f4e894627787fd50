// Static texts. Everything here is plain text; escaping happens when a reply is rendered.

pub mod messages {
    pub const WELCOME_TITLE: &str = "🤖 Welcome to Solana Token Monitor!";
    pub const WELCOME_TEXT: &str =
        "I watch newly launched Solana tokens and alert you when one matches your keywords.

Quick start:
1. Add a keyword: /add_keyword pepe
2. Check what you monitor: /list_keywords
3. Pick alert platforms: /platform_preferences view

Use /help to see all available commands.";

    pub const HELP_TITLE: &str = "🤖 Token Monitor Commands";
    pub const HELP_CATALOG: &str =
        "General Commands:
• /status - Check bot and system status
• /help - Show this help menu
• /info - Show detailed bot information

Keyword Management:
• /add_keyword - Add a new keyword to monitor
• /remove_keyword - Remove a keyword
• /list_keywords - Show your keywords
• /clear_keywords - Remove all your keywords

Token Information:
• /recent_tokens - Show recently detected tokens
• /token_info - Get detailed token information
• /search_tokens - Search for specific tokens
• /token_stats - Show token statistics

Market Data:
• /market_data - Get market data for a token
• /price_check - Check current token price
• /top_tokens - Show top performing tokens (coming soon)
• /volume_leaders - Show highest volume tokens (coming soon)

Monitoring & Alerts:
• /notifications - Show notification settings
• /alert_history - Show recent alerts
• /test_notification - Send test notification
• /platform_preferences - Choose alert platforms

Trading & Analysis (coming soon):
• /buy_signal - Get buy recommendations
• /sell_signal - Get sell recommendations
• /trend_analysis - Analyze token trends
• /portfolio - Show your portfolio

System & Admin:
• /database_stats - Show database statistics
• /system_health - Check system health
• /restart_monitor - Restart monitoring (coming soon)
• /export_data - Export your data";

    pub const SERVICE_UNAVAILABLE: &str =
        "The service is temporarily unavailable. Please try again later.";

    pub const ERR_KEYWORD_REQUIRED: &str = "Please provide a keyword. Usage: /add_keyword <keyword>";
    pub const ERR_REMOVE_KEYWORD_REQUIRED: &str =
        "Please provide a keyword. Usage: /remove_keyword <keyword>";
    pub const ERR_ADDRESS_REQUIRED: &str = "Please provide a token address";
    pub const ERR_QUERY_REQUIRED: &str = "Please provide a search query. Usage: /search_tokens <query>";
    pub const ERR_INVALID_LIMIT: &str = "Limit must be a whole number, for example 10";

    pub const PREFERENCES_HOW_TO: &str =
        "Use: /platform_preferences <platform> <true/false>\nExample: /platform_preferences LetsBonk true";
}

pub mod info {
    pub const BOT_NAME: &str = "Solana Token Monitor";
    pub const PLATFORM: &str = "Solana Blockchain";
    pub const DATA_SOURCE: &str = "PumpPortal API";
    pub const DATABASE: &str = "PostgreSQL";
    pub const FOOTER: &str = "Built for 24/7 token monitoring";
}
