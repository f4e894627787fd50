use chrono::Utc;

use super::commands::Command;
use super::constants::{ info, messages as msg };
use super::reply::Reply;
use super::router::CommandContext;
use super::utils::{ format_age, format_count, format_market_cap, format_price, short_address };
use super::BotState;
use crate::db::{ RemoveOutcome, DEFAULT_LIST_LIMIT };
use crate::enums::{ parse_toggle, Platform, TokenWindow };
use crate::error::{ AppError, Result };
use crate::providers::MarketSnapshot;

/// Run one command to completion. Errors are turned into replies by the router.
pub(super) async fn handle(state: &BotState, ctx: &CommandContext, cmd: Command) -> Result<Reply> {
    let user_id = ctx.user_id.as_str();

    match cmd {
        Command::Start => Ok(handle_start()),
        Command::Help => Ok(handle_help()),
        Command::Status => handle_status(state).await,
        Command::Info => Ok(handle_info()),
        Command::AddKeyword(text) => handle_add_keyword(state, user_id, &text).await,
        Command::RemoveKeyword(text) => handle_remove_keyword(state, user_id, &text).await,
        Command::ListKeywords => handle_list_keywords(state, user_id).await,
        Command::ClearKeywords => handle_clear_keywords(state, user_id).await,
        Command::RecentTokens(args) => handle_recent_tokens(state, &args).await,
        Command::TokenInfo(address) => handle_token_info(state, &address).await,
        Command::SearchTokens(query) => handle_search_tokens(state, &query).await,
        Command::TokenStats => handle_token_stats(state).await,
        Command::MarketData(address) => handle_market_data(state, &address).await,
        Command::PriceCheck(address) => handle_price_check(state, &address).await,
        Command::Notifications => handle_notifications(state, user_id).await,
        Command::AlertHistory(args) => handle_alert_history(state, user_id, &args).await,
        Command::TestNotification => Ok(handle_test_notification(ctx)),
        Command::PlatformPreferences(args) =>
            handle_platform_preferences(state, user_id, &args).await,
        Command::DatabaseStats => handle_database_stats(state).await,
        Command::SystemHealth => Ok(handle_system_health(state).await),
        Command::ExportData => handle_export_data(state, user_id).await,
        Command::TopTokens =>
            Ok(coming_soon("🏆 Top Performing Tokens", "Top tokens ranking is coming soon...")),
        Command::VolumeLeaders =>
            Ok(coming_soon("📊 Volume Leaders", "Volume leaderboard is coming soon...")),
        Command::BuySignal(_) =>
            Ok(coming_soon("📈 Buy Signal Analysis", "AI-powered buy signals are coming soon...")),
        Command::SellSignal(_) =>
            Ok(coming_soon("📉 Sell Signal Analysis", "AI-powered sell signals are coming soon...")),
        Command::TrendAnalysis(_) =>
            Ok(coming_soon("📊 Trend Analysis", "Advanced trend analysis is coming soon...")),
        Command::Portfolio => Ok(coming_soon("💼 Your Portfolio", "Portfolio tracking is coming soon...")),
        Command::RestartMonitor =>
            Ok(coming_soon("🔄 Restart Monitor", "Remote monitor restarts are coming soon...")),
    }
}

fn coming_soon(title: &str, description: &str) -> Reply {
    Reply::not_implemented(title, description)
}

/// Empty argument means "use the default"; anything else must be an integer.
fn parse_limit(args: &str) -> Result<i64> {
    let args = args.trim();
    if args.is_empty() {
        return Ok(DEFAULT_LIST_LIMIT);
    }
    args.parse::<i64>().map_err(|_| AppError::InvalidInput(msg::ERR_INVALID_LIMIT.to_string()))
}

fn required<'a>(args: &'a str, message: &str) -> Result<&'a str> {
    let value = args.trim();
    if value.is_empty() {
        return Err(AppError::InvalidInput(message.to_string()));
    }
    Ok(value)
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "✅ Yes" } else { "❌ No" }
}

fn handle_start() -> Reply {
    Reply::info(msg::WELCOME_TITLE).description(msg::WELCOME_TEXT)
}

fn handle_help() -> Reply {
    Reply::info(msg::HELP_TITLE).description(msg::HELP_CATALOG)
}

fn handle_info() -> Reply {
    Reply::info("ℹ️ Bot Information")
        .field("🤖 Bot Name", info::BOT_NAME)
        .field("🌐 Platform", info::PLATFORM)
        .field("📡 Data Source", info::DATA_SOURCE)
        .field("🗄️ Database", info::DATABASE)
        .field("⚡ Features", "Real-time monitoring, keyword alerts, market data")
        .field("🔧 Version", env!("CARGO_PKG_VERSION"))
        .footer(info::FOOTER)
}

async fn handle_status(state: &BotState) -> Result<Reply> {
    let connected = state.stats.ping().await.is_ok();

    let mut reply = Reply::success("🤖 Bot Status")
        .field("🔌 Bot Status", "✅ Online")
        .field("🗄️ Database", if connected { "✅ Connected" } else { "❌ Disconnected" });

    if connected {
        let keywords = state.stats.count_keywords().await?;
        let tokens_today = state.tokens.count(TokenWindow::LastDay).await?;
        reply = reply
            .field("🔍 Keywords", format!("{} active", format_count(keywords)))
            .field("📊 Tokens (24h)", format!("{} detected", format_count(tokens_today)));
    }

    Ok(reply)
}

async fn handle_add_keyword(state: &BotState, user_id: &str, text: &str) -> Result<Reply> {
    let text = required(text, msg::ERR_KEYWORD_REQUIRED)?;

    match state.keywords.add(user_id, text).await {
        Ok(keyword) =>
            Ok(
                Reply::success("✅ Keyword Added").description(
                    format!("Now monitoring: {}", keyword.keyword)
                )
            ),
        Err(AppError::Duplicate(_)) =>
            Ok(
                Reply::warning("❌ Keyword Already Exists").description(
                    format!("You're already monitoring: {}", text.to_lowercase())
                )
            ),
        Err(e) => Err(e),
    }
}

async fn handle_remove_keyword(state: &BotState, user_id: &str, text: &str) -> Result<Reply> {
    let text = required(text, msg::ERR_REMOVE_KEYWORD_REQUIRED)?;
    let keyword = text.to_lowercase();

    let reply = match state.keywords.remove(user_id, text).await? {
        RemoveOutcome::Removed =>
            Reply::success("✅ Keyword Removed").description(
                format!("No longer monitoring: {}", keyword)
            ),
        RemoveOutcome::NotFound =>
            Reply::warning("❌ Keyword Not Found").description(
                format!("You weren't monitoring: {}", keyword)
            ),
    };
    Ok(reply)
}

async fn handle_list_keywords(state: &BotState, user_id: &str) -> Result<Reply> {
    let keywords = state.keywords.list(user_id).await?;

    if keywords.is_empty() {
        return Ok(
            Reply::info("📝 Your Keywords").description(
                "You're not monitoring any keywords yet.\nUse /add_keyword to start!"
            )
        );
    }

    let lines: Vec<String> = keywords
        .iter()
        .map(|k| format!("• {}", k.keyword))
        .collect();

    Ok(
        Reply::info("📝 Your Keywords")
            .description(lines.join("\n"))
            .footer(format!("Total: {} keywords", keywords.len()))
    )
}

async fn handle_clear_keywords(state: &BotState, user_id: &str) -> Result<Reply> {
    let removed = state.keywords.clear(user_id).await?;

    Ok(
        Reply::success("🗑️ Keywords Cleared").description(
            format!("Removed {} keywords from monitoring", removed)
        )
    )
}

async fn handle_recent_tokens(state: &BotState, args: &str) -> Result<Reply> {
    let limit = parse_limit(args)?;
    let tokens = state.tokens.recent(limit).await?;

    if tokens.is_empty() {
        return Ok(Reply::info("🆕 Recent Tokens").description("No tokens found"));
    }

    let now = Utc::now();
    let mut reply = Reply::info(format!("🆕 Recent Tokens ({})", tokens.len()));
    for token in &tokens {
        reply = reply.code_field(
            format!("{} ({})", token.name, token.symbol),
            short_address(&token.address),
            format_age(token.created_at, now)
        );
    }
    Ok(reply)
}

fn market_fields(mut reply: Reply, snapshot: &MarketSnapshot) -> Reply {
    if let Some(price) = snapshot.price {
        reply = reply.field("💰 Price", format_price(price));
    }
    if let Some(market_cap) = snapshot.market_cap {
        reply = reply.field("📊 Market Cap", format_market_cap(market_cap));
    }
    if let Some(volume) = snapshot.volume_24h {
        reply = reply.field("📈 Volume 24h", format_market_cap(volume));
    }
    if let Some(liquidity) = snapshot.liquidity {
        reply = reply.field("💧 Liquidity", format_market_cap(liquidity));
    }
    reply
}

async fn handle_token_info(state: &BotState, address: &str) -> Result<Reply> {
    let address = required(address, msg::ERR_ADDRESS_REQUIRED)?;

    let token = match state.tokens.find_by_address(address).await {
        Ok(token) => token,
        Err(AppError::NotFound(_)) => {
            return Ok(
                Reply::warning("❌ Token Not Found").description(
                    "Token not found in our database"
                )
            );
        }
        Err(e) => {
            return Err(e);
        }
    };

    let snapshot = state.market_data.snapshot(&token.address).await;

    let reply = Reply::info(format!("🪙 {} ({})", token.name, token.symbol))
        .code_field("📍 Address", token.address.clone(), "")
        .field("📅 Created", token.created_at.format("%Y-%m-%d %H:%M UTC").to_string())
        .field("🏷️ Status", token.status.clone().unwrap_or_else(|| "Unknown".to_string()));

    Ok(market_fields(reply, &snapshot))
}

async fn handle_search_tokens(state: &BotState, query: &str) -> Result<Reply> {
    let query = required(query, msg::ERR_QUERY_REQUIRED)?;
    let tokens = state.tokens.search(query).await?;

    if tokens.is_empty() {
        return Ok(
            Reply::info("🔍 Search Results").description(format!("No tokens found matching: {}", query))
        );
    }

    let mut reply = Reply::info(format!("🔍 Search Results for \"{}\"", query));
    for token in &tokens {
        reply = reply.code_field(
            format!("{} ({})", token.name, token.symbol),
            short_address(&token.address),
            ""
        );
    }
    Ok(reply)
}

async fn handle_token_stats(state: &BotState) -> Result<Reply> {
    let total = state.tokens.count(TokenWindow::AllTime).await?;
    let today = state.tokens.count(TokenWindow::LastDay).await?;
    let hour = state.tokens.count(TokenWindow::LastHour).await?;

    Ok(
        Reply::info("📊 Token Statistics")
            .field("📈 Total Tokens", format_count(total))
            .field("📅 Today", format_count(today))
            .field("⏰ This Hour", format_count(hour))
    )
}

async fn handle_market_data(state: &BotState, address: &str) -> Result<Reply> {
    let address = required(address, msg::ERR_ADDRESS_REQUIRED)?;
    let snapshot = state.market_data.snapshot(address).await;

    if snapshot.is_empty() {
        return Ok(Reply::warning("❌ No market data found for this token"));
    }

    let reply = Reply::info("📊 Market Data").code_field("📍 Address", short_address(address), "");
    Ok(market_fields(reply, &snapshot))
}

async fn handle_price_check(state: &BotState, address: &str) -> Result<Reply> {
    let address = required(address, msg::ERR_ADDRESS_REQUIRED)?;
    let snapshot = state.market_data.snapshot(address).await;

    let Some(price) = snapshot.price else {
        return Ok(Reply::warning("❌ Price data not available"));
    };

    let mut reply = Reply::info("💰 Price Check").field("💵 Current Price", format_price(price));
    if let Some(market_cap) = snapshot.market_cap {
        reply = reply.field("📊 Market Cap", format_market_cap(market_cap));
    }
    Ok(reply)
}

async fn handle_notifications(state: &BotState, user_id: &str) -> Result<Reply> {
    let keywords = state.keywords.count_for_user(user_id).await?;
    let notifications = state.notifications.count_for_user(user_id).await?;

    Ok(
        Reply::info("🔔 Notification Settings")
            .field("🔍 Active Keywords", format_count(keywords))
            .field("📨 Total Notifications", format_count(notifications))
            .field("📡 Real-time Alerts", "✅ Enabled")
    )
}

async fn handle_alert_history(state: &BotState, user_id: &str, args: &str) -> Result<Reply> {
    let limit = parse_limit(args)?;
    let alerts = state.notifications.recent_for_user(user_id, limit).await?;

    if alerts.is_empty() {
        return Ok(Reply::info("🚨 Alert History").description("No alerts found"));
    }

    let mut reply = Reply::info(format!("🚨 Recent Alerts ({})", alerts.len()));
    for alert in &alerts {
        reply = reply.field(
            alert.token_name.clone(),
            format!(
                "Keyword: {}\n{}",
                alert.matched_keyword,
                alert.notified_at.format("%Y-%m-%d %H:%M UTC")
            )
        );
    }
    Ok(reply)
}

fn handle_test_notification(ctx: &CommandContext) -> Reply {
    let user = ctx.user_name.clone().unwrap_or_else(|| ctx.user_id.clone());

    Reply::success("🧪 Test Notification")
        .description("This is a test notification to verify the bot is working correctly!")
        .field("👤 User", user)
        .field("⏰ Time", Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string())
}

/// Split `"<platform words> [toggle]"`. Returns `None` for the platform in view mode.
fn parse_preference_args(args: &str) -> Result<(Option<Platform>, Option<bool>)> {
    let words: Vec<&str> = args.split_whitespace().collect();
    if words.is_empty() {
        return Ok((None, None));
    }

    let (platform_words, toggle) = match words.split_last() {
        Some((last, rest)) if !rest.is_empty() => {
            match parse_toggle(last) {
                Ok(enabled) => (rest, Some(enabled)),
                Err(_) => (&words[..], None),
            }
        }
        _ => (&words[..], None),
    };

    let platform_text = platform_words.join(" ");
    if platform_text.eq_ignore_ascii_case("view") {
        return Ok((None, None));
    }

    let platform: Platform = platform_text.parse()?;
    Ok((Some(platform), toggle))
}

async fn handle_platform_preferences(state: &BotState, user_id: &str, args: &str) -> Result<Reply> {
    let (platform, toggle) = parse_preference_args(args)?;

    if let (Some(platform), Some(enabled)) = (platform, toggle) {
        state.preferences.set(user_id, platform, enabled).await?;
        let status = if enabled { "enabled" } else { "disabled" };
        return Ok(
            Reply::success("✅ Platform Preference Updated").description(
                format!("{} {} notifications {}", platform.emoji(), platform, status)
            )
        );
    }

    let settings = state.preferences.get_or_create(user_id).await?;
    let mut reply = Reply::info("🎛️ Your Platform Preferences").description(
        "Choose which platforms you want to receive notifications from:"
    );
    for setting in &settings {
        let status = if setting.enabled { "✅ Enabled" } else { "❌ Disabled" };
        reply = reply.field(format!("{} {}", setting.platform.emoji(), setting.platform), status);
    }
    Ok(reply.footer(msg::PREFERENCES_HOW_TO))
}

async fn handle_database_stats(state: &BotState) -> Result<Reply> {
    let stats = state.stats.database_stats().await?;

    Ok(
        Reply::info("🗄️ Database Statistics")
            .field("🪙 Total Tokens", format_count(stats.total_tokens))
            .field("🔍 Total Keywords", format_count(stats.total_keywords))
            .field("👥 Total Users", format_count(stats.total_users))
            .field("📨 Total Notifications", format_count(stats.total_notifications))
    )
}

async fn handle_system_health(state: &BotState) -> Reply {
    let health = state.health.check().await;
    let overall = if health.operational() { "✅ Operational" } else { "⚠️ Issues Detected" };

    Reply::info("🏥 System Health")
        .field("🗄️ Database", if health.database { "✅ Healthy" } else { "❌ Unhealthy" })
        .field("📡 Recent Activity", yes_no(health.recent_activity))
        .field("🤖 Bot Status", "✅ Online")
        .field("📊 Overall", overall)
}

async fn handle_export_data(state: &BotState, user_id: &str) -> Result<Reply> {
    let export = state.export.export_user_data(user_id).await?;

    Ok(
        Reply::success("📤 Data Export")
            .description(export.render())
            .footer(format!(
                "{} keywords, {} notifications",
                export.keywords.len(),
                export.notifications.len()
            ))
    )
}
