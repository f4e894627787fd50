use std::time::Duration;

use serde::Serialize;
use serde_json::json;

const ANNOUNCE_TIMEOUT: Duration = Duration::from_secs(5);
const ONLINE_COLOR: u32 = 0x00ff00;

#[derive(Debug, Serialize)]
struct Announcement {
    username: &'static str,
    embeds: Vec<serde_json::Value>,
}

fn announcement(command_count: usize) -> Announcement {
    Announcement {
        username: "Token Monitor Bot",
        embeds: vec![
            json!({
                "title": "🤖 Token Monitor Bot Online",
                "description": format!("{} commands registered and ready", command_count),
                "color": ONLINE_COLOR,
                "footer": { "text": "Built for 24/7 token monitoring" },
            })
        ],
    }
}

/// Post a one-off "bot is online" message to a webhook. Failures are logged
/// and swallowed; startup never depends on this.
pub async fn announce_startup(webhook_url: &str, command_count: usize) {
    let client = match reqwest::Client::builder().timeout(ANNOUNCE_TIMEOUT).build() {
        Ok(client) => client,
        Err(e) => {
            tracing::warn!("Failed to build webhook client: {}", e);
            return;
        }
    };

    match client.post(webhook_url).json(&announcement(command_count)).send().await {
        Ok(response) if response.status().is_success() => {
            tracing::info!("Startup announcement sent");
        }
        Ok(response) => {
            tracing::warn!("Startup webhook returned status: {}", response.status());
        }
        Err(e) => {
            tracing::warn!("Startup webhook failed: {}", e);
        }
    }
}
