use std::env;
use std::time::Duration;

pub const DEFAULT_MARKET_DATA_API_URL: &str = "https://api.dexscreener.com";

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub telegram_bot_token: String,
    pub market_data_api_url: String,
    pub market_data_timeout: Duration,
    pub command_timeout: Duration,
    pub db_max_connections: u32,
    pub db_acquire_timeout: Duration,
    pub startup_webhook_url: Option<String>,
    pub server_host: String,
    pub server_port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenv::dotenv().ok();

        let database_url = env::var("DATABASE_URL").map_err(|_| "DATABASE_URL must be set")?;
        let telegram_bot_token = env::var("TELEGRAM_BOT_TOKEN")
            .map_err(|_| "TELEGRAM_BOT_TOKEN must be set")?;

        let market_data_api_url = env::var("MARKET_DATA_API_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|_| DEFAULT_MARKET_DATA_API_URL.to_string());

        let market_data_timeout = Duration::from_secs(
            env::var("MARKET_DATA_TIMEOUT_SECS").unwrap_or_else(|_| "5".to_string()).parse()?
        );
        let command_timeout = Duration::from_secs(
            env::var("COMMAND_TIMEOUT_SECS").unwrap_or_else(|_| "10".to_string()).parse()?
        );
        let db_max_connections = env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "10".to_string())
            .parse()?;
        let db_acquire_timeout = Duration::from_secs(
            env::var("DB_ACQUIRE_TIMEOUT_SECS").unwrap_or_else(|_| "5".to_string()).parse()?
        );

        let startup_webhook_url = env::var("STARTUP_WEBHOOK_URL")
            .ok()
            .filter(|url| !url.trim().is_empty());

        let server_host = env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()?;

        Ok(Config {
            database_url,
            telegram_bot_token,
            market_data_api_url,
            market_data_timeout,
            command_timeout,
            db_max_connections,
            db_acquire_timeout,
            startup_webhook_url,
            server_host,
            server_port,
        })
    }

    /// Address the health server binds to.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

#[cfg(test)]
impl Config {
    /// Configuration for tests; nothing here is dialed.
    pub fn for_tests() -> Self {
        Config {
            database_url: "sqlite::memory:".to_string(),
            telegram_bot_token: "test-token".to_string(),
            market_data_api_url: DEFAULT_MARKET_DATA_API_URL.to_string(),
            market_data_timeout: Duration::from_secs(5),
            command_timeout: Duration::from_secs(10),
            db_max_connections: 1,
            db_acquire_timeout: Duration::from_secs(5),
            startup_webhook_url: None,
            server_host: "127.0.0.1".to_string(),
            server_port: 0,
        }
    }
}
