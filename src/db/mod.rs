use sea_orm::{ ConnectOptions, Database, DatabaseConnection };

use crate::config::Config;
use crate::error::Result;

pub mod entity;
pub use entity::*;

mod keyword_repository;
pub use keyword_repository::{ KeywordRepository, RemoveOutcome, normalize_keyword };

mod token_repository;
pub use token_repository::{ TokenRepository, SEARCH_LIMIT };

mod notification_repository;
pub use notification_repository::NotificationRepository;

mod platform_preference_repository;
pub use platform_preference_repository::{ PlatformPreferenceRepository, PlatformSetting };

mod stats_repository;
pub use stats_repository::{ StatsRepository, DatabaseStats };

/// Upper bound for every user-supplied list limit.
pub const MAX_LIST_LIMIT: u64 = 25;

/// Limit used when the user does not pass one.
pub const DEFAULT_LIST_LIMIT: i64 = 10;

/// Clamp a user-supplied limit into `0..=MAX_LIST_LIMIT`.
pub fn clamp_limit(limit: i64) -> u64 {
    limit.clamp(0, MAX_LIST_LIMIT as i64) as u64
}

/// Open the connection pool. Each repository call checks a connection out
/// for the duration of one statement and hands it back when done.
pub async fn connect(config: &Config) -> Result<DatabaseConnection> {
    let mut options = ConnectOptions::new(config.database_url.clone());
    options
        .max_connections(config.db_max_connections)
        .connect_timeout(config.db_acquire_timeout)
        .acquire_timeout(config.db_acquire_timeout)
        .sqlx_logging(false);

    let db = Database::connect(options).await?;
    Ok(db)
}
