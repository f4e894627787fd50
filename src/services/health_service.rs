use std::sync::Arc;

use serde::Serialize;

use crate::db::{ StatsRepository, TokenRepository };
use crate::enums::TokenWindow;

/// Derived health flags, shared by `/system_health` and `GET /health`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SystemHealth {
    pub database: bool,
    /// At least one token was detected in the last hour.
    pub recent_activity: bool,
}

impl SystemHealth {
    pub fn operational(&self) -> bool {
        self.database && self.recent_activity
    }
}

#[derive(Clone)]
pub struct HealthService {
    stats: Arc<StatsRepository>,
    tokens: Arc<TokenRepository>,
}

impl HealthService {
    pub fn new(stats: Arc<StatsRepository>, tokens: Arc<TokenRepository>) -> Self {
        Self { stats, tokens }
    }

    /// Never fails: an unreachable database is itself a health result.
    pub async fn check(&self) -> SystemHealth {
        let database = match self.stats.ping().await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Database health check failed: {}", e);
                false
            }
        };

        let recent_activity =
            database &&
            match self.tokens.count(TokenWindow::LastHour).await {
                Ok(count) => count > 0,
                Err(e) => {
                    tracing::warn!("Activity check failed: {}", e);
                    false
                }
            };

        SystemHealth { database, recent_activity }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{ Duration, Utc };

    use super::*;
    use crate::db::test_support::{ insert_token, memory_db };

    fn service(db: sea_orm::DatabaseConnection) -> HealthService {
        HealthService::new(
            Arc::new(StatsRepository::new(db.clone())),
            Arc::new(TokenRepository::new(db))
        )
    }

    #[tokio::test]
    async fn test_no_recent_tokens_is_not_operational() {
        let db = memory_db().await;
        insert_token(&db, "a1", "Old", "OLD", Utc::now() - Duration::hours(2)).await;

        let health = service(db).check().await;
        assert_eq!(health, SystemHealth { database: true, recent_activity: false });
        assert!(!health.operational());
    }

    #[tokio::test]
    async fn test_recent_token_is_operational() {
        let db = memory_db().await;
        insert_token(&db, "a1", "New", "NEW", Utc::now() - Duration::minutes(5)).await;

        assert!(service(db).check().await.operational());
    }

    #[tokio::test]
    async fn test_closed_database_is_unhealthy() {
        let db = memory_db().await;
        let health = service(db.clone());
        db.close().await.unwrap();

        assert_eq!(health.check().await, SystemHealth { database: false, recent_activity: false });
    }
}
