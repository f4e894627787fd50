use sea_orm::{ DatabaseConnection, EntityTrait, PaginatorTrait, QuerySelect };
use serde::Serialize;

use crate::db::entity::{ detected_token, keyword, notified_token };
use crate::error::Result;

/// Table-wide counters shown by the admin commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DatabaseStats {
    pub total_tokens: u64,
    pub total_keywords: u64,
    pub total_users: u64,
    pub total_notifications: u64,
}

#[derive(Clone)]
pub struct StatsRepository {
    db: DatabaseConnection,
}

impl StatsRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Round trip to the database.
    pub async fn ping(&self) -> Result<()> {
        self.db.ping().await?;
        Ok(())
    }

    pub async fn count_keywords(&self) -> Result<u64> {
        Ok(keyword::Entity::find().count(&self.db).await?)
    }

    /// Users that monitor at least one keyword.
    pub async fn count_users(&self) -> Result<u64> {
        let count = keyword::Entity
            ::find()
            .select_only()
            .column(keyword::Column::UserId)
            .distinct()
            .count(&self.db).await?;
        Ok(count)
    }

    pub async fn database_stats(&self) -> Result<DatabaseStats> {
        Ok(DatabaseStats {
            total_tokens: detected_token::Entity::find().count(&self.db).await?,
            total_keywords: self.count_keywords().await?,
            total_users: self.count_users().await?,
            total_notifications: notified_token::Entity::find().count(&self.db).await?,
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::db::KeywordRepository;
    use crate::db::test_support::{ insert_notification, insert_token, memory_db };

    #[tokio::test]
    async fn test_database_stats() {
        let db = memory_db().await;
        let keywords = KeywordRepository::new(db.clone());
        keywords.add("1", "pepe").await.unwrap();
        keywords.add("1", "doge").await.unwrap();
        keywords.add("2", "pepe").await.unwrap();
        insert_token(&db, "a1", "Pepe", "PEPE", Utc::now()).await;
        insert_notification(&db, "1", "Pepe", "pepe", Utc::now()).await;

        let stats = StatsRepository::new(db).database_stats().await.unwrap();
        assert_eq!(stats, DatabaseStats {
            total_tokens: 1,
            total_keywords: 3,
            total_users: 2,
            total_notifications: 1,
        });
    }

    #[tokio::test]
    async fn test_ping() {
        assert!(StatsRepository::new(memory_db().await).ping().await.is_ok());
    }
}
