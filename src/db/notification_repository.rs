use sea_orm::{
    ColumnTrait,
    DatabaseConnection,
    EntityTrait,
    PaginatorTrait,
    QueryFilter,
    QueryOrder,
    QuerySelect,
};

use crate::db::clamp_limit;
use crate::db::entity::notified_token;
use crate::error::Result;

/// Read side of the alert log. Rows are appended by the alert dispatcher.
#[derive(Clone)]
pub struct NotificationRepository {
    db: DatabaseConnection,
}

impl NotificationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Most recent alerts of a user, newest first. The limit is clamped to `0..=25`.
    pub async fn recent_for_user(
        &self,
        user_id: &str,
        limit: i64
    ) -> Result<Vec<notified_token::Model>> {
        let limit = clamp_limit(limit);
        if limit == 0 {
            return Ok(Vec::new());
        }

        let alerts = notified_token::Entity
            ::find()
            .filter(notified_token::Column::UserId.eq(user_id))
            .order_by_desc(notified_token::Column::NotifiedAt)
            .limit(limit)
            .all(&self.db).await?;
        Ok(alerts)
    }

    /// Every alert of a user, oldest first.
    pub async fn all_for_user(&self, user_id: &str) -> Result<Vec<notified_token::Model>> {
        let alerts = notified_token::Entity
            ::find()
            .filter(notified_token::Column::UserId.eq(user_id))
            .order_by_asc(notified_token::Column::NotifiedAt)
            .all(&self.db).await?;
        Ok(alerts)
    }

    pub async fn count_for_user(&self, user_id: &str) -> Result<u64> {
        let count = notified_token::Entity
            ::find()
            .filter(notified_token::Column::UserId.eq(user_id))
            .count(&self.db).await?;
        Ok(count)
    }
}
