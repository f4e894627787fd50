use chrono::Utc;
use sea_orm::{
    sea_query::OnConflict,
    ActiveValue,
    ColumnTrait,
    DatabaseConnection,
    EntityTrait,
    QueryFilter,
};
use uuid::Uuid;

use crate::db::entity::platform_preference;
use crate::enums::Platform;
use crate::error::Result;

/// Effective notification toggle for one platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformSetting {
    pub platform: Platform,
    pub enabled: bool,
}

#[derive(Clone)]
pub struct PlatformPreferenceRepository {
    db: DatabaseConnection,
}

impl PlatformPreferenceRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn conflict_target() -> OnConflict {
        OnConflict::columns([
            platform_preference::Column::UserId,
            platform_preference::Column::Platform,
        ])
    }

    fn new_row(user_id: &str, platform: Platform, enabled: bool) -> platform_preference::ActiveModel {
        let now = Utc::now();
        platform_preference::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id: ActiveValue::Set(user_id.to_string()),
            platform: ActiveValue::Set(platform.as_str().to_string()),
            notifications_enabled: ActiveValue::Set(enabled),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
    }

    async fn rows(&self, user_id: &str) -> Result<Vec<platform_preference::Model>> {
        let rows = platform_preference::Entity
            ::find()
            .filter(platform_preference::Column::UserId.eq(user_id))
            .all(&self.db).await?;
        Ok(rows)
    }

    /// Preferences of a user for every platform, in display order.
    /// Platforms without a stored row get their default persisted first.
    pub async fn get_or_create(&self, user_id: &str) -> Result<Vec<PlatformSetting>> {
        let mut rows = self.rows(user_id).await?;

        let missing: Vec<platform_preference::ActiveModel> = Platform::all()
            .iter()
            .filter(|platform| !rows.iter().any(|row| row.platform == platform.as_str()))
            .map(|platform| Self::new_row(user_id, *platform, platform.enabled_by_default()))
            .collect();

        if !missing.is_empty() {
            platform_preference::Entity
                ::insert_many(missing)
                .on_conflict(Self::conflict_target().do_nothing().to_owned())
                .exec_without_returning(&self.db).await?;
            rows = self.rows(user_id).await?;
        }

        let settings = Platform::all()
            .iter()
            .filter_map(|platform| {
                rows.iter()
                    .find(|row| row.platform == platform.as_str())
                    .map(|row| PlatformSetting {
                        platform: *platform,
                        enabled: row.notifications_enabled,
                    })
            })
            .collect();

        Ok(settings)
    }

    /// Insert or update the toggle for one platform.
    pub async fn set(&self, user_id: &str, platform: Platform, enabled: bool) -> Result<()> {
        platform_preference::Entity
            ::insert(Self::new_row(user_id, platform, enabled))
            .on_conflict(
                Self::conflict_target()
                    .update_columns([
                        platform_preference::Column::NotificationsEnabled,
                        platform_preference::Column::UpdatedAt,
                    ])
                    .to_owned()
            )
            .exec_without_returning(&self.db).await?;
        Ok(())
    }
}
