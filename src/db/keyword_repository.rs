use chrono::Utc;
use sea_orm::{
    ActiveModelTrait,
    ActiveValue,
    ColumnTrait,
    DatabaseConnection,
    EntityTrait,
    PaginatorTrait,
    QueryFilter,
    QueryOrder,
    SqlErr,
};
use uuid::Uuid;

use crate::db::entity::keyword;
use crate::error::{ AppError, Result };

pub const MIN_KEYWORD_LEN: usize = 2;

/// Outcome of removing a single keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed,
    NotFound,
}

/// Lowercase and trim a keyword, rejecting anything shorter than two characters.
pub fn normalize_keyword(text: &str) -> Result<String> {
    let keyword = text.trim().to_lowercase();
    if keyword.chars().count() < MIN_KEYWORD_LEN {
        return Err(
            AppError::InvalidInput(
                format!("Keyword must be at least {} characters long", MIN_KEYWORD_LEN)
            )
        );
    }
    Ok(keyword)
}

#[derive(Clone)]
pub struct KeywordRepository {
    db: DatabaseConnection,
}

impl KeywordRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn find(&self, user_id: &str, keyword: &str) -> Result<Option<keyword::Model>> {
        let found = keyword::Entity
            ::find()
            .filter(keyword::Column::UserId.eq(user_id))
            .filter(keyword::Column::Keyword.eq(keyword))
            .one(&self.db).await?;
        Ok(found)
    }

    /// Start monitoring `text` for `user_id`. Fails with `Duplicate` if it is already monitored.
    pub async fn add(&self, user_id: &str, text: &str) -> Result<keyword::Model> {
        let keyword = normalize_keyword(text)?;

        if self.find(user_id, &keyword).await?.is_some() {
            return Err(AppError::Duplicate(format!("Keyword '{}'", keyword)));
        }

        let model = keyword::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id: ActiveValue::Set(user_id.to_string()),
            keyword: ActiveValue::Set(keyword.clone()),
            created_at: ActiveValue::Set(Utc::now()),
        };

        // A concurrent add can still slip past the check; the unique index settles it.
        match model.insert(&self.db).await {
            Ok(model) => Ok(model),
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Err(AppError::Duplicate(format!("Keyword '{}'", keyword)))
            }
            Err(e) => Err(e.into()),
        }
    }

    pub async fn remove(&self, user_id: &str, text: &str) -> Result<RemoveOutcome> {
        let keyword = text.trim().to_lowercase();

        let result = keyword::Entity
            ::delete_many()
            .filter(keyword::Column::UserId.eq(user_id))
            .filter(keyword::Column::Keyword.eq(keyword))
            .exec(&self.db).await?;

        Ok(if result.rows_affected > 0 { RemoveOutcome::Removed } else { RemoveOutcome::NotFound })
    }

    /// Keywords of a user, oldest first.
    pub async fn list(&self, user_id: &str) -> Result<Vec<keyword::Model>> {
        let keywords = keyword::Entity
            ::find()
            .filter(keyword::Column::UserId.eq(user_id))
            .order_by_asc(keyword::Column::CreatedAt)
            .order_by_asc(keyword::Column::Keyword)
            .all(&self.db).await?;
        Ok(keywords)
    }

    /// Remove every keyword of a user and return how many were removed.
    pub async fn clear(&self, user_id: &str) -> Result<u64> {
        let result = keyword::Entity
            ::delete_many()
            .filter(keyword::Column::UserId.eq(user_id))
            .exec(&self.db).await?;
        Ok(result.rows_affected)
    }

    pub async fn count_for_user(&self, user_id: &str) -> Result<u64> {
        let count = keyword::Entity
            ::find()
            .filter(keyword::Column::UserId.eq(user_id))
            .count(&self.db).await?;
        Ok(count)
    }
}
