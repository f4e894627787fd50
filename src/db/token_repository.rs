use chrono::Utc;
use sea_orm::{
    sea_query::{ Expr, Func, LikeExpr },
    ColumnTrait,
    Condition,
    DatabaseConnection,
    EntityTrait,
    PaginatorTrait,
    QueryFilter,
    QueryOrder,
    QuerySelect,
};

use crate::db::clamp_limit;
use crate::db::entity::detected_token;
use crate::enums::TokenWindow;
use crate::error::{ AppError, Result };

/// Maximum number of rows a search returns.
pub const SEARCH_LIMIT: u64 = 10;

/// Escape LIKE metacharacters so user input matches literally.
fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Read-only access to tokens written by the ingestion process.
#[derive(Clone)]
pub struct TokenRepository {
    db: DatabaseConnection,
}

impl TokenRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Newest tokens first. The limit is clamped to `0..=25`.
    pub async fn recent(&self, limit: i64) -> Result<Vec<detected_token::Model>> {
        let limit = clamp_limit(limit);
        if limit == 0 {
            return Ok(Vec::new());
        }

        let tokens = detected_token::Entity
            ::find()
            .order_by_desc(detected_token::Column::CreatedAt)
            .limit(limit)
            .all(&self.db).await?;
        Ok(tokens)
    }

    pub async fn find_by_address(&self, address: &str) -> Result<detected_token::Model> {
        detected_token::Entity
            ::find()
            .filter(detected_token::Column::Address.eq(address.trim()))
            .one(&self.db).await?
            .ok_or_else(|| AppError::NotFound("Token".to_string()))
    }

    /// Case-insensitive substring match on name or symbol, newest first.
    pub async fn search(&self, query: &str) -> Result<Vec<detected_token::Model>> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let pattern = format!("%{}%", escape_like(&query.to_lowercase()));
        let matches_column = |column: detected_token::Column| {
            Expr::expr(Func::lower(Expr::col(column))).like(
                LikeExpr::new(pattern.clone()).escape('\\')
            )
        };

        let tokens = detected_token::Entity
            ::find()
            .filter(
                Condition::any()
                    .add(matches_column(detected_token::Column::Name))
                    .add(matches_column(detected_token::Column::Symbol))
            )
            .order_by_desc(detected_token::Column::CreatedAt)
            .limit(SEARCH_LIMIT)
            .all(&self.db).await?;
        Ok(tokens)
    }

    pub async fn count(&self, window: TokenWindow) -> Result<u64> {
        let mut query = detected_token::Entity::find();
        if let Some(cutoff) = window.cutoff(Utc::now()) {
            query = query.filter(detected_token::Column::CreatedAt.gt(cutoff));
        }
        let count = query.count(&self.db).await?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;
    use crate::db::test_support::{ insert_token, memory_db };

    async fn seeded(count: usize) -> TokenRepository {
        let db = memory_db().await;
        let now = Utc::now();
        for i in 0..count {
            insert_token(
                &db,
                &format!("addr{:03}", i),
                &format!("Token {}", i),
                &format!("TK{}", i),
                now - Duration::minutes(i as i64)
            ).await;
        }
        TokenRepository::new(db)
    }

    #[test]
    fn test_escape_like() {
        assert_eq!(escape_like("pepe"), "pepe");
        assert_eq!(escape_like("100%"), "100\\%");
        assert_eq!(escape_like("a_b\\c"), "a\\_b\\\\c");
    }

    #[tokio::test]
    async fn test_recent_never_exceeds_clamped_limit() {
        let repo = seeded(30).await;

        for (requested, expected) in [(-3, 0), (0, 0), (1, 1), (10, 10), (25, 25), (26, 25), (500, 25)] {
            assert_eq!(repo.recent(requested).await.unwrap().len(), expected, "limit {}", requested);
        }
    }

    #[tokio::test]
    async fn test_recent_is_newest_first() {
        let repo = seeded(5).await;

        let tokens = repo.recent(3).await.unwrap();
        let addresses: Vec<&str> = tokens
            .iter()
            .map(|t| t.address.as_str())
            .collect();
        assert_eq!(addresses, vec!["addr000", "addr001", "addr002"]);
    }

    #[tokio::test]
    async fn test_find_by_address() {
        let repo = seeded(2).await;

        assert_eq!(repo.find_by_address("addr001").await.unwrap().name, "Token 1");
        assert!(matches!(repo.find_by_address("missing").await, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_search_matches_name_or_symbol_case_insensitively() {
        let db = memory_db().await;
        let now = Utc::now();
        insert_token(&db, "a1", "Pepe Classic", "PEPEC", now - Duration::minutes(3)).await;
        insert_token(&db, "a2", "Frog Coin", "PEPE2", now - Duration::minutes(2)).await;
        insert_token(&db, "a3", "Doge Moon", "DMOON", now - Duration::minutes(1)).await;
        let repo = TokenRepository::new(db);

        let found: Vec<String> = repo
            .search("pEpE").await
            .unwrap()
            .into_iter()
            .map(|t| t.address)
            .collect();
        assert_eq!(found, vec!["a2", "a1"]);
    }

    #[tokio::test]
    async fn test_search_empty_or_unmatched_is_empty() {
        let repo = seeded(3).await;

        assert!(repo.search("").await.unwrap().is_empty());
        assert!(repo.search("   ").await.unwrap().is_empty());
        assert!(repo.search("nothing-like-this").await.unwrap().is_empty());
        // Wildcards are literal
        assert!(repo.search("%").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_search_caps_results() {
        let repo = seeded(15).await;
        assert_eq!(repo.search("token").await.unwrap().len(), SEARCH_LIMIT as usize);
    }

    #[tokio::test]
    async fn test_count_windows() {
        let db = memory_db().await;
        let now = Utc::now();
        insert_token(&db, "a1", "One", "ONE", now - Duration::minutes(5)).await;
        insert_token(&db, "a2", "Two", "TWO", now - Duration::hours(3)).await;
        insert_token(&db, "a3", "Three", "THR", now - Duration::days(3)).await;
        let repo = TokenRepository::new(db);

        assert_eq!(repo.count(TokenWindow::LastHour).await.unwrap(), 1);
        assert_eq!(repo.count(TokenWindow::LastDay).await.unwrap(), 2);
        assert_eq!(repo.count(TokenWindow::AllTime).await.unwrap(), 3);
    }
}
