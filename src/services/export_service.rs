use std::sync::Arc;

use crate::db::{ KeywordRepository, NotificationRepository, keyword, notified_token };
use crate::error::Result;

/// Hard ceiling for an export, in characters.
pub const EXPORT_MAX_CHARS: usize = 2000;
/// Where an oversized export is cut before the marker is appended.
const EXPORT_CUT_AT: usize = 1900;
pub const TRUNCATION_MARKER: &str = "\n... (truncated)";

/// Everything the bot stores about one user.
#[derive(Debug, Clone)]
pub struct UserDataExport {
    pub keywords: Vec<keyword::Model>,
    pub notifications: Vec<notified_token::Model>,
}

impl UserDataExport {
    /// Plain-text rendering, capped at `EXPORT_MAX_CHARS`.
    pub fn render(&self) -> String {
        let mut text = format!("Keywords ({}):\n", self.keywords.len());
        for kw in &self.keywords {
            text.push_str(&format!("• {} (added {})\n", kw.keyword, kw.created_at.format("%Y-%m-%d")));
        }

        text.push_str(&format!("\nNotifications ({}):\n", self.notifications.len()));
        for n in &self.notifications {
            text.push_str(
                &format!(
                    "• {} → {} ({})\n",
                    n.token_name,
                    n.matched_keyword,
                    n.notified_at.format("%Y-%m-%d %H:%M")
                )
            );
        }

        truncate_export(text)
    }
}

/// Cut text longer than the ceiling and mark it as truncated.
pub fn truncate_export(text: String) -> String {
    if text.chars().count() <= EXPORT_MAX_CHARS {
        return text;
    }
    let mut cut: String = text.chars().take(EXPORT_CUT_AT).collect();
    cut.push_str(TRUNCATION_MARKER);
    cut
}

#[derive(Clone)]
pub struct ExportService {
    keywords: Arc<KeywordRepository>,
    notifications: Arc<NotificationRepository>,
}

impl ExportService {
    pub fn new(keywords: Arc<KeywordRepository>, notifications: Arc<NotificationRepository>) -> Self {
        Self { keywords, notifications }
    }

    pub async fn export_user_data(&self, user_id: &str) -> Result<UserDataExport> {
        Ok(UserDataExport {
            keywords: self.keywords.list(user_id).await?,
            notifications: self.notifications.all_for_user(user_id).await?,
        })
    }
}
