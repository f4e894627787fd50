use crate::bot::utils::{ escape_code, escape_markdown };
use crate::error::AppError;

/// Tone of a reply. Chat clients have no embed colours, so this mostly
/// matters to callers and tests that need to tell outcomes apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyKind {
    Success,
    Info,
    Warning,
    Error,
    Unavailable,
    NotImplemented,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReplyField {
    pub name: String,
    pub value: String,
    /// Rendered as inline code above the value (addresses, ids).
    pub code: Option<String>,
}

/// Structured answer to one command.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub kind: ReplyKind,
    pub title: String,
    pub description: Option<String>,
    pub fields: Vec<ReplyField>,
    pub footer: Option<String>,
}

impl Reply {
    pub fn new(kind: ReplyKind, title: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            description: None,
            fields: Vec::new(),
            footer: None,
        }
    }

    pub fn success(title: impl Into<String>) -> Self {
        Self::new(ReplyKind::Success, title)
    }

    pub fn info(title: impl Into<String>) -> Self {
        Self::new(ReplyKind::Info, title)
    }

    pub fn warning(title: impl Into<String>) -> Self {
        Self::new(ReplyKind::Warning, title)
    }

    pub fn error(title: impl Into<String>) -> Self {
        Self::new(ReplyKind::Error, title)
    }

    pub fn not_implemented(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(ReplyKind::NotImplemented, title).description(description)
    }

    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }

    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push(ReplyField {
            name: name.into(),
            value: value.into(),
            code: None,
        });
        self
    }

    pub fn code_field(
        mut self,
        name: impl Into<String>,
        code: impl Into<String>,
        value: impl Into<String>
    ) -> Self {
        self.fields.push(ReplyField {
            name: name.into(),
            value: value.into(),
            code: Some(code.into()),
        });
        self
    }

    pub fn footer(mut self, text: impl Into<String>) -> Self {
        self.footer = Some(text.into());
        self
    }

    pub fn field_value(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.value.as_str())
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.fields.iter().any(|f| f.name == name)
    }

    /// Reply for a failure caught at the command boundary.
    pub fn from_error(action: &str, err: &AppError) -> Self {
        match err {
            AppError::ConnectionUnavailable =>
                Reply::new(ReplyKind::Unavailable, "❌ Database connection failed").description(
                    "The service is temporarily unavailable. Please try again later."
                ),
            AppError::Timeout(_) =>
                Reply::new(ReplyKind::Unavailable, "⏱️ Request timed out").description(
                    "The service is temporarily unavailable. Please try again later."
                ),
            AppError::InvalidInput(msg) => Reply::error(format!("❌ {}", msg)),
            AppError::NotFound(_) | AppError::Duplicate(_) => Reply::warning(format!("❌ {}", err)),
            AppError::ExternalDataUnavailable(_) => Reply::warning("❌ No data available"),
            AppError::NotImplemented(feature) =>
                Reply::not_implemented(format!("🚧 {}", feature), "This feature is coming soon..."),
            _ => Reply::error(format!("❌ Error {}", action)).description(err.to_string()),
        }
    }

    /// Render as Telegram MarkdownV2.
    pub fn render_markdown(&self) -> String {
        let mut out = format!("*{}*", escape_markdown(&self.title));

        if let Some(description) = &self.description {
            out.push_str("\n\n");
            out.push_str(&escape_markdown(description));
        }

        if !self.fields.is_empty() {
            out.push('\n');
        }
        for field in &self.fields {
            out.push('\n');
            match &field.code {
                None => {
                    out.push_str(
                        &format!("*{}:* {}", escape_markdown(&field.name), escape_markdown(&field.value))
                    );
                }
                Some(code) => {
                    out.push_str(&format!("*{}*\n`{}`", escape_markdown(&field.name), escape_code(code)));
                    if !field.value.is_empty() {
                        out.push_str(&format!("\n_{}_", escape_markdown(&field.value)));
                    }
                }
            }
        }

        if let Some(footer) = &self.footer {
            out.push_str(&format!("\n\n_{}_", escape_markdown(footer)));
        }

        out
    }
}
