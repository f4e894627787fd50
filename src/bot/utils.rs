// Formatting helpers shared by the command handlers.

use chrono::{ DateTime, Utc };

/// Escape text for Telegram MarkdownV2.
pub fn escape_markdown(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if
            matches!(
                c,
                '\\' |
                    '_' |
                    '*' |
                    '[' |
                    ']' |
                    '(' |
                    ')' |
                    '~' |
                    '`' |
                    '>' |
                    '#' |
                    '+' |
                    '-' |
                    '=' |
                    '|' |
                    '{' |
                    '}' |
                    '.' |
                    '!'
            )
        {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Escape text placed inside an inline code span.
pub fn escape_code(text: &str) -> String {
    text.replace('\\', "\\\\").replace('`', "\\`")
}

/// `$1.2M`, `$45K` or `$999`.
pub fn format_market_cap(value: f64) -> String {
    if value >= 1_000_000.0 {
        format!("${:.1}M", value / 1_000_000.0)
    } else if value >= 1_000.0 {
        format!("${:.0}K", value / 1_000.0)
    } else {
        format!("${:.0}", value)
    }
}

/// Token prices are tiny; show eight decimals.
pub fn format_price(value: f64) -> String {
    format!("${:.8}", value)
}

/// Integer with thousand separators.
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}

/// `12m ago` below an hour, `3h ago` above.
pub fn format_age(at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - at).num_seconds().max(0);
    if seconds < 3600 {
        format!("{}m ago", seconds / 60)
    } else {
        format!("{}h ago", seconds / 3600)
    }
}

/// First 20 characters of an address followed by an ellipsis.
pub fn short_address(address: &str) -> String {
    if address.chars().count() <= 20 {
        return address.to_string();
    }
    let head: String = address.chars().take(20).collect();
    format!("{}...", head)
}
