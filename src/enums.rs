use std::fmt;
use std::str::FromStr;

use chrono::{ DateTime, Duration, Utc };
use serde::{ Deserialize, Serialize };

use crate::error::AppError;

// ─── Platform ────────────────────────────────────────────────────────

/// Launch platform a detected token originates from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    LetsBonk,
    PumpFun,
    Other,
}

impl Platform {
    /// All platforms in display order.
    pub fn all() -> &'static [Platform] {
        &[Platform::LetsBonk, Platform::PumpFun, Platform::Other]
    }

    /// Canonical string stored in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::LetsBonk => "LetsBonk",
            Platform::PumpFun => "Pump.fun",
            Platform::Other => "Other",
        }
    }

    /// Whether alerts from this platform are delivered before the user changes anything.
    pub fn enabled_by_default(&self) -> bool {
        !matches!(self, Platform::Other)
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Platform::LetsBonk => "🟠",
            Platform::PumpFun => "🔵",
            Platform::Other => "⚪",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "letsbonk" | "lets bonk" | "bonk" => Ok(Platform::LetsBonk),
            "pump.fun" | "pumpfun" | "pump" => Ok(Platform::PumpFun),
            "other" => Ok(Platform::Other),
            _ => Err(AppError::InvalidInput(format!(
                "Invalid platform: {}. Valid options: LetsBonk, Pump.fun, Other, or 'view'",
                s.trim()
            ))),
        }
    }
}

// ─── TokenWindow ─────────────────────────────────────────────────────

/// Trailing time window used when counting detected tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenWindow {
    LastHour,
    LastDay,
    AllTime,
}

impl TokenWindow {
    pub fn duration(&self) -> Option<Duration> {
        match self {
            TokenWindow::LastHour => Some(Duration::hours(1)),
            TokenWindow::LastDay => Some(Duration::hours(24)),
            TokenWindow::AllTime => None,
        }
    }

    /// Lower bound (exclusive) for `created_at`, or None for all time.
    pub fn cutoff(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        self.duration().map(|d| now - d)
    }
}

// ─── Toggle parsing ──────────────────────────────────────────────────

/// Parse an on/off argument the way users tend to type it.
pub fn parse_toggle(s: &str) -> Result<bool, AppError> {
    match s.trim().to_lowercase().as_str() {
        "true" | "on" | "yes" | "enable" | "enabled" | "1" => Ok(true),
        "false" | "off" | "no" | "disable" | "disabled" | "0" => Ok(false),
        _ => Err(AppError::InvalidInput(format!(
            "Invalid value '{}'. Use true or false",
            s.trim()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_aliases() {
        assert_eq!("LetsBonk".parse::<Platform>().unwrap(), Platform::LetsBonk);
        assert_eq!("lets bonk".parse::<Platform>().unwrap(), Platform::LetsBonk);
        assert_eq!(" BONK ".parse::<Platform>().unwrap(), Platform::LetsBonk);
        assert_eq!("Pump.fun".parse::<Platform>().unwrap(), Platform::PumpFun);
        assert_eq!("pumpfun".parse::<Platform>().unwrap(), Platform::PumpFun);
        assert_eq!("pump".parse::<Platform>().unwrap(), Platform::PumpFun);
        assert_eq!("other".parse::<Platform>().unwrap(), Platform::Other);
    }

    #[test]
    fn test_unknown_platform_is_rejected() {
        let err = "raydium".parse::<Platform>().unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
        // "view" is a command keyword, not a platform
        assert!("view".parse::<Platform>().is_err());
    }

    #[test]
    fn test_canonical_names_round_trip() {
        for platform in Platform::all() {
            assert_eq!(platform.as_str().parse::<Platform>().unwrap(), *platform);
        }
    }

    #[test]
    fn test_defaults() {
        assert!(Platform::LetsBonk.enabled_by_default());
        assert!(Platform::PumpFun.enabled_by_default());
        assert!(!Platform::Other.enabled_by_default());
    }

    #[test]
    fn test_window_cutoff() {
        let now = Utc::now();
        assert_eq!(TokenWindow::LastHour.cutoff(now), Some(now - Duration::hours(1)));
        assert_eq!(TokenWindow::LastDay.cutoff(now), Some(now - Duration::hours(24)));
        assert_eq!(TokenWindow::AllTime.cutoff(now), None);
    }

    #[test]
    fn test_parse_toggle() {
        assert!(parse_toggle("true").unwrap());
        assert!(parse_toggle("ON").unwrap());
        assert!(!parse_toggle("disable").unwrap());
        assert!(!parse_toggle("0").unwrap());
        assert!(parse_toggle("maybe").is_err());
    }
}
