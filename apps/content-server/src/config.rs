//! Application configuration loaded from environment variables.

use std::env;

use chrono_tz::Tz;
use content_core::calendar::WeekStart;
use content_core::domain::PlatformSet;

/// Configuration errors - an environment variable holds an unusable value.
#[derive(Debug, thiserror::Error)]
#[error("Invalid {name}: {reason}")]
pub struct ConfigError {
    pub name: &'static str,
    pub reason: String,
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Platforms offered by the generator form.
    pub platforms: PlatformSet,
    pub calendar: CalendarConfig,
}

/// Calendar display settings.
#[derive(Debug, Clone, Copy)]
pub struct CalendarConfig {
    pub week_start: WeekStart,
    /// Zone in which "today" is computed.
    pub timezone: Tz,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            week_start: WeekStart::Monday,
            timezone: Tz::UTC,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let platforms = match env::var("ENABLED_PLATFORMS") {
            Ok(list) => PlatformSet::parse(&list).map_err(|e| ConfigError {
                name: "ENABLED_PLATFORMS",
                reason: e.to_string(),
            })?,
            Err(_) => PlatformSet::default(),
        };

        let week_start = match env::var("CALENDAR_WEEK_START") {
            Ok(raw) => raw.parse::<WeekStart>().map_err(|e| ConfigError {
                name: "CALENDAR_WEEK_START",
                reason: e.to_string(),
            })?,
            Err(_) => WeekStart::default(),
        };

        let timezone = match env::var("CALENDAR_TIMEZONE") {
            Ok(raw) => parse_timezone(&raw)?,
            Err(_) => Tz::UTC,
        };

        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            platforms,
            calendar: CalendarConfig {
                week_start,
                timezone,
            },
        })
    }
}

/// Parse an IANA timezone name such as `Europe/Moscow`.
fn parse_timezone(raw: &str) -> Result<Tz, ConfigError> {
    raw.trim().parse::<Tz>().map_err(|_| ConfigError {
        name: "CALENDAR_TIMEZONE",
        reason: format!(
            "'{}' is not an IANA timezone, use names like 'Europe/Moscow' or 'UTC'",
            raw.trim()
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iana_timezones() {
        assert_eq!(parse_timezone("Europe/Moscow").unwrap(), Tz::Europe__Moscow);
        assert_eq!(parse_timezone(" UTC ").unwrap(), Tz::UTC);
    }

    #[test]
    fn rejects_unknown_timezone() {
        let err = parse_timezone("Mars/Olympus").unwrap_err();
        assert_eq!(err.name, "CALENDAR_TIMEZONE");
    }
}
