use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Target social network a post is written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Telegram,
    Instagram,
    Threads,
    Youtube,
    Vk,
}

impl Platform {
    pub const ALL: [Platform; 5] = [
        Platform::Telegram,
        Platform::Instagram,
        Platform::Threads,
        Platform::Youtube,
        Platform::Vk,
    ];

    /// Wire name, as sent to the generation endpoint.
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Telegram => "telegram",
            Platform::Instagram => "instagram",
            Platform::Threads => "threads",
            Platform::Youtube => "youtube",
            Platform::Vk => "vk",
        }
    }

    /// Human-readable name.
    pub fn label(&self) -> &'static str {
        match self {
            Platform::Telegram => "Telegram",
            Platform::Instagram => "Instagram",
            Platform::Threads => "Threads",
            Platform::Youtube => "YouTube",
            Platform::Vk => "VK",
        }
    }

    /// Accent colour used for calendar indicator marks.
    pub fn accent_color(&self) -> &'static str {
        match self {
            Platform::Telegram => "#0ea5e9",
            Platform::Instagram => "#ec4899",
            Platform::Threads => "#a855f7",
            Platform::Youtube => "#ef4444",
            Platform::Vk => "#3b82f6",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Platform::ALL
            .into_iter()
            .find(|p| p.as_str() == needle)
            .ok_or_else(|| DomainError::Validation(format!("Unknown platform: {}", s.trim())))
    }
}

/// Style directive passed to the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Professional,
    #[default]
    Friendly,
    Motivational,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Professional => "professional",
            Tone::Friendly => "friendly",
            Tone::Motivational => "motivational",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tone {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "professional" => Ok(Tone::Professional),
            "friendly" => Ok(Tone::Friendly),
            "motivational" => Ok(Tone::Motivational),
            other => Err(DomainError::Validation(format!("Unknown tone: {}", other))),
        }
    }
}

/// The platforms the generator form offers.
///
/// Product revisions disagree on this list, so it is configured rather than
/// hard-coded. Order is preserved; the first entry is the form default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformSet(Vec<Platform>);

impl PlatformSet {
    pub fn new(platforms: Vec<Platform>) -> Result<Self, DomainError> {
        let mut unique: Vec<Platform> = Vec::with_capacity(platforms.len());
        for platform in platforms {
            if !unique.contains(&platform) {
                unique.push(platform);
            }
        }
        if unique.is_empty() {
            return Err(DomainError::Validation(
                "At least one platform must be enabled".to_string(),
            ));
        }
        Ok(Self(unique))
    }

    /// Parse a comma separated list such as `telegram,instagram`.
    pub fn parse(list: &str) -> Result<Self, DomainError> {
        let platforms = list
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(Platform::from_str)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(platforms)
    }

    pub fn contains(&self, platform: Platform) -> bool {
        self.0.contains(&platform)
    }

    pub fn default_platform(&self) -> Platform {
        self.0[0]
    }

    pub fn iter(&self) -> impl Iterator<Item = Platform> + '_ {
        self.0.iter().copied()
    }

    /// Fail with a validation error when `platform` is not enabled.
    pub fn ensure(&self, platform: Platform) -> Result<(), DomainError> {
        if self.contains(platform) {
            Ok(())
        } else {
            Err(DomainError::Validation(format!(
                "Platform {} is not enabled",
                platform.label()
            )))
        }
    }
}

impl Default for PlatformSet {
    fn default() -> Self {
        Self(vec![
            Platform::Telegram,
            Platform::Instagram,
            Platform::Threads,
            Platform::Youtube,
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_parses_case_insensitively() {
        assert_eq!("Telegram".parse::<Platform>(), Ok(Platform::Telegram));
        assert_eq!(" vk ".parse::<Platform>(), Ok(Platform::Vk));
        assert!("myspace".parse::<Platform>().is_err());
    }

    #[test]
    fn platform_serializes_lowercase() {
        let json = serde_json::to_string(&Platform::Youtube).unwrap();
        assert_eq!(json, "\"youtube\"");
    }

    #[test]
    fn platform_set_defaults_to_four_networks() {
        let set = PlatformSet::default();
        assert_eq!(set.default_platform(), Platform::Telegram);
        assert!(set.contains(Platform::Threads));
        assert!(!set.contains(Platform::Vk));
    }

    #[test]
    fn platform_set_parse_dedups_and_keeps_order() {
        let set = PlatformSet::parse("vk, telegram,vk,instagram").unwrap();
        let listed: Vec<_> = set.iter().collect();
        assert_eq!(
            listed,
            vec![Platform::Vk, Platform::Telegram, Platform::Instagram]
        );
    }

    #[test]
    fn platform_set_rejects_empty_and_unknown() {
        assert!(PlatformSet::parse(" , ").is_err());
        assert!(PlatformSet::parse("telegram,orkut").is_err());
    }

    #[test]
    fn ensure_rejects_disabled_platform() {
        let set = PlatformSet::parse("vk,telegram,instagram").unwrap();
        assert!(set.ensure(Platform::Vk).is_ok());
        assert!(matches!(
            set.ensure(Platform::Youtube),
            Err(DomainError::Validation(_))
        ));
    }
}
