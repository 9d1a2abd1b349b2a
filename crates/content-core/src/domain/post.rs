use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Platform;

/// Post identifier - the creation time in Unix milliseconds, as a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(String);

impl PostId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn from_millis(millis: i64) -> Self {
        Self(millis.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PostId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// GeneratedPost entity - a post text produced for one platform and topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedPost {
    pub id: PostId,
    pub platform: Platform,
    pub topic: String,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl GeneratedPost {
    pub fn new(
        id: PostId,
        platform: Platform,
        topic: String,
        text: String,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            platform,
            topic,
            text,
            timestamp,
        }
    }
}
