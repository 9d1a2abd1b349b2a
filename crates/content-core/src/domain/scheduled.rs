use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{GeneratedPost, PostId};
use crate::error::DomainError;

/// Date format accepted for scheduling.
pub const SCHEDULE_DATE_FORMAT: &str = "%Y-%m-%d";

/// A copy of a generated post tagged with the date it should appear on.
///
/// The copy is detached from the library: editing the source post later
/// does not change it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledPost {
    #[serde(flatten)]
    pub post: GeneratedPost,
    pub scheduled_date: NaiveDate,
}

impl ScheduledPost {
    pub fn new(post: GeneratedPost, scheduled_date: NaiveDate) -> Self {
        Self {
            post,
            scheduled_date,
        }
    }

    pub fn id(&self) -> &PostId {
        &self.post.id
    }
}

/// Parse a `YYYY-MM-DD` date entered by the user.
///
/// Anything that is not a real calendar date is rejected so it never
/// reaches the scheduled-post index.
pub fn parse_schedule_date(input: &str) -> Result<NaiveDate, DomainError> {
    let trimmed = input.trim();
    // chrono accepts unpadded fields; the stored key must be canonical
    if trimmed.len() != 10 {
        return Err(invalid_date(trimmed));
    }
    NaiveDate::parse_from_str(trimmed, SCHEDULE_DATE_FORMAT).map_err(|_| invalid_date(trimmed))
}

fn invalid_date(input: &str) -> DomainError {
    DomainError::Validation(format!(
        "Invalid date '{}', expected YYYY-MM-DD",
        input
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_dates() {
        assert_eq!(
            parse_schedule_date("2024-03-15").unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
        );
        assert_eq!(
            parse_schedule_date(" 2024-02-29 ").unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
    }

    #[test]
    fn rejects_malformed_dates() {
        for bad in ["", "tomorrow", "2024-3-15", "2024-13-01", "2023-02-29", "15.03.2024"] {
            assert!(
                matches!(parse_schedule_date(bad), Err(DomainError::Validation(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn serializes_flat_with_camel_case_date() {
        let post = GeneratedPost {
            id: PostId::new("1710460800000"),
            platform: crate::domain::Platform::Telegram,
            topic: "fitness".to_string(),
            text: "Move more".to_string(),
            timestamp: chrono::DateTime::from_timestamp_millis(1_710_460_800_000).unwrap(),
        };
        let scheduled = ScheduledPost::new(post, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());

        let json = serde_json::to_value(&scheduled).unwrap();
        assert_eq!(json["id"], "1710460800000");
        assert_eq!(json["platform"], "telegram");
        assert_eq!(json["scheduledDate"], "2024-03-15");
    }
}
