//! Data Transfer Objects - request/response bodies.

use serde::{Deserialize, Serialize};

// ── Generation endpoint contract ──────────────────────────────────────

/// Body POSTed to the generation endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationPayload {
    pub topic: String,
    pub platform: String,
    pub tone: String,
}

/// Success body of the generation endpoint.
///
/// Both fields are optional on the wire; the client decides what a missing
/// `text` means.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationReply {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// Failure body of the generation endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationFailure {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

// ── Content server API ────────────────────────────────────────────────

/// Generator form fields. Omitted fields keep their current value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormFields {
    pub topic: Option<String>,
    pub platform: Option<String>,
    pub tone: Option<String>,
}

/// Request to replace a post's text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    pub text: String,
}

/// Request to schedule a post. `date` is `YYYY-MM-DD`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulePostRequest {
    pub date: String,
}

/// Query string of the scheduled-post listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScheduleQuery {
    pub date: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_reply_tolerates_missing_fields() {
        let reply: GenerationReply = serde_json::from_str("{}").unwrap();
        assert_eq!(reply, GenerationReply::default());

        let reply: GenerationReply =
            serde_json::from_str(r#"{"text":"hello","source":"template","extra":1}"#).unwrap();
        assert_eq!(reply.text.as_deref(), Some("hello"));
        assert_eq!(reply.source.as_deref(), Some("template"));
    }

    #[test]
    fn generation_failure_reads_error_field() {
        let failure: GenerationFailure =
            serde_json::from_str(r#"{"error":"quota exceeded"}"#).unwrap();
        assert_eq!(failure.error.as_deref(), Some("quota exceeded"));
    }
}
