use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::domain::status::AuthorizationStatus;

/// Kind of content item an authorization refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementType {
    Show,
    Video,
    Article,
}

impl ElementType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Show => "show",
            Self::Video => "video",
            Self::Article => "article",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "show" => Some(Self::Show),
            "video" => Some(Self::Video),
            "article" => Some(Self::Article),
            _ => None,
        }
    }
}

impl std::fmt::Display for ElementType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A pending or resolved request to approve publication of a content item.
///
/// At most one open (status < 0) record may exist per (element_type,
/// element_id) pair; the storage layer enforces this with a partial unique
/// index on top of the transactional check.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Authorization {
    pub id: i64,
    pub element_type: String,
    pub element_id: i64,
    pub content: String,
    pub status: AuthorizationStatus,
    pub submit_date: DateTime<Utc>,
    pub manager: Option<String>,
    pub comments: Option<String>,
    pub response_date: Option<DateTime<Utc>>,
    pub signature: Option<String>,
}

/// The free-form request payload stored in `Authorization::content`.
///
/// Shows carry an estimated broadcast duration, videos their runtime;
/// articles have no extra fields. Unknown keys are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizationContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
}

impl AuthorizationContent {
    /// Lenient parse: a malformed payload degrades to an empty one rather
    /// than failing a notification.
    pub fn parse(raw: &str) -> Self {
        serde_json::from_str(raw).unwrap_or_default()
    }
}

#[derive(Debug, Clone)]
pub struct NewAuthorization {
    pub element_type: ElementType,
    pub element_id: i64,
    pub content: String,
    pub status: AuthorizationStatus,
    pub submit_date: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_type_parses_known_kinds() {
        assert_eq!(ElementType::parse("show"), Some(ElementType::Show));
        assert_eq!(ElementType::parse("video"), Some(ElementType::Video));
        assert_eq!(ElementType::parse("article"), Some(ElementType::Article));
        assert_eq!(ElementType::parse("podcast"), None);
        assert_eq!(ElementType::parse(""), None);
    }

    #[test]
    fn content_payload_parses_duration_fields() {
        let show = AuthorizationContent::parse(r#"{"estimatedDuration":"45 min"}"#);
        assert_eq!(show.estimated_duration.as_deref(), Some("45 min"));

        let video = AuthorizationContent::parse(r#"{"duration":"5:12"}"#);
        assert_eq!(video.duration.as_deref(), Some("5:12"));
    }

    #[test]
    fn malformed_content_payload_degrades_to_empty() {
        let parsed = AuthorizationContent::parse("not json at all");
        assert!(parsed.estimated_duration.is_none());
        assert!(parsed.duration.is_none());
    }
}
