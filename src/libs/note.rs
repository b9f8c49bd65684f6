use chrono::Utc;
use serde::{Deserialize, Serialize};

/// A free-text note. Field names serialize as camelCase, the layout the
/// stored `notes` collection has always used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub title: String,
    pub content: String,
    pub created_at: String,
    pub updated_at: String,
}

impl Note {
    pub const DEFAULT_TITLE: &'static str = "Untitled";

    /// Builds a note stamped with the current time. The id is the creation
    /// time in milliseconds as a string; two notes created within the same
    /// millisecond will collide.
    pub fn new(title: &str, content: &str) -> Self {
        let now = Utc::now();
        let title = title.trim();
        Note {
            id: now.timestamp_millis().to_string(),
            title: if title.is_empty() {
                Self::DEFAULT_TITLE.to_string()
            } else {
                title.to_string()
            },
            content: content.to_string(),
            created_at: now.to_rfc3339(),
            updated_at: now.to_rfc3339(),
        }
    }

    /// True when there is nothing worth saving.
    pub fn is_blank(title: &str, content: &str) -> bool {
        title.trim().is_empty() && content.trim().is_empty()
    }
}
