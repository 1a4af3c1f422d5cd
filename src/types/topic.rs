use feruca::Collator;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::time::{SystemTime, UNIX_EPOCH};

/// A unit of content identified by a stable `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub id: String,
    pub category: String,
    pub title: String,
    pub description: String,
}

impl Topic {
    pub fn new(id: &str, category: &str, title: &str, description: &str) -> Self {
        Self {
            id: id.to_string(),
            category: category.to_string(),
            title: title.to_string(),
            description: description.to_string(),
        }
    }
}

/// A recently viewed topic and the moment it was recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub topic: Topic,
    /// Milliseconds since the UNIX epoch.
    pub timestamp: i64,
}

/// A pinned topic. Serialized flat, with the topic fields next to `addedAt`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteTopic {
    #[serde(flatten)]
    pub topic: Topic,
    /// Milliseconds since the UNIX epoch.
    #[serde(rename = "addedAt")]
    pub added_at: i64,
}

impl FavoriteTopic {
    pub fn id(&self) -> &str {
        &self.topic.id
    }

    pub fn title(&self) -> &str {
        &self.topic.title
    }
}

/// Source of timestamps for new entries.
pub type Clock = fn() -> i64;

/// Returns the current UNIX timestamp in milliseconds.
pub fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as i64
}

/// Orders titles with the Unicode Collation Algorithm (CLDR root order).
///
/// Accented letters sort next to their base letter, case is a tertiary
/// difference with lowercase first, and punctuation and spaces are ignored
/// until everything else ties.
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    Collator::default().collate(a, b)
}
