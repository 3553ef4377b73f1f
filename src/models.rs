use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The six fixed thematic buckets. Closed set, never extended at runtime;
/// the serialized names are the keys of the persisted history document.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Joy,
    Anger,
    Sorrow,
    Fear,
    Birthday,
    Answers,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Joy,
        Category::Anger,
        Category::Sorrow,
        Category::Fear,
        Category::Birthday,
        Category::Answers,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Joy => "JOY",
            Category::Anger => "ANGER",
            Category::Sorrow => "SORROW",
            Category::Fear => "FEAR",
            Category::Birthday => "BIRTHDAY",
            Category::Answers => "ANSWERS",
        }
    }
}

/// One committed draw. Immutable once created; history never edits or
/// deletes individual records.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuoteRecord {
    pub id: String,
    /// Copied verbatim from the pool at draw time, not a reference, so
    /// history stays valid if the static pool changes in a later build.
    pub text: String,
    /// Epoch milliseconds; used only for display ordering and formatting.
    pub timestamp: i64,
}

impl QuoteRecord {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text: text.into(),
            timestamp: Utc::now().timestamp_millis(),
        }
    }
}
