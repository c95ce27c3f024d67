use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Whether a topic can still seed a blog post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TopicStatus {
    Available,
    Used,
    Archived,
}

impl TopicStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TopicStatus::Available => "AVAILABLE",
            TopicStatus::Used => "USED",
            TopicStatus::Archived => "ARCHIVED",
        }
    }

    /// Map a listing filter word to a status.
    ///
    /// The dashboard speaks `active`, `inactive` and `used`; the enum names
    /// themselves are accepted too. Anything else falls back to
    /// [`TopicStatus::Available`].
    pub fn from_filter(filter: Option<&str>) -> Self {
        match filter.map(str::trim) {
            Some(f) if f.eq_ignore_ascii_case("inactive") || f.eq_ignore_ascii_case("archived") => {
                TopicStatus::Archived
            }
            Some(f) if f.eq_ignore_ascii_case("used") => TopicStatus::Used,
            _ => TopicStatus::Available,
        }
    }
}

impl fmt::Display for TopicStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a topic came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TopicSource {
    /// Entered by the operator.
    Custom,
    /// Produced by theme refinement.
    Generated,
}

impl TopicSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            TopicSource::Custom => "CUSTOM",
            TopicSource::Generated => "GENERATED",
        }
    }
}

/// Topic entity - a candidate subject for a blog post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    pub id: Uuid,
    pub name: String,
    pub status: TopicStatus,
    pub source: TopicSource,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Topic {
    /// Create a new, available topic.
    pub fn new(name: impl Into<String>, source: TopicSource) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            status: TopicStatus::Available,
            source,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_available(&self) -> bool {
        self.status == TopicStatus::Available
    }
}
