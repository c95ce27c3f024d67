use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Review state of a blog post.
///
/// The intended path is `Pending -> Approved -> Published`, or
/// `Pending -> Rejected`. The lifecycle does not enforce it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PostStatus {
    Pending,
    Approved,
    Published,
    Rejected,
}

impl PostStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostStatus::Pending => "PENDING",
            PostStatus::Approved => "APPROVED",
            PostStatus::Published => "PUBLISHED",
            PostStatus::Rejected => "REJECTED",
        }
    }
}

impl fmt::Display for PostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Post entity - a generated article under review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: Uuid,
    pub topic_id: Uuid,
    pub title: String,
    pub content: String,
    pub status: PostStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BlogPost {
    /// Create a new pending post.
    pub fn new(topic_id: Uuid, title: String, content: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            topic_id,
            title,
            content,
            status: PostStatus::Pending,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Posts grouped by review state for the dashboard.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostBuckets {
    pub pending: Vec<BlogPost>,
    pub approved: Vec<BlogPost>,
    pub published: Vec<BlogPost>,
}

impl PostBuckets {
    /// Sort posts into buckets. Rejected posts are dropped.
    pub fn partition(posts: Vec<BlogPost>) -> Self {
        let mut buckets = Self::default();
        for post in posts {
            match post.status {
                PostStatus::Pending => buckets.pending.push(post),
                PostStatus::Approved => buckets.approved.push(post),
                PostStatus::Published => buckets.published.push(post),
                PostStatus::Rejected => {}
            }
        }
        buckets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partition_drops_rejected() {
        let topic_id = Uuid::new_v4();
        let mut posts = Vec::new();
        for status in [
            PostStatus::Pending,
            PostStatus::Approved,
            PostStatus::Published,
            PostStatus::Rejected,
            PostStatus::Pending,
        ] {
            let mut post = BlogPost::new(topic_id, "t".into(), "c".into());
            post.status = status;
            posts.push(post);
        }

        let buckets = PostBuckets::partition(posts);
        assert_eq!(buckets.pending.len(), 2);
        assert_eq!(buckets.approved.len(), 1);
        assert_eq!(buckets.published.len(), 1);
    }
}
