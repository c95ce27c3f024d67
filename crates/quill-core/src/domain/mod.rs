//! Domain entities - the core business objects.

mod post;
mod topic;

pub use post::{BlogPost, PostBuckets, PostStatus};
pub use topic::{Topic, TopicSource, TopicStatus};
