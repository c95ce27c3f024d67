//! Lifecycle managers.
//!
//! Both services are stateless between calls: every operation re-reads and
//! re-writes through the repositories, so the store stays the single source
//! of truth.

mod blog;
mod topic;

pub use blog::BlogService;
pub use topic::{DEFAULT_TOPIC_BATCH, TopicService};

use uuid::Uuid;

use crate::error::{DomainError, RepoError};

/// Parse an identifier taken from a request.
///
/// Blank input is a validation failure. Text that is not a UUID cannot name a
/// stored record, so it parses to `None`.
fn parse_id(raw: &str, required: &str) -> Result<Option<Uuid>, DomainError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(DomainError::validation(required));
    }
    Ok(Uuid::parse_str(raw).ok())
}

/// Like [`parse_id`], but an unparseable id is the store's not-found failure.
fn require_id(raw: &str, required: &str) -> Result<Uuid, DomainError> {
    parse_id(raw, required)?.ok_or(DomainError::Store(RepoError::NotFound))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_id_is_validation() {
        let err = parse_id("   ", "Blog Id is required").unwrap_err();
        assert!(matches!(err, DomainError::Validation(ref m) if m == "Blog Id is required"));
    }

    #[test]
    fn test_garbage_id_cannot_exist() {
        assert_eq!(parse_id("not-a-uuid", "x").unwrap(), None);
        assert!(matches!(
            require_id("not-a-uuid", "x"),
            Err(DomainError::Store(RepoError::NotFound))
        ));
    }

    #[test]
    fn test_valid_id_is_trimmed() {
        let id = Uuid::new_v4();
        assert_eq!(parse_id(&format!(" {id} "), "x").unwrap(), Some(id));
    }
}
