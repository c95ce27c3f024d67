//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Deserializer, Serialize};

/// Body of `POST /api/topics`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddTopicRequest {
    #[serde(default)]
    pub topic: String,
}

/// Query of `GET /api/topics`. A blank `size` means no cap.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListTopicsQuery {
    pub status: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub size: Option<u64>,
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(size) => size.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

/// Query of `POST /api/blogs/generate`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateBlogQuery {
    #[serde(default)]
    pub topic_id: String,
}

/// Body of `POST /api/blogs/update/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateBlogRequest {
    #[serde(default)]
    pub content: String,
}

/// Payload of `GET /api/blogs/approved`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostsPayload<T> {
    pub posts: Vec<T>,
}

/// Request to login.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_size_is_uncapped() {
        let query: ListTopicsQuery = serde_json::from_str(r#"{ "size": "  " }"#).unwrap();
        assert_eq!(query.size, None);

        let query: ListTopicsQuery = serde_json::from_str(r#"{ "status": "used" }"#).unwrap();
        assert_eq!(query.size, None);
    }

    #[test]
    fn test_numeric_size_is_parsed() {
        let query: ListTopicsQuery = serde_json::from_str(r#"{ "size": "3" }"#).unwrap();
        assert_eq!(query.size, Some(3));

        assert!(serde_json::from_str::<ListTopicsQuery>(r#"{ "size": "many" }"#).is_err());
    }
}
