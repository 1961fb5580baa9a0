//! Data Transfer Objects - request/response types for the API.
//!
//! Identifier fields are generic so the same bodies serve integer and UUID
//! deployments.

use serde::{Deserialize, Serialize};

pub const DEFAULT_POST_STATUS: &str = "draft";

fn default_status() -> String {
    DEFAULT_POST_STATUS.to_owned()
}

/// Body of `POST /blogs` and `PUT /blogs/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostRequest<Id> {
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_id: Option<Id>,
}

/// Body of `POST /categories`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Body of `POST /menus` and `PUT /menus/{id}`. A missing `parent_id` makes a root menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuRequest<Id> {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<Id>,
}

/// Payload of `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// `postgres` or `memory`.
    pub storage: String,
    pub timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_request_defaults() {
        let req: PostRequest<i64> = serde_json::from_str(r#"{"title":"Hello"}"#).unwrap();

        assert_eq!(req.content, "");
        assert_eq!(req.status, DEFAULT_POST_STATUS);
        assert!(req.cover_image.is_none());
        assert!(req.author_id.is_none());
    }

    #[test]
    fn test_menu_request_null_parent_is_root() {
        let explicit: MenuRequest<i64> =
            serde_json::from_str(r#"{"name":"Home","parent_id":null}"#).unwrap();
        let omitted: MenuRequest<i64> = serde_json::from_str(r#"{"name":"Home"}"#).unwrap();

        assert_eq!(explicit, omitted);
        assert!(omitted.parent_id.is_none());
    }
}
