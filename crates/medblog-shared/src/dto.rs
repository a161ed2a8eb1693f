//! Data Transfer Objects - request types for the API.

use serde::{Deserialize, Serialize};

/// Query string of the blog listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostListParams {
    /// A category name, or `all`.
    pub category: Option<String>,
    /// `created_at`, `views` or `likes`.
    pub sort: Option<String>,
    pub q: Option<String>,
}

/// Query string of the FAQ page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FaqListParams {
    pub category: Option<String>,
    pub q: Option<String>,
}

/// Tags as sent by the admin forms: the create form posts the raw
/// comma-separated field, the edit form may post either shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TagsInput {
    List(Vec<String>),
    Text(String),
}

impl Default for TagsInput {
    fn default() -> Self {
        TagsInput::List(Vec::new())
    }
}

/// Admin post form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostRequest {
    pub title: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub featured_image: Option<String>,
    pub category: String,
    #[serde(default)]
    pub tags: TagsInput,
    #[serde(default)]
    pub published: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentRequest {
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionRequest {
    pub question: String,
}

/// Admin FAQ form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaqRequest {
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub order_index: i32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CommentApprovalRequest {
    pub approved: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerQueryRequest {
    pub answer: String,
    #[serde(default)]
    pub approved: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_accept_both_shapes() {
        let from_text: PostRequest = serde_json::from_str(
            r#"{"title":"T","category":"Medicine","tags":"heart, sleep"}"#,
        )
        .unwrap();
        assert_eq!(from_text.tags, TagsInput::Text("heart, sleep".into()));

        let from_list: PostRequest = serde_json::from_str(
            r#"{"title":"T","category":"Medicine","tags":["heart","sleep"]}"#,
        )
        .unwrap();
        assert_eq!(
            from_list.tags,
            TagsInput::List(vec!["heart".into(), "sleep".into()])
        );
    }

    #[test]
    fn test_post_request_defaults() {
        let req: PostRequest =
            serde_json::from_str(r#"{"title":"T","category":"Surgery"}"#).unwrap();
        assert_eq!(req.tags, TagsInput::default());
        assert!(!req.published);
        assert!(req.featured_image.is_none());
        assert!(req.excerpt.is_empty());
    }
}
