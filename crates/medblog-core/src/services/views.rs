use serde::Serialize;

use crate::domain::{Category, Comment, Faq, Post, UserQuery};

/// A post together with its author's display name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostCard {
    #[serde(flatten)]
    pub post: Post,
    pub author_name: String,
}

/// The public reading view of a post.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostDetail {
    #[serde(flatten)]
    pub card: PostCard,
    pub comments: Vec<CommentView>,
    pub share: ShareLinks,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommentView {
    #[serde(flatten)]
    pub comment: Comment,
    pub author_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryView {
    #[serde(flatten)]
    pub query: UserQuery,
    pub author_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryStat {
    pub category: Category,
    pub description: &'static str,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HotTopics {
    pub trending: Vec<PostCard>,
    pub recent: Vec<PostCard>,
    pub popular: Vec<PostCard>,
}

/// Everything the moderation screen shows at once.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub posts: Vec<Post>,
    pub comments: Vec<CommentView>,
    pub faqs: Vec<Faq>,
    pub queries: Vec<QueryView>,
}

/// Deep link to a post and the third-party share URLs built around it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShareLinks {
    pub url: String,
    pub twitter: String,
    pub linkedin: String,
    pub facebook: String,
    pub whatsapp: String,
}

impl ShareLinks {
    pub fn for_post(origin: &str, post: &Post) -> Self {
        let url = format!("{}{}", origin.trim_end_matches('/'), post.path());
        let encoded_url = urlencoding::encode(&url);
        let encoded_title = urlencoding::encode(&post.title);

        Self {
            twitter: format!(
                "https://twitter.com/intent/tweet?text={encoded_title}&url={encoded_url}"
            ),
            linkedin: format!("https://www.linkedin.com/sharing/share-offsite/?url={encoded_url}"),
            facebook: format!("https://www.facebook.com/sharer/sharer.php?u={encoded_url}"),
            whatsapp: format!("https://wa.me/?text={encoded_title}%20{encoded_url}"),
            url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PostDraft;
    use uuid::Uuid;

    #[test]
    fn test_share_links_encode_url_and_title() {
        let post = Post::new(
            Uuid::new_v4(),
            PostDraft {
                title: "Flu Season & You".into(),
                ..Default::default()
            },
        );

        let links = ShareLinks::for_post("https://medblog.example/", &post);

        assert_eq!(links.url, "https://medblog.example/blog/flu-season-you");
        assert_eq!(
            links.facebook,
            "https://www.facebook.com/sharer/sharer.php?u=https%3A%2F%2Fmedblog.example%2Fblog%2Fflu-season-you"
        );
        assert!(links.twitter.starts_with("https://twitter.com/intent/tweet?text=Flu%20Season%20%26%20You&url="));
        assert!(links.whatsapp.contains("Flu%20Season%20%26%20You%20https%3A"));
    }
}
