use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Category;
use crate::text::{SearchTerm, slugify};

/// Post entity - a blog article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub author_id: Uuid,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub featured_image: Option<String>,
    pub category: Category,
    pub tags: Vec<String>,
    pub published: bool,
    pub views: i32,
    pub likes: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Editable fields of a post, as submitted from the admin form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostDraft {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub featured_image: Option<String>,
    pub category: Category,
    pub tags: Vec<String>,
    pub published: bool,
}

impl Post {
    /// Create a new post. The slug is derived from the title once, here.
    pub fn new(author_id: Uuid, draft: PostDraft) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            author_id,
            slug: slugify(&draft.title),
            title: draft.title,
            excerpt: draft.excerpt,
            content: draft.content,
            featured_image: draft.featured_image,
            category: draft.category,
            tags: draft.tags,
            published: draft.published,
            views: 0,
            likes: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrite the editable fields. The slug is left untouched.
    pub fn apply(&mut self, draft: PostDraft) {
        self.title = draft.title;
        self.excerpt = draft.excerpt;
        self.content = draft.content;
        self.featured_image = draft.featured_image;
        self.category = draft.category;
        self.tags = draft.tags;
        self.published = draft.published;
        self.updated_at = Utc::now();
    }

    /// Whether the title, excerpt or any tag contains the term.
    pub fn matches(&self, term: &SearchTerm) -> bool {
        term.found_in(&self.title)
            || term.found_in(&self.excerpt)
            || self.tags.iter().any(|tag| term.found_in(tag))
    }

    /// Path of the public reading page.
    pub fn path(&self) -> String {
        format!("/blog/{}", self.slug)
    }
}
