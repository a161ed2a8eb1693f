//! Typed repository ports - the data client, one narrow interface per table.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::{
    Category, Comment, Faq, FaqDraft, Post, PostDraft, Profile, UserQuery,
};
use crate::error::RepoError;

/// Generic repository trait defining the CRUD operations every table shares.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Insert a new entity.
    async fn insert(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID. Fails with `NotFound` if nothing was deleted.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Sort order for post listings. Every order is descending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PostOrder {
    #[default]
    Newest,
    MostViewed,
    MostLiked,
}

/// Filter, order and limit for a post select.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostFilter {
    pub published: Option<bool>,
    pub category: Option<Category>,
    /// Only posts created at or after this instant.
    pub created_since: Option<DateTime<Utc>>,
    pub order: PostOrder,
    pub limit: Option<u64>,
}

impl PostFilter {
    /// Every post, newest first.
    pub fn all() -> Self {
        Self::default()
    }

    /// Published posts, newest first.
    pub fn published() -> Self {
        Self {
            published: Some(true),
            ..Self::default()
        }
    }

    pub fn in_category(mut self, category: Option<Category>) -> Self {
        self.category = category;
        self
    }

    pub fn since(mut self, instant: DateTime<Utc>) -> Self {
        self.created_since = Some(instant);
        self
    }

    pub fn ordered_by(mut self, order: PostOrder) -> Self {
        self.order = order;
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Whether a post passes the filter (ignores order and limit).
    pub fn accepts(&self, post: &Post) -> bool {
        self.published.is_none_or(|p| post.published == p)
            && self.category.is_none_or(|c| post.category == c)
            && self.created_since.is_none_or(|t| post.created_at >= t)
    }
}

/// Filter for a comment select. Results are always newest first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommentFilter {
    pub post_id: Option<Uuid>,
    pub approved: Option<bool>,
}

impl CommentFilter {
    pub fn accepts(&self, comment: &Comment) -> bool {
        self.post_id.is_none_or(|id| comment.post_id == id)
            && self.approved.is_none_or(|a| comment.approved == a)
    }
}

/// Filter for a user query select. Results are always newest first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UserQueryFilter {
    pub answered: Option<bool>,
    pub approved: Option<bool>,
}

impl UserQueryFilter {
    /// Answered and approved: the community list.
    pub fn public() -> Self {
        Self {
            answered: Some(true),
            approved: Some(true),
        }
    }

    pub fn accepts(&self, query: &UserQuery) -> bool {
        self.answered.is_none_or(|a| query.answered == a)
            && self.approved.is_none_or(|a| query.approved == a)
    }
}

/// Blog post repository.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, Uuid> {
    async fn list(&self, filter: &PostFilter) -> Result<Vec<Post>, RepoError>;

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>, RepoError>;

    /// Overwrite the editable fields of a post. The slug is not re-derived.
    async fn update(&self, id: Uuid, draft: PostDraft) -> Result<Post, RepoError>;
}

/// Comment repository.
#[async_trait]
pub trait CommentRepository: BaseRepository<Comment, Uuid> {
    async fn list(&self, filter: &CommentFilter) -> Result<Vec<Comment>, RepoError>;

    async fn set_approved(&self, id: Uuid, approved: bool) -> Result<Comment, RepoError>;
}

/// FAQ repository. Listings are ordered by `order_index` ascending.
#[async_trait]
pub trait FaqRepository: BaseRepository<Faq, Uuid> {
    async fn list(&self) -> Result<Vec<Faq>, RepoError>;

    async fn update(&self, id: Uuid, draft: FaqDraft) -> Result<Faq, RepoError>;
}

/// User query repository.
#[async_trait]
pub trait UserQueryRepository: BaseRepository<UserQuery, Uuid> {
    async fn list(&self, filter: &UserQueryFilter) -> Result<Vec<UserQuery>, RepoError>;

    /// Store an answer, mark the query answered and set its approval.
    async fn answer(
        &self,
        id: Uuid,
        answer: String,
        approved: bool,
    ) -> Result<UserQuery, RepoError>;
}

/// Profile repository, looked up by auth user id.
#[async_trait]
pub trait ProfileRepository: BaseRepository<Profile, Uuid> {
    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Option<Profile>, RepoError>;

    async fn find_by_user_ids(&self, user_ids: &[Uuid]) -> Result<Vec<Profile>, RepoError>;
}
