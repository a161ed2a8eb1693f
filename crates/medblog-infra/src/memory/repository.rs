//! In-memory repositories - used when no database is configured.
//!
//! Rows live in a `Vec` behind an async RwLock. Data is lost on process
//! restart.

use std::cmp::Reverse;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use medblog_core::domain::{Comment, Faq, FaqDraft, Post, PostDraft, Profile, UserQuery};
use medblog_core::error::RepoError;
use medblog_core::ports::{
    BaseRepository, CommentFilter, CommentRepository, FaqRepository, PostFilter, PostOrder,
    PostRepository, ProfileRepository, UserQueryFilter, UserQueryRepository,
};

/// A row that can be kept in an [`InMemoryRepository`].
pub trait Record: Clone + Send + Sync + 'static {
    fn id(&self) -> Uuid;

    /// Whether inserting `self` next to `other` breaks a unique column.
    fn conflicts_with(&self, _other: &Self) -> bool {
        false
    }
}

impl Record for Post {
    fn id(&self) -> Uuid {
        self.id
    }

    fn conflicts_with(&self, other: &Self) -> bool {
        self.slug == other.slug
    }
}

impl Record for Comment {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Record for Faq {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Record for UserQuery {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Record for Profile {
    fn id(&self) -> Uuid {
        self.id
    }

    fn conflicts_with(&self, other: &Self) -> bool {
        self.user_id == other.user_id
    }
}

/// Generic in-memory table.
pub struct InMemoryRepository<T> {
    rows: RwLock<Vec<T>>,
}

pub type InMemoryPostRepository = InMemoryRepository<Post>;
pub type InMemoryCommentRepository = InMemoryRepository<Comment>;
pub type InMemoryFaqRepository = InMemoryRepository<Faq>;
pub type InMemoryUserQueryRepository = InMemoryRepository<UserQuery>;
pub type InMemoryProfileRepository = InMemoryRepository<Profile>;

impl<T: Record> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
        }
    }

    /// Rows passing `keep`, in insertion order.
    async fn select(&self, keep: impl Fn(&T) -> bool) -> Vec<T> {
        let rows = self.rows.read().await;
        rows.iter().filter(|row| keep(row)).cloned().collect()
    }

    /// Apply `change` to the row with `id` and return the updated row.
    async fn modify(&self, id: Uuid, change: impl FnOnce(&mut T)) -> Result<T, RepoError> {
        let mut rows = self.rows.write().await;
        let row = rows
            .iter_mut()
            .find(|row| row.id() == id)
            .ok_or(RepoError::NotFound)?;
        change(row);
        Ok(row.clone())
    }
}

impl<T: Record> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Record> BaseRepository<T, Uuid> for InMemoryRepository<T> {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<T>, RepoError> {
        let rows = self.rows.read().await;
        Ok(rows.iter().find(|row| row.id() == id).cloned())
    }

    async fn insert(&self, entity: T) -> Result<T, RepoError> {
        let mut rows = self.rows.write().await;
        if rows
            .iter()
            .any(|row| row.id() == entity.id() || entity.conflicts_with(row))
        {
            return Err(RepoError::Constraint("Entity already exists".to_string()));
        }
        rows.push(entity.clone());
        Ok(entity)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|row| row.id() != id);

        if rows.len() == before {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn list(&self, filter: &PostFilter) -> Result<Vec<Post>, RepoError> {
        let mut posts = self.select(|post| filter.accepts(post)).await;

        // Newest first is the tie-break for every order.
        posts.sort_by_key(|post| Reverse(post.created_at));
        match filter.order {
            PostOrder::Newest => {}
            PostOrder::MostViewed => posts.sort_by_key(|post| Reverse(post.views)),
            PostOrder::MostLiked => posts.sort_by_key(|post| Reverse(post.likes)),
        }

        if let Some(limit) = filter.limit {
            posts.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
        }

        Ok(posts)
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>, RepoError> {
        let rows = self.rows.read().await;
        Ok(rows.iter().find(|post| post.slug == slug).cloned())
    }

    async fn update(&self, id: Uuid, draft: PostDraft) -> Result<Post, RepoError> {
        self.modify(id, |post| post.apply(draft)).await
    }
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepository {
    async fn list(&self, filter: &CommentFilter) -> Result<Vec<Comment>, RepoError> {
        let mut comments = self.select(|comment| filter.accepts(comment)).await;
        comments.sort_by_key(|comment| Reverse(comment.created_at));
        Ok(comments)
    }

    async fn set_approved(&self, id: Uuid, approved: bool) -> Result<Comment, RepoError> {
        self.modify(id, |comment| comment.approved = approved).await
    }
}

#[async_trait]
impl FaqRepository for InMemoryFaqRepository {
    async fn list(&self) -> Result<Vec<Faq>, RepoError> {
        let mut faqs = self.select(|_| true).await;
        faqs.sort_by_key(|faq| (faq.order_index, faq.created_at));
        Ok(faqs)
    }

    async fn update(&self, id: Uuid, draft: FaqDraft) -> Result<Faq, RepoError> {
        self.modify(id, |faq| faq.apply(draft)).await
    }
}

#[async_trait]
impl UserQueryRepository for InMemoryUserQueryRepository {
    async fn list(&self, filter: &UserQueryFilter) -> Result<Vec<UserQuery>, RepoError> {
        let mut queries = self.select(|query| filter.accepts(query)).await;
        queries.sort_by_key(|query| Reverse(query.created_at));
        Ok(queries)
    }

    async fn answer(
        &self,
        id: Uuid,
        answer: String,
        approved: bool,
    ) -> Result<UserQuery, RepoError> {
        self.modify(id, |query| query.answer_with(answer, approved)).await
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Option<Profile>, RepoError> {
        let rows = self.rows.read().await;
        Ok(rows.iter().find(|p| p.user_id == user_id).cloned())
    }

    async fn find_by_user_ids(&self, user_ids: &[Uuid]) -> Result<Vec<Profile>, RepoError> {
        Ok(self.select(|p| user_ids.contains(&p.user_id)).await)
    }
}
