//! Admin moderation: posts, comments, FAQs and user questions.
//!
//! Every operation checks the session's role first. Writes are a single
//! insert, update or delete by primary key followed by a re-fetch of the
//! affected list, which is what the caller gets back.

use std::collections::HashMap;
use std::sync::Arc;

use uuid::Uuid;

use super::{ANONYMOUS, CommentView, Dashboard, DisplayNames, QueryView, RepoResultExt, required};
use crate::domain::{Faq, FaqDraft, Post, PostDraft, Session};
use crate::error::DomainError;
use crate::ports::{
    CommentFilter, CommentRepository, FaqRepository, PostFilter, PostRepository,
    ProfileRepository, UserQueryFilter, UserQueryRepository,
};
use crate::text::slugify;

/// The repositories the admin surface works on.
#[derive(Clone)]
pub struct AdminRepositories {
    pub posts: Arc<dyn PostRepository>,
    pub comments: Arc<dyn CommentRepository>,
    pub faqs: Arc<dyn FaqRepository>,
    pub queries: Arc<dyn UserQueryRepository>,
    pub profiles: Arc<dyn ProfileRepository>,
}

#[derive(Clone)]
pub struct AdminService {
    repos: AdminRepositories,
}

impl AdminService {
    pub fn new(repos: AdminRepositories) -> Self {
        Self { repos }
    }

    pub async fn dashboard(&self, session: &Session) -> Result<Dashboard, DomainError> {
        session.require_admin()?;

        let posts = self.repos.posts.list(&PostFilter::all()).await?;
        let comments = self.comment_views(&posts).await?;
        let faqs = self.repos.faqs.list().await?;
        let queries = self.query_views().await?;

        Ok(Dashboard {
            posts,
            comments,
            faqs,
            queries,
        })
    }

    // Posts

    /// All posts, published or not, newest first.
    pub async fn posts(&self, session: &Session) -> Result<Vec<Post>, DomainError> {
        session.require_admin()?;
        Ok(self.repos.posts.list(&PostFilter::all()).await?)
    }

    /// Create a post authored by the admin. Fails if the slug is taken.
    pub async fn create_post(
        &self,
        session: &Session,
        mut draft: PostDraft,
    ) -> Result<Vec<Post>, DomainError> {
        session.require_admin()?;
        draft.title = required("Title", &draft.title)?;

        let slug = slugify(&draft.title);
        if slug.is_empty() {
            return Err(DomainError::Validation(
                "Title must contain at least one letter or digit".to_string(),
            ));
        }
        if self.repos.posts.find_by_slug(&slug).await?.is_some() {
            return Err(DomainError::Duplicate(format!(
                "A post with slug '{slug}' already exists"
            )));
        }

        let post = self
            .repos
            .posts
            .insert(Post::new(session.user_id, draft))
            .await?;
        tracing::info!(admin = %session.user_id, post_id = %post.id, slug = %post.slug, "Post created");

        self.posts(session).await
    }

    pub async fn update_post(
        &self,
        session: &Session,
        id: Uuid,
        mut draft: PostDraft,
    ) -> Result<Vec<Post>, DomainError> {
        session.require_admin()?;
        draft.title = required("Title", &draft.title)?;

        self.repos
            .posts
            .update(id, draft)
            .await
            .or_missing("Post", id)?;
        tracing::info!(admin = %session.user_id, post_id = %id, "Post updated");

        self.posts(session).await
    }

    pub async fn delete_post(&self, session: &Session, id: Uuid) -> Result<Vec<Post>, DomainError> {
        session.require_admin()?;

        self.repos.posts.delete(id).await.or_missing("Post", id)?;
        tracing::info!(admin = %session.user_id, post_id = %id, "Post deleted");

        self.posts(session).await
    }

    // Comments

    /// All comments with commenter name and post title, newest first.
    pub async fn comments(&self, session: &Session) -> Result<Vec<CommentView>, DomainError> {
        session.require_admin()?;
        let posts = self.repos.posts.list(&PostFilter::all()).await?;
        self.comment_views(&posts).await
    }

    /// Approve (`true`) or reject (`false`) a comment.
    pub async fn set_comment_approval(
        &self,
        session: &Session,
        id: Uuid,
        approved: bool,
    ) -> Result<Vec<CommentView>, DomainError> {
        session.require_admin()?;

        self.repos
            .comments
            .set_approved(id, approved)
            .await
            .or_missing("Comment", id)?;
        tracing::info!(admin = %session.user_id, comment_id = %id, approved, "Comment moderated");

        self.comments(session).await
    }

    pub async fn delete_comment(
        &self,
        session: &Session,
        id: Uuid,
    ) -> Result<Vec<CommentView>, DomainError> {
        session.require_admin()?;

        self.repos
            .comments
            .delete(id)
            .await
            .or_missing("Comment", id)?;
        tracing::info!(admin = %session.user_id, comment_id = %id, "Comment deleted");

        self.comments(session).await
    }

    // FAQs

    pub async fn faqs(&self, session: &Session) -> Result<Vec<Faq>, DomainError> {
        session.require_admin()?;
        Ok(self.repos.faqs.list().await?)
    }

    pub async fn create_faq(
        &self,
        session: &Session,
        draft: FaqDraft,
    ) -> Result<Vec<Faq>, DomainError> {
        session.require_admin()?;
        let draft = validate_faq(draft)?;

        let faq = self.repos.faqs.insert(Faq::new(draft)).await?;
        tracing::info!(admin = %session.user_id, faq_id = %faq.id, "FAQ created");

        self.faqs(session).await
    }

    pub async fn update_faq(
        &self,
        session: &Session,
        id: Uuid,
        draft: FaqDraft,
    ) -> Result<Vec<Faq>, DomainError> {
        session.require_admin()?;
        let draft = validate_faq(draft)?;

        self.repos
            .faqs
            .update(id, draft)
            .await
            .or_missing("FAQ", id)?;
        tracing::info!(admin = %session.user_id, faq_id = %id, "FAQ updated");

        self.faqs(session).await
    }

    pub async fn delete_faq(&self, session: &Session, id: Uuid) -> Result<Vec<Faq>, DomainError> {
        session.require_admin()?;

        self.repos.faqs.delete(id).await.or_missing("FAQ", id)?;
        tracing::info!(admin = %session.user_id, faq_id = %id, "FAQ deleted");

        self.faqs(session).await
    }

    // User queries

    /// Every submitted question with the asker's name, newest first.
    pub async fn queries(&self, session: &Session) -> Result<Vec<QueryView>, DomainError> {
        session.require_admin()?;
        self.query_views().await
    }

    /// Answer a question and decide whether it is shown publicly.
    pub async fn answer_query(
        &self,
        session: &Session,
        id: Uuid,
        answer: &str,
        approved: bool,
    ) -> Result<Vec<QueryView>, DomainError> {
        session.require_admin()?;
        let answer = required("Answer", answer)?;

        self.repos
            .queries
            .answer(id, answer, approved)
            .await
            .or_missing("Question", id)?;
        tracing::info!(admin = %session.user_id, query_id = %id, approved, "Question answered");

        self.query_views().await
    }

    async fn comment_views(&self, posts: &[Post]) -> Result<Vec<CommentView>, DomainError> {
        let comments = self.repos.comments.list(&CommentFilter::default()).await?;
        let names = DisplayNames::load(
            self.repos.profiles.as_ref(),
            comments.iter().map(|c| c.user_id),
        )
        .await?;
        let titles: HashMap<Uuid, &str> = posts
            .iter()
            .map(|post| (post.id, post.title.as_str()))
            .collect();

        Ok(comments
            .into_iter()
            .map(|comment| CommentView {
                author_name: names.get_or(comment.user_id, ANONYMOUS),
                post_title: titles.get(&comment.post_id).map(|t| t.to_string()),
                comment,
            })
            .collect())
    }

    async fn query_views(&self) -> Result<Vec<QueryView>, DomainError> {
        let queries = self
            .repos
            .queries
            .list(&UserQueryFilter::default())
            .await?;
        let names = DisplayNames::load(
            self.repos.profiles.as_ref(),
            queries.iter().map(|q| q.user_id),
        )
        .await?;

        Ok(queries
            .into_iter()
            .map(|query| QueryView {
                author_name: names.get_or(query.user_id, ANONYMOUS),
                query,
            })
            .collect())
    }
}

fn validate_faq(draft: FaqDraft) -> Result<FaqDraft, DomainError> {
    Ok(FaqDraft {
        question: required("Question", &draft.question)?,
        answer: required("Answer", &draft.answer)?,
        category: draft
            .category
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty()),
        order_index: draft.order_index,
    })
}
