//! Public blog: listing, reading, categories, hot topics and comments.

use std::sync::Arc;

use chrono::{DateTime, TimeDelta, Utc};

use super::{
    ANONYMOUS, CategoryStat, CommentView, DisplayNames, HotTopics, PostCard, PostDetail,
    ShareLinks, required,
};
use crate::domain::{Category, Comment, Post, Session};
use crate::error::DomainError;
use crate::listing::{ListingQuery, refine};
use crate::ports::{
    CommentFilter, CommentRepository, PostFilter, PostOrder, PostRepository, ProfileRepository,
};

pub const TRENDING_WINDOW_DAYS: i64 = 30;
pub const TRENDING_LIMIT: u64 = 6;
pub const RECENT_WINDOW_DAYS: i64 = 7;
pub const RECENT_LIMIT: u64 = 4;
pub const POPULAR_LIMIT: u64 = 4;

/// Site-level settings used when assembling public views.
#[derive(Debug, Clone)]
pub struct BlogSettings {
    /// Scheme and host that share links point at.
    pub site_origin: String,
    /// Byline used when a post's author has no display name.
    pub default_author: String,
}

impl Default for BlogSettings {
    fn default() -> Self {
        Self {
            site_origin: "http://localhost:8080".to_string(),
            default_author: "Dr. Awais Raza".to_string(),
        }
    }
}

/// Read side of the blog plus reader comments.
#[derive(Clone)]
pub struct BlogService {
    posts: Arc<dyn PostRepository>,
    comments: Arc<dyn CommentRepository>,
    profiles: Arc<dyn ProfileRepository>,
    settings: BlogSettings,
}

impl BlogService {
    pub fn new(
        posts: Arc<dyn PostRepository>,
        comments: Arc<dyn CommentRepository>,
        profiles: Arc<dyn ProfileRepository>,
        settings: BlogSettings,
    ) -> Self {
        Self {
            posts,
            comments,
            profiles,
            settings,
        }
    }

    /// Published posts for the listing screen.
    ///
    /// Category and sort go to the repository; the search term is applied to
    /// the fetched rows.
    pub async fn list_posts(&self, query: &ListingQuery) -> Result<Vec<PostCard>, DomainError> {
        let posts = self.posts.list(&query.filter()).await?;
        let posts = refine(posts, &query.term);

        tracing::debug!(
            category = ?query.category,
            sort = ?query.sort,
            count = posts.len(),
            "Listed posts"
        );

        self.cards(posts).await
    }

    /// A published post by slug, with approved comments and share links.
    pub async fn read_post(&self, slug: &str) -> Result<PostDetail, DomainError> {
        let post = self.published_post(slug).await?;

        let filter = CommentFilter {
            post_id: Some(post.id),
            approved: Some(true),
        };
        let comments = self.comments.list(&filter).await?;
        let names = DisplayNames::load(
            self.profiles.as_ref(),
            comments.iter().map(|c| c.user_id).chain([post.author_id]),
        )
        .await?;

        let comments = comments
            .into_iter()
            .map(|comment| CommentView {
                author_name: names.get_or(comment.user_id, ANONYMOUS),
                comment,
                post_title: None,
            })
            .collect();

        let share = ShareLinks::for_post(&self.settings.site_origin, &post);
        let card = PostCard {
            author_name: names.get_or(post.author_id, &self.settings.default_author),
            post,
        };

        Ok(PostDetail {
            card,
            comments,
            share,
        })
    }

    /// Add a comment to a published post. It stays hidden until approved.
    pub async fn submit_comment(
        &self,
        session: &Session,
        slug: &str,
        content: &str,
    ) -> Result<Comment, DomainError> {
        let content = required("Comment", content)?;
        let post = self.published_post(slug).await?;

        let comment = self
            .comments
            .insert(Comment::new(post.id, session.user_id, content))
            .await?;

        tracing::info!(
            user_id = %session.user_id,
            post_id = %post.id,
            comment_id = %comment.id,
            "Comment submitted for moderation"
        );

        Ok(comment)
    }

    /// Published post counts for every category, in display order.
    pub async fn category_overview(&self) -> Result<Vec<CategoryStat>, DomainError> {
        let posts = self.posts.list(&PostFilter::published()).await?;

        Ok(Category::ALL
            .into_iter()
            .map(|category| CategoryStat {
                category,
                description: category.description(),
                count: posts.iter().filter(|p| p.category == category).count(),
            })
            .collect())
    }

    /// Published posts of one category, newest first.
    pub async fn posts_in_category(&self, category: Category) -> Result<Vec<PostCard>, DomainError> {
        let filter = PostFilter::published().in_category(Some(category));
        let posts = self.posts.list(&filter).await?;
        self.cards(posts).await
    }

    /// Trending, recent and popular posts relative to `now`.
    pub async fn hot_topics(&self, now: DateTime<Utc>) -> Result<HotTopics, DomainError> {
        let trending = PostFilter::published()
            .since(now - TimeDelta::days(TRENDING_WINDOW_DAYS))
            .ordered_by(PostOrder::MostViewed)
            .limit(TRENDING_LIMIT);
        let recent = PostFilter::published()
            .since(now - TimeDelta::days(RECENT_WINDOW_DAYS))
            .ordered_by(PostOrder::Newest)
            .limit(RECENT_LIMIT);
        let popular = PostFilter::published()
            .ordered_by(PostOrder::MostLiked)
            .limit(POPULAR_LIMIT);

        let trending = self.posts.list(&trending).await?;
        let recent = self.posts.list(&recent).await?;
        let popular = self.posts.list(&popular).await?;

        Ok(HotTopics {
            trending: self.cards(trending).await?,
            recent: self.cards(recent).await?,
            popular: self.cards(popular).await?,
        })
    }

    async fn published_post(&self, slug: &str) -> Result<Post, DomainError> {
        self.posts
            .find_by_slug(slug)
            .await?
            .filter(|post| post.published)
            .ok_or_else(|| DomainError::not_found("Post", slug))
    }

    async fn cards(&self, posts: Vec<Post>) -> Result<Vec<PostCard>, DomainError> {
        let names =
            DisplayNames::load(self.profiles.as_ref(), posts.iter().map(|p| p.author_id)).await?;

        Ok(posts
            .into_iter()
            .map(|post| PostCard {
                author_name: names.get_or(post.author_id, &self.settings.default_author),
                post,
            })
            .collect())
    }
}
