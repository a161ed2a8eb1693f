//! Public blog handlers: listing, reading, categories, hot topics, comments.

use std::str::FromStr;

use actix_web::{HttpResponse, web};
use chrono::Utc;

use medblog_core::DomainError;
use medblog_core::domain::Category;
use medblog_core::listing::{ListingQuery, SortKey, parse_category_filter};
use medblog_shared::ApiResponse;
use medblog_shared::dto::{CommentRequest, PostListParams};

use crate::middleware::error::{ActionContext, AppResult};
use crate::middleware::session::CurrentUser;
use crate::state::AppState;

/// GET /api/posts?category=&sort=&q=
pub async fn list_posts(
    state: web::Data<AppState>,
    params: web::Query<PostListParams>,
) -> AppResult<HttpResponse> {
    let query = listing_query(params.into_inner()).during("Error loading posts")?;

    let cards = state
        .blog
        .list_posts(&query)
        .await
        .during("Error loading posts")?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(cards)))
}

/// GET /api/posts/{slug}
pub async fn read_post(
    state: web::Data<AppState>,
    slug: web::Path<String>,
) -> AppResult<HttpResponse> {
    let detail = state
        .blog
        .read_post(&slug)
        .await
        .during("Error loading post")?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(detail)))
}

/// POST /api/posts/{slug}/comments
pub async fn submit_comment(
    state: web::Data<AppState>,
    CurrentUser(session): CurrentUser,
    slug: web::Path<String>,
    body: web::Json<CommentRequest>,
) -> AppResult<HttpResponse> {
    let comment = state
        .blog
        .submit_comment(&session, &slug, &body.content)
        .await
        .during("Error submitting comment")?;

    Ok(HttpResponse::Created().json(ApiResponse::ok_with_message(
        comment,
        "Your comment will be visible once it has been approved.",
    )))
}

/// GET /api/categories
pub async fn categories(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let stats = state
        .blog
        .category_overview()
        .await
        .during("Error loading categories")?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(stats)))
}

/// GET /api/categories/{category}/posts
pub async fn category_posts(
    state: web::Data<AppState>,
    category: web::Path<String>,
) -> AppResult<HttpResponse> {
    let category = Category::from_str(&category).during("Error loading posts")?;

    let cards = state
        .blog
        .posts_in_category(category)
        .await
        .during("Error loading posts")?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(cards)))
}

/// GET /api/hot-topics
pub async fn hot_topics(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let topics = state
        .blog
        .hot_topics(Utc::now())
        .await
        .during("Error loading hot topics")?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(topics)))
}

fn listing_query(params: PostListParams) -> Result<ListingQuery, DomainError> {
    let sort = match params.sort.as_deref() {
        None | Some("") => SortKey::default(),
        Some(raw) => SortKey::from_str(raw)?,
    };

    Ok(ListingQuery {
        category: parse_category_filter(params.category.as_deref())?,
        sort,
        term: params.q.unwrap_or_default(),
    })
}
