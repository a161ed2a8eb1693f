//! Admin moderation handlers. Every route needs a session with the admin
//! role; writes answer with the refreshed list and a success notice.

use std::str::FromStr;

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use medblog_core::DomainError;
use medblog_core::domain::{Category, FaqDraft, PostDraft};
use medblog_core::text::parse_tags;
use medblog_shared::ApiResponse;
use medblog_shared::dto::{
    AnswerQueryRequest, CommentApprovalRequest, FaqRequest, PostRequest, TagsInput,
};

use crate::middleware::error::{ActionContext, AppResult};
use crate::middleware::session::CurrentUser;
use crate::state::AppState;

/// GET /api/admin/dashboard
pub async fn dashboard(
    state: web::Data<AppState>,
    CurrentUser(session): CurrentUser,
) -> AppResult<HttpResponse> {
    let dashboard = state
        .admin
        .dashboard(&session)
        .await
        .during("Error fetching data")?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(dashboard)))
}

// Posts

/// POST /api/admin/posts
pub async fn create_post(
    state: web::Data<AppState>,
    CurrentUser(session): CurrentUser,
    body: web::Json<PostRequest>,
) -> AppResult<HttpResponse> {
    session.require_admin().during("Error creating post")?;
    let draft = post_draft(body.into_inner()).during("Error creating post")?;

    let posts = state
        .admin
        .create_post(&session, draft)
        .await
        .during("Error creating post")?;

    Ok(HttpResponse::Created().json(ApiResponse::ok_with_message(
        posts,
        "Post created successfully",
    )))
}

/// PUT /api/admin/posts/{id}
pub async fn update_post(
    state: web::Data<AppState>,
    CurrentUser(session): CurrentUser,
    id: web::Path<Uuid>,
    body: web::Json<PostRequest>,
) -> AppResult<HttpResponse> {
    session.require_admin().during("Error updating post")?;
    let draft = post_draft(body.into_inner()).during("Error updating post")?;

    let posts = state
        .admin
        .update_post(&session, id.into_inner(), draft)
        .await
        .during("Error updating post")?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(
        posts,
        "Post updated successfully",
    )))
}

/// DELETE /api/admin/posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    CurrentUser(session): CurrentUser,
    id: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let posts = state
        .admin
        .delete_post(&session, id.into_inner())
        .await
        .during("Error deleting post")?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(
        posts,
        "Post deleted successfully",
    )))
}

// Comments

/// PUT /api/admin/comments/{id}/approval
pub async fn set_comment_approval(
    state: web::Data<AppState>,
    CurrentUser(session): CurrentUser,
    id: web::Path<Uuid>,
    body: web::Json<CommentApprovalRequest>,
) -> AppResult<HttpResponse> {
    let approved = body.approved;

    let comments = state
        .admin
        .set_comment_approval(&session, id.into_inner(), approved)
        .await
        .during("Error updating comment")?;

    let notice = if approved {
        "Comment approved"
    } else {
        "Comment rejected"
    };
    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(comments, notice)))
}

/// DELETE /api/admin/comments/{id}
pub async fn delete_comment(
    state: web::Data<AppState>,
    CurrentUser(session): CurrentUser,
    id: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let comments = state
        .admin
        .delete_comment(&session, id.into_inner())
        .await
        .during("Error deleting comment")?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(
        comments,
        "Comment deleted successfully",
    )))
}

// FAQs

/// POST /api/admin/faqs
pub async fn create_faq(
    state: web::Data<AppState>,
    CurrentUser(session): CurrentUser,
    body: web::Json<FaqRequest>,
) -> AppResult<HttpResponse> {
    let faqs = state
        .admin
        .create_faq(&session, faq_draft(body.into_inner()))
        .await
        .during("Error creating FAQ")?;

    Ok(HttpResponse::Created().json(ApiResponse::ok_with_message(
        faqs,
        "FAQ created successfully",
    )))
}

/// PUT /api/admin/faqs/{id}
pub async fn update_faq(
    state: web::Data<AppState>,
    CurrentUser(session): CurrentUser,
    id: web::Path<Uuid>,
    body: web::Json<FaqRequest>,
) -> AppResult<HttpResponse> {
    let faqs = state
        .admin
        .update_faq(&session, id.into_inner(), faq_draft(body.into_inner()))
        .await
        .during("Error updating FAQ")?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(
        faqs,
        "FAQ updated successfully",
    )))
}

/// DELETE /api/admin/faqs/{id}
pub async fn delete_faq(
    state: web::Data<AppState>,
    CurrentUser(session): CurrentUser,
    id: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let faqs = state
        .admin
        .delete_faq(&session, id.into_inner())
        .await
        .during("Error deleting FAQ")?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(
        faqs,
        "FAQ deleted successfully",
    )))
}

// User queries

/// PUT /api/admin/queries/{id}/answer
pub async fn answer_query(
    state: web::Data<AppState>,
    CurrentUser(session): CurrentUser,
    id: web::Path<Uuid>,
    body: web::Json<AnswerQueryRequest>,
) -> AppResult<HttpResponse> {
    let body = body.into_inner();

    let queries = state
        .admin
        .answer_query(&session, id.into_inner(), &body.answer, body.approved)
        .await
        .during("Error answering query")?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(
        queries,
        "Query answered successfully",
    )))
}

fn post_draft(req: PostRequest) -> Result<PostDraft, DomainError> {
    let tags = match req.tags {
        TagsInput::Text(text) => parse_tags(&text),
        TagsInput::List(list) => list
            .into_iter()
            .map(|tag| tag.trim().to_string())
            .filter(|tag| !tag.is_empty())
            .collect(),
    };

    Ok(PostDraft {
        title: req.title,
        excerpt: req.excerpt,
        content: req.content,
        featured_image: req.featured_image.filter(|url| !url.trim().is_empty()),
        category: Category::from_str(&req.category)?,
        tags,
        published: req.published,
    })
}

fn faq_draft(req: FaqRequest) -> FaqDraft {
    FaqDraft {
        question: req.question,
        answer: req.answer,
        category: req.category,
        order_index: req.order_index,
    }
}
