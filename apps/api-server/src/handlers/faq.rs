//! FAQ page and community question handlers.

use actix_web::{HttpResponse, web};

use medblog_core::services::FaqQuery;
use medblog_shared::ApiResponse;
use medblog_shared::dto::{FaqListParams, QuestionRequest};

use crate::middleware::error::{ActionContext, AppResult};
use crate::middleware::session::CurrentUser;
use crate::state::AppState;

/// GET /api/faqs?category=&q=
pub async fn list_faqs(
    state: web::Data<AppState>,
    params: web::Query<FaqListParams>,
) -> AppResult<HttpResponse> {
    let params = params.into_inner();
    let query = FaqQuery {
        category: params
            .category
            .filter(|c| !c.is_empty() && c != "all"),
        term: params.q.unwrap_or_default(),
    };

    let faqs = state
        .faq
        .list_faqs(&query)
        .await
        .during("Error loading FAQs")?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(faqs)))
}

/// GET /api/community-questions
pub async fn community_questions(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let questions = state
        .faq
        .community_questions()
        .await
        .during("Error loading FAQs")?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(questions)))
}

/// POST /api/questions
pub async fn ask_question(
    state: web::Data<AppState>,
    CurrentUser(session): CurrentUser,
    body: web::Json<QuestionRequest>,
) -> AppResult<HttpResponse> {
    let query = state
        .faq
        .ask(&session, &body.question)
        .await
        .during("Error submitting question")?;

    Ok(HttpResponse::Created().json(ApiResponse::ok_with_message(
        query,
        "Question submitted! Your question has been submitted for review. You'll be notified when it's answered.",
    )))
}
