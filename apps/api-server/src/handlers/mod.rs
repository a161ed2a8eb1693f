//! HTTP handlers and route configuration.

mod admin;
mod blog;
mod faq;
mod health;

#[cfg(test)]
mod tests;

use actix_web::{HttpResponse, error, web};
use medblog_shared::ErrorResponse;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // Public routes
            .route("/health", web::get().to(health::health_check))
            .route("/posts", web::get().to(blog::list_posts))
            .route("/posts/{slug}", web::get().to(blog::read_post))
            .route("/posts/{slug}/comments", web::post().to(blog::submit_comment))
            .route("/categories", web::get().to(blog::categories))
            .route(
                "/categories/{category}/posts",
                web::get().to(blog::category_posts),
            )
            .route("/hot-topics", web::get().to(blog::hot_topics))
            .route("/faqs", web::get().to(faq::list_faqs))
            .route("/community-questions", web::get().to(faq::community_questions))
            .route("/questions", web::post().to(faq::ask_question))
            // Admin routes
            .service(
                web::scope("/admin")
                    .route("/dashboard", web::get().to(admin::dashboard))
                    .route("/posts", web::post().to(admin::create_post))
                    .route("/posts/{id}", web::put().to(admin::update_post))
                    .route("/posts/{id}", web::delete().to(admin::delete_post))
                    .route(
                        "/comments/{id}/approval",
                        web::put().to(admin::set_comment_approval),
                    )
                    .route("/comments/{id}", web::delete().to(admin::delete_comment))
                    .route("/faqs", web::post().to(admin::create_faq))
                    .route("/faqs/{id}", web::put().to(admin::update_faq))
                    .route("/faqs/{id}", web::delete().to(admin::delete_faq))
                    .route("/queries/{id}/answer", web::put().to(admin::answer_query)),
            ),
    );
}

/// Malformed JSON bodies get the same problem shape as every other error.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let body = ErrorResponse::bad_request(err.to_string());
        error::InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
    })
}

/// A path segment that does not parse (say, a malformed id) is a 400, not
/// actix's plain-text 404.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, _req| {
        let body = ErrorResponse::bad_request(err.to_string());
        error::InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
    })
}

pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        let body = ErrorResponse::bad_request(err.to_string());
        error::InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
    })
}
