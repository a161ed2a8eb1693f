//! Session extractor: who is calling, resolved from the bearer token.

use actix_web::{FromRequest, HttpRequest, dev::Payload, http::header, web};
use futures::future::LocalBoxFuture;

use medblog_core::domain::{Role, Session};
use medblog_core::ports::AuthError;

use crate::middleware::error::AppError;
use crate::state::AppState;

/// The signed-in caller. Extraction fails with 401 without a valid token.
///
/// The role comes from the caller's profile; a caller without one is a
/// regular user.
#[derive(Debug, Clone, Copy)]
pub struct CurrentUser(pub Session);

impl FromRequest for CurrentUser {
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let state = req.app_data::<web::Data<AppState>>().cloned();
        let token = bearer_token(req);

        Box::pin(async move {
            let state = state.ok_or_else(|| {
                tracing::error!("AppState not found in app data");
                AppError::Internal("Server configuration error".to_string())
            })?;

            let claims = state.tokens.validate_token(&token?)?;
            let role = state
                .profiles
                .find_by_user_id(claims.user_id)
                .await?
                .map(|profile| profile.role)
                .unwrap_or(Role::User);

            tracing::debug!(
                user_id = %claims.user_id,
                email = claims.email.as_deref().unwrap_or("-"),
                role = role.as_str(),
                "Session resolved"
            );

            Ok(CurrentUser(Session::new(claims.user_id, role)))
        })
    }
}

/// Extract `<token>` from `Authorization: Bearer <token>`.
fn bearer_token(req: &HttpRequest) -> Result<String, AuthError> {
    let header = req
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or(AuthError::MissingAuth)?;

    let value = header
        .to_str()
        .map_err(|_| AuthError::InvalidToken("Invalid authorization header".to_string()))?;

    value
        .strip_prefix("Bearer ")
        .map(str::to_string)
        .ok_or_else(|| AuthError::InvalidToken("Expected Bearer token".to_string()))
}
