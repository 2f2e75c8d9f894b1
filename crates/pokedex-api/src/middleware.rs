//! Auth helpers: Bearer token extraction and the `/protected` middleware.

use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;

use crate::auth::verify_token;
use crate::error::ApiError;
use crate::router::SharedState;

/// The authenticated subject, injected into request extensions by
/// [`require_auth`].
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    /// Identifier of the token's subject.
    pub id: i64,
}

/// Extract the raw token from an `Authorization: Bearer <token>` header value.
pub fn extract_bearer(header: &str) -> Option<String> {
    let token = header.strip_prefix("Bearer ")?;
    if token.is_empty() { None } else { Some(token.to_owned()) }
}

fn unauthorized() -> ApiError {
    ApiError::Unauthorized("YOU ARE UNAUTHORIZED".to_owned())
}

/// Middleware guarding `/protected/*` routes.
///
/// Verifies the bearer token's signature and expiry and injects
/// [`AuthUser`] into request extensions for handlers downstream.
///
/// # Errors
///
/// Returns `401` if the header is absent, not a Bearer scheme, or the
/// token is invalid or expired.
pub async fn require_auth(
    State(state): State<SharedState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let header = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(unauthorized)?;
    let token = extract_bearer(header).ok_or_else(unauthorized)?;
    let claims = verify_token(&state.jwt_secret, &token).map_err(|_| unauthorized())?;

    req.extensions_mut().insert(AuthUser { id: claims.sub });
    Ok(next.run(req).await)
}
