//! POST /register and POST /login — account creation and token issuance.

use axum::extract::State;
use axum::Json;
use log::error;
use serde::{Deserialize, Serialize};

use crate::auth::{hash_password, issue_token, verify_password};
use crate::error::ApiError;
use crate::router::SharedState;

/// Request body for `POST /register` and `POST /login`.
#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    /// Account email address.
    pub email: Option<String>,
    /// Plaintext password.
    pub password: Option<String>,
}

/// Response body for `POST /register`.
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    /// Confirmation naming the created account.
    pub message: String,
}

/// Response body for `POST /login`.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    /// Human-readable confirmation.
    pub message: String,
    /// Signed bearer token, valid for one hour.
    pub token: String,
}

// Presence only: an empty string is a present (if unwise) credential.
fn require_credentials(body: CredentialsRequest) -> Result<(String, String), ApiError> {
    match (body.email, body.password) {
        (Some(email), Some(password)) => Ok((email, password)),
        _ => Err(ApiError::BadRequest(
            "Email and password are required".to_owned(),
        )),
    }
}

/// Handle `POST /register` — hash the password and create a user.
///
/// # Errors
///
/// Returns `400` if a credential is missing or the email already exists,
/// or `500` on any other store failure.
pub async fn register_handler(
    State(state): State<SharedState>,
    Json(body): Json<CredentialsRequest>,
) -> Result<Json<RegisterResponse>, ApiError> {
    let (email, password) = require_credentials(body)?;

    let password_hash = hash_password(&password).map_err(|e| {
        error!("bcrypt: {e}");
        ApiError::Internal("Internal Server Error".to_owned())
    })?;

    sqlx::query("INSERT INTO users (email, password_hash) VALUES ($1, $2)")
        .bind(&email)
        .bind(&password_hash)
        .execute(&state.pool)
        .await
        .map_err(|e| {
            if e.as_database_error().is_some_and(|d| d.is_unique_violation()) {
                return ApiError::Conflict("Email already exists".to_owned());
            }
            ApiError::db(&e)
        })?;

    Ok(Json(RegisterResponse {
        message: format!("{email} created successfully"),
    }))
}

/// Handle `POST /login` — verify credentials and issue a bearer token.
///
/// # Errors
///
/// Returns `404` if no user has that email, `401` if the password does not
/// match, or `500` on a store failure.
pub async fn login_handler(
    State(state): State<SharedState>,
    Json(body): Json<CredentialsRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let (email, password) = require_credentials(body)?;

    let row = sqlx::query_as::<_, (i64, String)>(
        "SELECT id, password_hash FROM users WHERE email = $1",
    )
    .bind(&email)
    .fetch_optional(&state.pool)
    .await
    .map_err(|e| ApiError::db(&e))?
    .ok_or_else(|| ApiError::NotFound("User not found".to_owned()))?;

    let valid = verify_password(&password, &row.1).map_err(|e| {
        error!("bcrypt: {e}");
        ApiError::Internal("Internal Server Error".to_owned())
    })?;
    if !valid {
        return Err(ApiError::Unauthorized("Invalid credentials".to_owned()));
    }

    let token = issue_token(&state.jwt_secret, row.0).map_err(|e| {
        error!("token signing: {e}");
        ApiError::Internal("Internal Server Error".to_owned())
    })?;

    Ok(Json(LoginResponse {
        message: "Login successful".to_owned(),
        token,
    }))
}
