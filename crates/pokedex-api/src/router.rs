//! Axum router construction.

use std::sync::Arc;

use axum::routing::{delete, get, post};
use axum::{middleware, Json, Router};
use serde::Serialize;
use sqlx::PgPool;
use tower_http::cors::CorsLayer;

use crate::handlers::caught::{catch_handler, caught_handler, release_handler};
use crate::handlers::pokemon::lookup_handler;
use crate::handlers::users::{login_handler, register_handler};
use crate::middleware::require_auth;
use crate::pokeapi::PokeApiClient;

/// Shared application state handed to every handler.
pub struct AppState {
    /// `PostgreSQL` connection pool.
    pub pool: PgPool,
    /// Secret used to sign and verify bearer tokens.
    pub jwt_secret: String,
    /// Client for the upstream pokemon lookup service.
    pub pokeapi: PokeApiClient,
}

/// State as shared across the router.
pub type SharedState = Arc<AppState>;

/// Response body for the health endpoint.
#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
}

/// Build the Axum application router.
///
/// `/protected/*` routes are guarded by [`require_auth`]; everything else
/// is public. Cross-origin requests are permitted from any origin.
pub fn build_router(state: AppState) -> Router {
    let state = Arc::new(state);

    let protected = Router::new()
        .route("/catch", post(catch_handler))
        .route("/release/{id}", delete(release_handler))
        .route("/caught", get(caught_handler))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    Router::new()
        .route("/healthz", get(health_handler))
        .route("/register", post(register_handler))
        .route("/login", post(login_handler))
        .route("/pokemon/{name}", get(lookup_handler))
        .nest("/protected", protected)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
