//! GET /pokemon/{name} — public lookup proxy to the upstream service.

use axum::extract::{Path, State};
use axum::Json;
use log::error;
use serde::Serialize;

use crate::error::ApiError;
use crate::pokeapi::LookupError;
use crate::router::SharedState;

/// Response body for `GET /pokemon/{name}`.
#[derive(Debug, Serialize)]
pub struct LookupResponse {
    /// Raw structured data as returned by the upstream service.
    pub data: serde_json::Value,
}

/// Handle `GET /pokemon/{name}` — forward the name upstream and relay the
/// result.
///
/// # Errors
///
/// Returns `404` if the upstream reports not-found, or `500` on any other
/// upstream failure.
pub async fn lookup_handler(
    State(state): State<SharedState>,
    Path(name): Path<String>,
) -> Result<Json<LookupResponse>, ApiError> {
    let data = state.pokeapi.fetch_pokemon(&name).await.map_err(|e| match e {
        LookupError::NotFound => {
            ApiError::NotFound("Your Pokémon was not found!".to_owned())
        }
        LookupError::Upstream(msg) => {
            error!("upstream lookup: {msg}");
            ApiError::Internal("Error fetching Pokémon data".to_owned())
        }
    })?;

    Ok(Json(LookupResponse { data }))
}
