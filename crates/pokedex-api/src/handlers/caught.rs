//! /protected/* — capture, release, and list a user's caught pokemon.

use axum::extract::{Path, State};
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::models::{CaughtPokemon, CaughtPokemonEntry};
use crate::router::SharedState;

/// Request body for `POST /protected/catch`.
#[derive(Debug, Deserialize)]
pub struct CatchRequest {
    /// Name of the pokemon to catch.
    pub name: Option<String>,
}

/// Response body for `POST /protected/catch`.
#[derive(Debug, Serialize)]
pub struct CatchResponse {
    /// Human-readable confirmation.
    pub message: String,
    /// The created caught record.
    pub data: CaughtPokemon,
}

/// Response body for `DELETE /protected/release/{id}`.
#[derive(Debug, Serialize)]
pub struct ReleaseResponse {
    /// Human-readable confirmation.
    pub message: String,
}

/// Response body for `GET /protected/caught`.
///
/// An empty collection is a message, not an error.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum CaughtListResponse {
    /// The user owns no caught records.
    Empty {
        /// Human-readable empty-collection message.
        message: String,
    },
    /// The user's collection, each record joined with its pokemon.
    Data {
        /// Caught records, newest last.
        data: Vec<CaughtPokemonEntry>,
    },
}

/// Handle `POST /protected/catch` — find-or-create the pokemon by name and
/// record a capture for the authenticated user.
///
/// Repeated captures of the same name create additional records; only the
/// pokemon row itself is deduplicated.
///
/// # Errors
///
/// Returns `400` if `name` is missing, or `500` on a store failure.
pub async fn catch_handler(
    State(state): State<SharedState>,
    Extension(user): Extension<AuthUser>,
    Json(body): Json<CatchRequest>,
) -> Result<Json<CatchResponse>, ApiError> {
    let name = match body.name {
        Some(name) if !name.is_empty() => name,
        _ => return Err(ApiError::BadRequest("Pokemon name is required".to_owned())),
    };

    // Find-or-create by name; the insert returns no row when the name
    // already exists.
    let inserted = sqlx::query_scalar::<_, i64>(
        "INSERT INTO pokemons (name) VALUES ($1)
         ON CONFLICT (name) DO NOTHING
         RETURNING id",
    )
    .bind(&name)
    .fetch_optional(&state.pool)
    .await
    .map_err(|e| ApiError::db(&e))?;

    let pokemon_id = match inserted {
        Some(id) => id,
        None => sqlx::query_scalar::<_, i64>("SELECT id FROM pokemons WHERE name = $1")
            .bind(&name)
            .fetch_one(&state.pool)
            .await
            .map_err(|e| ApiError::db(&e))?,
    };

    let caught = sqlx::query_as::<_, CaughtPokemon>(
        "INSERT INTO caught_pokemons (user_id, pokemon_id) VALUES ($1, $2)
         RETURNING id, user_id, pokemon_id, created_at",
    )
    .bind(user.id)
    .bind(pokemon_id)
    .fetch_one(&state.pool)
    .await
    .map_err(|e| ApiError::db(&e))?;

    Ok(Json(CatchResponse {
        message: "Pokemon caught".to_owned(),
        data: caught,
    }))
}

/// Handle `DELETE /protected/release/{id}` — delete a caught record owned by
/// the authenticated user.
///
/// # Errors
///
/// Returns `404` if no record matches both the id and the subject as owner;
/// a record owned by someone else is indistinguishable from one that does
/// not exist. Returns `500` on a store failure.
pub async fn release_handler(
    State(state): State<SharedState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<i64>,
) -> Result<Json<ReleaseResponse>, ApiError> {
    let result = sqlx::query("DELETE FROM caught_pokemons WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(user.id)
        .execute(&state.pool)
        .await
        .map_err(|e| ApiError::db(&e))?;

    if result.rows_affected() == 0 {
        return Err(ApiError::NotFound(
            "Pokemon not found or not owned by user".to_owned(),
        ));
    }

    Ok(Json(ReleaseResponse {
        message: "Pokemon is released".to_owned(),
    }))
}

/// Handle `GET /protected/caught` — list the authenticated user's caught
/// records, each joined with its pokemon.
///
/// # Errors
///
/// Returns `500` on a store failure.
pub async fn caught_handler(
    State(state): State<SharedState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<CaughtListResponse>, ApiError> {
    let rows = sqlx::query_as::<_, CaughtPokemonEntry>(
        "SELECT c.id, c.pokemon_id, p.name, c.created_at
         FROM caught_pokemons c
         JOIN pokemons p ON p.id = c.pokemon_id
         WHERE c.user_id = $1
         ORDER BY c.id",
    )
    .bind(user.id)
    .fetch_all(&state.pool)
    .await
    .map_err(|e| ApiError::db(&e))?;

    if rows.is_empty() {
        return Ok(Json(CaughtListResponse::Empty {
            message: "No Pokémon found.".to_owned(),
        }));
    }

    Ok(Json(CaughtListResponse::Data { data: rows }))
}
