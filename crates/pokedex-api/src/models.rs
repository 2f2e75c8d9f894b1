//! Row and response models shared across handlers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A caught-pokemon record as stored.
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct CaughtPokemon {
    /// Record identifier.
    pub id: i64,
    /// Owning user.
    pub user_id: i64,
    /// The caught pokemon.
    pub pokemon_id: i64,
    /// Capture timestamp.
    pub created_at: DateTime<Utc>,
}

/// A caught record joined with its pokemon's name, for collection listings.
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct CaughtPokemonEntry {
    /// Record identifier.
    pub id: i64,
    /// The caught pokemon.
    pub pokemon_id: i64,
    /// The pokemon's unique name.
    pub name: String,
    /// Capture timestamp.
    pub created_at: DateTime<Utc>,
}
