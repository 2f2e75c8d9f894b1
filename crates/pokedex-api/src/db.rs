//! `PostgreSQL` pool initialisation for the pokedex store.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use thiserror::Error;

/// Upper bound on pooled connections. Every operation holds at most one
/// connection for a single query, so a small pool suffices.
const MAX_CONNECTIONS: u32 = 5;

/// Errors that can occur while bringing up the pokedex store.
#[derive(Debug, Error)]
pub enum DbError {
    /// The pool could not connect to the pokedex database.
    #[error("failed to connect to the pokedex database: {0}")]
    Connect(#[source] sqlx::Error),
    /// The pokedex schema migrations could not be applied.
    #[error("failed to apply pokedex schema migrations: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

/// Create the connection pool and apply pending pokedex schema migrations
/// (users, pokemons, caught records).
///
/// # Errors
///
/// Returns [`DbError`] if the pool cannot be created or a migration fails.
pub async fn connect_and_migrate(database_url: &str) -> Result<PgPool, DbError> {
    let pool = PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect(database_url)
        .await
        .map_err(DbError::Connect)?;
    sqlx::migrate!("./migrations").run(&pool).await?;
    Ok(pool)
}
