//! pokedex API library.
#![deny(warnings, clippy::all, clippy::pedantic)]
#![warn(missing_docs)]

/// Password hashing and bearer-token issuance/verification.
pub mod auth;
pub mod config;
pub mod db;
pub mod error;
/// Auth helpers: Bearer token extraction and the `/protected` layer.
pub mod middleware;
pub mod handlers;
pub mod models;
pub mod pokeapi;
pub mod router;
