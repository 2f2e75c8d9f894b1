//! `reqwest`-backed client for the upstream pokemon lookup service.

use log::debug;
use reqwest::StatusCode;
use thiserror::Error;

/// Errors from an upstream lookup, classified at the client boundary.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The upstream reported that no such pokemon exists.
    #[error("pokemon not found upstream")]
    NotFound,
    /// Network failure or an unexpected upstream status.
    #[error("upstream lookup failed: {0}")]
    Upstream(String),
}

/// Client for the pokemon reference service.
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl PokeApiClient {
    /// Create a new client targeting `base_url` (no trailing slash).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
        }
    }

    fn lookup_url(&self, name: &str) -> String {
        format!("{}/pokemon/{name}", self.base_url)
    }

    /// Fetch the raw structured data for a pokemon by name.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::NotFound`] on an upstream 404, and
    /// [`LookupError::Upstream`] on any other failure.
    pub async fn fetch_pokemon(&self, name: &str) -> Result<serde_json::Value, LookupError> {
        let url = self.lookup_url(name);
        debug!("fetching pokemon from {url}");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| LookupError::Upstream(e.to_string()))?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(LookupError::NotFound),
            status if status.is_success() => response
                .json()
                .await
                .map_err(|e| LookupError::Upstream(e.to_string())),
            status => Err(LookupError::Upstream(format!(
                "unexpected upstream status: {status}"
            ))),
        }
    }
}
