//! Async HTTP fetch client for the two PokéAPI endpoint shapes.
//!
//! # Design
//! `PokeClient` holds the base URL and a shared `reqwest::Client`; it
//! carries no other state between calls. The base URL is injected at
//! construction rather than hardcoded so tests can point the client at a
//! mock endpoint. Every operation is a bare unauthenticated GET with no
//! retries and no configured timeout.

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::ApiError;
use crate::types::{Pokemon, PokemonPage, PokemonRef};

/// Client for the list and detail endpoints of a PokéAPI-shaped host.
#[derive(Debug, Clone)]
pub struct PokeClient {
    base_url: String,
    http: reqwest::Client,
}

impl PokeClient {
    /// Create a client against the given base URL, e.g.
    /// `https://pokeapi.co/api/v2`. A trailing slash is stripped.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the first page of references, bounded by `limit`.
    ///
    /// Issues `GET {base}/pokemon?limit={n}` and returns the `results`
    /// sequence in response order.
    pub async fn list_pokemon(&self, limit: u32) -> Result<Vec<PokemonRef>, ApiError> {
        let url = format!("{}/pokemon?limit={limit}", self.base_url);
        let page: PokemonPage = self.get_json(&url).await?;
        Ok(page.results)
    }

    /// Resolve a record by numeric id, synthesizing the canonical detail
    /// URL. Equivalent to [`get_pokemon_by_url`](Self::get_pokemon_by_url)
    /// with `{base}/pokemon/{id}`.
    pub async fn get_pokemon(&self, id: u32) -> Result<Pokemon, ApiError> {
        let url = format!("{}/pokemon/{id}", self.base_url);
        self.get_pokemon_by_url(&url).await
    }

    /// Resolve a record directly from a reference URL as returned by the
    /// list endpoint.
    pub async fn get_pokemon_by_url(&self, url: &str) -> Result<Pokemon, ApiError> {
        self.get_json(url).await
    }

    /// GET `url` and decode the JSON body into `T`.
    ///
    /// Status interpretation happens before any body read: a non-2xx
    /// response becomes `ApiError::Http` with the body discarded.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        debug!(url, "GET");
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Http {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_stripped() {
        let client = PokeClient::new("https://pokeapi.co/api/v2/");
        assert_eq!(client.base_url(), "https://pokeapi.co/api/v2");
    }

    #[test]
    fn base_url_without_slash_is_kept_verbatim() {
        let client = PokeClient::new("http://127.0.0.1:3000");
        assert_eq!(client.base_url(), "http://127.0.0.1:3000");
    }
}
