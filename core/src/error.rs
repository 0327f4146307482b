//! Error taxonomy for the PokéAPI client.
//!
//! # Design
//! Three kinds, matching the three ways a bare GET-and-decode can fail:
//! the request never completed (`Transport`), the server answered outside
//! the 2xx range (`Http`), or the body did not match the expected shape
//! (`Decode`). All three propagate unchanged through the aggregator; no
//! kind is retried or recovered locally.

use thiserror::Error;

/// Errors returned by [`PokeClient`](crate::PokeClient) operations and the
/// aggregator built on top of them.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network unreachable, DNS failure, connection reset — the request
    /// never produced a response.
    #[error("transport error: {0}")]
    Transport(String),

    /// The server responded with a non-2xx status.
    #[error("HTTP error: status {status}")]
    Http { status: u16 },

    /// The response body could not be deserialized into the expected type.
    #[error("decode error: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_displays_status() {
        let err = ApiError::Http { status: 500 };
        assert_eq!(err.to_string(), "HTTP error: status 500");
    }

    #[test]
    fn decode_error_carries_message() {
        let err = ApiError::Decode("expected value at line 1".to_string());
        assert!(err.to_string().contains("expected value"));
    }
}
