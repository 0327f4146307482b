//! Async API client core for a PokéAPI-shaped host.
//!
//! # Overview
//! Turns one paginated list call into N concurrent detail calls and
//! assembles a unified in-memory collection before any UI renders. The
//! presentation layer consumes the collection as-is and never fetches on
//! its own.
//!
//! # Design
//! - `PokeClient` holds only a base URL and a shared `reqwest::Client`;
//!   the base host is injected at construction so tests can target a mock.
//! - The aggregator is an all-or-nothing batch join: first error wins and
//!   partial results are never observable.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod aggregator;
pub mod client;
pub mod error;
pub mod types;

pub use aggregator::{fetch_all_with_details, fetch_default_with_details, DEFAULT_LIMIT};
pub use client::PokeClient;
pub use error::ApiError;
pub use types::{
    AbilityEntry, NamedResource, Pokemon, PokemonPage, PokemonRef, SpriteSet, StatEntry, TypeSlot,
};
