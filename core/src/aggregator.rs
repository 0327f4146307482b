//! Fan-out/fan-in aggregation of the reference list into full records.
//!
//! # Design
//! One list call, then one detail call per reference, all issued
//! concurrently with no batching and no cap on in-flight requests. The
//! join is `try_join_all`: order-preserving on success, first-error-wins
//! on failure, and already-completed detail results are discarded when any
//! sibling fails — no partial collection ever reaches the caller. The
//! unbounded fan-out is acceptable only because callers fetch a small
//! fixed default.

use futures::future::try_join_all;
use tracing::{debug, warn};

use crate::client::PokeClient;
use crate::error::ApiError;
use crate::types::Pokemon;

/// Number of records fetched when the caller does not choose a limit.
pub const DEFAULT_LIMIT: u32 = 20;

/// Fetch the first `limit` references and resolve every one of them to a
/// full record, concurrently.
///
/// All-or-nothing: a list failure propagates before any detail call is
/// made, and any single detail failure fails the whole aggregation. On
/// success the collection matches the reference list in length and order.
pub async fn fetch_all_with_details(
    client: &PokeClient,
    limit: u32,
) -> Result<Vec<Pokemon>, ApiError> {
    let refs = client.list_pokemon(limit).await?;
    debug!(count = refs.len(), "resolving references to full records");

    let details = refs.iter().map(|r| client.get_pokemon_by_url(&r.url));
    match try_join_all(details).await {
        Ok(collection) => Ok(collection),
        Err(err) => {
            warn!(%err, "aggregation failed, discarding partial results");
            Err(err)
        }
    }
}

/// [`fetch_all_with_details`] with the standard limit of [`DEFAULT_LIMIT`].
pub async fn fetch_default_with_details(client: &PokeClient) -> Result<Vec<Pokemon>, ApiError> {
    fetch_all_with_details(client, DEFAULT_LIMIT).await
}
