//! The three-screen navigation flow: Loading, Overview, Details.
//!
//! # Design
//! The flow is a plain loop over an abstract [`Ui`] so the screen sequence
//! can be tested with a scripted implementation. Loading owns the only
//! network access: it invokes the aggregator and, on failure, blocks on
//! the UI until the user asks for a retry, then starts over from scratch.
//! Overview and Details only ever see the already-fetched collection;
//! backing out of Details returns to Overview with the collection
//! untouched.

use pokedex_core::{fetch_all_with_details, ApiError, PokeClient, Pokemon};
use tracing::{info, warn};

/// What the user chose on the overview screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverviewAction {
    /// Inspect the record at this collection index.
    Select(usize),
    /// Leave the application.
    Quit,
}

/// The screen boundary the flow drives.
///
/// Implementations render; the flow decides what comes next. Blocking
/// methods (`loading_failed`, `details`) return once the user navigates
/// on.
pub trait Ui {
    /// The Loading screen became active.
    fn loading_started(&mut self);

    /// Aggregation failed. Returns when the user chooses Retry — there is
    /// no other way out of the Loading screen.
    fn loading_failed(&mut self, error: &ApiError);

    /// Show the collection; returns the user's navigation choice.
    fn overview(&mut self, collection: &[Pokemon]) -> OverviewAction;

    /// Show one record; returns when the user navigates back.
    fn details(&mut self, pokemon: &Pokemon);
}

/// Run the whole flow: load the collection, then browse it until the user
/// quits.
pub async fn run(client: &PokeClient, limit: u32, ui: &mut impl Ui) {
    let collection = load(client, limit, ui).await;
    browse(&collection, ui);
}

/// The Loading state. Loops aggregation attempts until one succeeds; every
/// retry starts from scratch (list call included).
pub async fn load(client: &PokeClient, limit: u32, ui: &mut impl Ui) -> Vec<Pokemon> {
    ui.loading_started();
    loop {
        match fetch_all_with_details(client, limit).await {
            Ok(collection) => {
                info!(count = collection.len(), "collection loaded");
                return collection;
            }
            Err(err) => {
                warn!(%err, "loading failed, waiting for retry");
                ui.loading_failed(&err);
            }
        }
    }
}

/// The Overview ⇄ Details loop. Selections out of range are ignored and
/// land back on Overview.
pub fn browse(collection: &[Pokemon], ui: &mut impl Ui) {
    loop {
        match ui.overview(collection) {
            OverviewAction::Select(index) => {
                if let Some(pokemon) = collection.get(index) {
                    ui.details(pokemon);
                }
            }
            OverviewAction::Quit => return,
        }
    }
}
