//! Flow tests against the live mock server: loading, the manual retry
//! loop, and the hand-off of the loaded collection into browsing.

use std::collections::VecDeque;
use std::sync::Arc;

use mock_server::Dex;
use pokedex_cli::{flow, OverviewAction, Ui};
use pokedex_core::{ApiError, PokeClient, Pokemon};
use tokio::net::TcpListener;

async fn start(make_dex: impl FnOnce(&str) -> Dex) -> (PokeClient, Arc<Dex>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    let dex = Arc::new(make_dex(&base_url));

    let serving = dex.clone();
    tokio::spawn(async move { mock_server::run(listener, serving).await });

    (PokeClient::new(&base_url), dex)
}

/// A `Ui` that retries automatically and replays a fixed action script.
#[derive(Default)]
struct ScriptedUi {
    actions: VecDeque<OverviewAction>,
    loading_screens: usize,
    failures: usize,
    collection_sizes: Vec<usize>,
    visited: Vec<String>,
}

impl ScriptedUi {
    fn with_actions(actions: Vec<OverviewAction>) -> Self {
        Self {
            actions: actions.into(),
            ..Self::default()
        }
    }
}

impl Ui for ScriptedUi {
    fn loading_started(&mut self) {
        self.loading_screens += 1;
    }

    fn loading_failed(&mut self, _error: &ApiError) {
        // Returning is the retry choice; there is no other exit.
        self.failures += 1;
    }

    fn overview(&mut self, collection: &[Pokemon]) -> OverviewAction {
        self.collection_sizes.push(collection.len());
        self.actions.pop_front().unwrap_or(OverviewAction::Quit)
    }

    fn details(&mut self, pokemon: &Pokemon) {
        self.visited.push(pokemon.name.clone());
    }
}

#[tokio::test]
async fn successful_load_goes_straight_to_overview() {
    let (client, _dex) = start(Dex::new).await;
    let mut ui = ScriptedUi::with_actions(vec![OverviewAction::Quit]);

    flow::run(&client, 3, &mut ui).await;

    assert_eq!(ui.loading_screens, 1);
    assert_eq!(ui.failures, 0);
    assert_eq!(ui.collection_sizes, vec![3]);
}

#[tokio::test]
async fn failed_load_retries_from_scratch_until_success() {
    let (client, _dex) = start(|base| Dex::new(base).with_failing_first_list()).await;
    let mut ui = ScriptedUi::with_actions(vec![OverviewAction::Quit]);

    flow::run(&client, 3, &mut ui).await;

    // One failure surfaced, then the retry succeeded; the overview never
    // saw a partial collection.
    assert_eq!(ui.failures, 1);
    assert_eq!(ui.collection_sizes, vec![3]);
}

#[tokio::test]
async fn details_shows_the_selected_record_without_refetching() {
    let (client, dex) = start(Dex::new).await;
    let mut ui = ScriptedUi::with_actions(vec![
        OverviewAction::Select(2),
        OverviewAction::Select(0),
        OverviewAction::Quit,
    ]);

    flow::run(&client, 3, &mut ui).await;

    assert_eq!(ui.visited, vec!["squirtle", "bulbasaur"]);
    // Back-navigation lands on the same untouched collection each time,
    // and the server saw only the three aggregation-time detail calls.
    assert_eq!(ui.collection_sizes, vec![3, 3, 3]);
    assert_eq!(dex.detail_hits(), 3);
}
