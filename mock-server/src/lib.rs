//! In-memory stand-in for the two PokéAPI endpoint shapes.
//!
//! # Design
//! Serves `GET /pokemon?limit=n` (reference list) and `GET /pokemon/{id}`
//! (full record) from a fixed dataset. The dataset is configured up front
//! through [`Dex`] builders; nothing mutates it while serving. Failure
//! injection covers the cases the client crate's tests need: per-id broken
//! detail routes, and a list route that fails exactly once. Detail hits
//! are counted so tests can assert which calls were ever attempted.

use std::{
    collections::HashSet,
    sync::atomic::{AtomicBool, AtomicUsize, Ordering},
    sync::Arc,
};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pokemon {
    pub id: u32,
    pub name: String,
    pub height: u32,
    pub weight: u32,
    pub base_experience: u32,
    pub types: Vec<TypeSlot>,
    pub stats: Vec<StatEntry>,
    pub abilities: Vec<AbilityEntry>,
    pub sprites: SpriteSet,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub kind: Named,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatEntry {
    pub base_stat: u16,
    pub stat: Named,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct AbilityEntry {
    pub ability: Named,
    pub is_hidden: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SpriteSet {
    pub front_default: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub front_shiny: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Named {
    pub name: String,
}

#[derive(Serialize)]
struct PageResponse {
    count: usize,
    results: Vec<RefEntry>,
}

#[derive(Serialize)]
struct RefEntry {
    name: String,
    url: String,
}

#[derive(Deserialize)]
struct ListParams {
    limit: Option<usize>,
}

/// Dataset plus failure-injection switches for one mock instance.
pub struct Dex {
    base_url: String,
    pokemon: Vec<Pokemon>,
    broken: HashSet<u32>,
    fail_first_list: AtomicBool,
    detail_hits: AtomicUsize,
}

impl Dex {
    /// Dataset of the three Kanto starters, with reference URLs rooted at
    /// `base_url` (the address the server will be reachable on).
    pub fn new(base_url: &str) -> Self {
        Self::with_pokemon(base_url, starter_dataset())
    }

    pub fn with_pokemon(base_url: &str, pokemon: Vec<Pokemon>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            pokemon,
            broken: HashSet::new(),
            fail_first_list: AtomicBool::new(false),
            detail_hits: AtomicUsize::new(0),
        }
    }

    /// Make the detail route for `id` answer 500. The id still appears in
    /// the reference list.
    pub fn with_broken(mut self, id: u32) -> Self {
        self.broken.insert(id);
        self
    }

    /// Make the first list call answer 500; subsequent calls succeed.
    pub fn with_failing_first_list(self) -> Self {
        self.fail_first_list.store(true, Ordering::SeqCst);
        self
    }

    /// Number of detail requests served so far, successful or not.
    pub fn detail_hits(&self) -> usize {
        self.detail_hits.load(Ordering::SeqCst)
    }
}

/// A deterministic full record for custom test datasets.
pub fn sample_pokemon(id: u32, name: &str, types: &[&str]) -> Pokemon {
    Pokemon {
        id,
        name: name.to_string(),
        height: 7,
        weight: 69,
        base_experience: 64,
        types: types
            .iter()
            .map(|t| TypeSlot {
                kind: Named {
                    name: t.to_string(),
                },
            })
            .collect(),
        stats: ["hp", "attack", "defense", "special-attack", "special-defense", "speed"]
            .iter()
            .enumerate()
            .map(|(i, s)| StatEntry {
                base_stat: 45 + i as u16,
                stat: Named {
                    name: s.to_string(),
                },
            })
            .collect(),
        abilities: vec![AbilityEntry {
            ability: Named {
                name: "overgrow".to_string(),
            },
            is_hidden: false,
        }],
        sprites: SpriteSet {
            front_default: format!("https://sprites.test/{id}.png"),
            front_shiny: Some(format!("https://sprites.test/{id}-shiny.png")),
        },
    }
}

fn starter_dataset() -> Vec<Pokemon> {
    vec![
        sample_pokemon(1, "bulbasaur", &["grass", "poison"]),
        sample_pokemon(4, "charmander", &["fire"]),
        sample_pokemon(7, "squirtle", &["water"]),
    ]
}

pub fn app(dex: Arc<Dex>) -> Router {
    Router::new()
        .route("/pokemon", get(list_pokemon))
        .route("/pokemon/{id}", get(get_pokemon))
        .route("/pokemon/{id}/", get(get_pokemon))
        .with_state(dex)
}

pub async fn run(listener: TcpListener, dex: Arc<Dex>) -> Result<(), std::io::Error> {
    axum::serve(listener, app(dex)).await
}

async fn list_pokemon(
    State(dex): State<Arc<Dex>>,
    Query(params): Query<ListParams>,
) -> Result<Json<PageResponse>, StatusCode> {
    if dex.fail_first_list.swap(false, Ordering::SeqCst) {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }

    let limit = params.limit.unwrap_or(dex.pokemon.len());
    let results: Vec<RefEntry> = dex
        .pokemon
        .iter()
        .take(limit)
        .map(|p| RefEntry {
            name: p.name.clone(),
            url: format!("{}/pokemon/{}/", dex.base_url, p.id),
        })
        .collect();

    Ok(Json(PageResponse {
        count: dex.pokemon.len(),
        results,
    }))
}

async fn get_pokemon(
    State(dex): State<Arc<Dex>>,
    Path(id): Path<u32>,
) -> Result<Json<Pokemon>, StatusCode> {
    dex.detail_hits.fetch_add(1, Ordering::SeqCst);
    if dex.broken.contains(&id) {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    dex.pokemon
        .iter()
        .find(|p| p.id == id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}
