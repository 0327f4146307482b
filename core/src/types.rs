//! Domain DTOs for the PokéAPI client.
//!
//! # Design
//! These types mirror the two PokéAPI response shapes the client consumes
//! but are defined independently from the mock-server crate. Serde ignores
//! unknown fields by default, so extra top-level fields in the list
//! response (`count`, `next`, `previous`) and the many detail fields this
//! client does not display are dropped silently. Integration tests catch
//! any schema drift between the two crates.

use serde::{Deserialize, Serialize};

/// A lightweight pointer to a not-yet-fetched detail record, as returned
/// by the list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PokemonRef {
    pub name: String,
    pub url: String,
}

/// Envelope of the list endpoint. Only `results` matters to the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonPage {
    pub results: Vec<PokemonRef>,
}

/// A fully resolved creature record. Immutable once decoded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
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

/// One elemental category of a record. Slot order is display-significant:
/// the primary type comes first.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

/// One named numeric attribute; six expected per record, `base_stat` in
/// the nominal 0..=255 range.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatEntry {
    pub base_stat: u16,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AbilityEntry {
    pub ability: NamedResource,
    pub is_hidden: bool,
}

/// Sprite URLs. `front_shiny` is optional in the upstream schema; a
/// missing or null value decodes to `None` rather than failing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SpriteSet {
    pub front_default: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub front_shiny: Option<String>,
}

/// The `{ "name": ... }` wrapper PokéAPI uses for nested resources.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NamedResource {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_decodes_ignoring_extra_top_level_fields() {
        let body = r#"{
            "count": 1302,
            "next": "https://pokeapi.co/api/v2/pokemon?offset=20&limit=20",
            "previous": null,
            "results": [{"name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/"}]
        }"#;
        let page: PokemonPage = serde_json::from_str(body).unwrap();
        assert_eq!(page.results.len(), 1);
        assert_eq!(page.results[0].name, "bulbasaur");
        assert_eq!(page.results[0].url, "https://pokeapi.co/api/v2/pokemon/1/");
    }

    #[test]
    fn pokemon_decodes_with_type_order_preserved() {
        let body = r#"{
            "id": 1,
            "name": "bulbasaur",
            "height": 7,
            "weight": 69,
            "base_experience": 64,
            "types": [
                {"slot": 1, "type": {"name": "grass", "url": "https://pokeapi.co/api/v2/type/12/"}},
                {"slot": 2, "type": {"name": "poison", "url": "https://pokeapi.co/api/v2/type/4/"}}
            ],
            "stats": [
                {"base_stat": 45, "effort": 0, "stat": {"name": "hp"}},
                {"base_stat": 49, "effort": 0, "stat": {"name": "attack"}}
            ],
            "abilities": [
                {"ability": {"name": "overgrow"}, "is_hidden": false, "slot": 1},
                {"ability": {"name": "chlorophyll"}, "is_hidden": true, "slot": 3}
            ],
            "sprites": {"front_default": "https://img/1.png", "front_shiny": "https://img/1s.png"}
        }"#;
        let p: Pokemon = serde_json::from_str(body).unwrap();
        assert_eq!(p.id, 1);
        assert_eq!(p.name, "bulbasaur");
        assert_eq!(p.types[0].kind.name, "grass");
        assert_eq!(p.types[1].kind.name, "poison");
        assert_eq!(p.stats[0].stat.name, "hp");
        assert_eq!(p.stats[0].base_stat, 45);
        assert!(p.abilities[1].is_hidden);
        assert_eq!(p.sprites.front_shiny.as_deref(), Some("https://img/1s.png"));
    }

    #[test]
    fn sprites_missing_shiny_decodes_to_none() {
        let sprites: SpriteSet =
            serde_json::from_str(r#"{"front_default": "https://img/1.png"}"#).unwrap();
        assert_eq!(sprites.front_default, "https://img/1.png");
        assert!(sprites.front_shiny.is_none());
    }

    #[test]
    fn sprites_null_shiny_decodes_to_none() {
        let sprites: SpriteSet =
            serde_json::from_str(r#"{"front_default": "https://img/1.png", "front_shiny": null}"#)
                .unwrap();
        assert!(sprites.front_shiny.is_none());
    }

    #[test]
    fn pokemon_rejects_missing_required_fields() {
        let result: Result<Pokemon, _> = serde_json::from_str(r#"{"id": 1, "name": "bulbasaur"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn pokemon_roundtrips_through_json() {
        let p = Pokemon {
            id: 25,
            name: "pikachu".to_string(),
            height: 4,
            weight: 60,
            base_experience: 112,
            types: vec![TypeSlot {
                kind: NamedResource {
                    name: "electric".to_string(),
                },
            }],
            stats: vec![StatEntry {
                base_stat: 35,
                stat: NamedResource {
                    name: "hp".to_string(),
                },
            }],
            abilities: vec![AbilityEntry {
                ability: NamedResource {
                    name: "static".to_string(),
                },
                is_hidden: false,
            }],
            sprites: SpriteSet {
                front_default: "https://img/25.png".to_string(),
                front_shiny: None,
            },
        };
        let json = serde_json::to_string(&p).unwrap();
        let back: Pokemon = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }
}
