//! Terminal rendering of the three screens.
//!
//! # Design
//! `Terminal` implements [`Ui`](crate::flow::Ui) over stdin/stdout with
//! `console` styling. Layout follows the original screens: the overview is
//! a numbered card list with padded ids and type tags, the details screen
//! shows measurements in metric units, stat bars scaled to the 255
//! ceiling, abilities with a hidden marker, and sprite URLs with the shiny
//! row only when present.

use std::io::{self, BufRead, Write};

use console::style;
use pokedex_core::{ApiError, Pokemon};

use crate::flow::{OverviewAction, Ui};

/// Width of a fully filled stat bar.
const STAT_BAR_WIDTH: usize = 20;
/// Nominal ceiling of a base stat value.
const STAT_MAX: u16 = 255;

/// Interactive stdin/stdout implementation of the screen boundary.
#[derive(Debug, Default)]
pub struct Terminal;

impl Terminal {
    pub fn new() -> Self {
        Self
    }

    fn read_line(&self) -> String {
        let mut line = String::new();
        // EOF behaves like an empty line; the prompt loops decide what
        // that means.
        let _ = io::stdin().lock().read_line(&mut line);
        line.trim().to_string()
    }
}

impl Ui for Terminal {
    fn loading_started(&mut self) {
        println!("{}", style("Pokedex").bold().cyan());
        println!("Loading Pokémon...");
    }

    fn loading_failed(&mut self, error: &ApiError) {
        tracing::debug!(%error, "presenting retry prompt");
        println!();
        println!(
            "{}",
            style("Pokémon could not be loaded. Please check your internet connection.").red()
        );
        print!("Press Enter to retry... ");
        let _ = io::stdout().flush();
        self.read_line();
        println!("Retrying...");
    }

    fn overview(&mut self, collection: &[Pokemon]) -> OverviewAction {
        println!();
        println!("{}", style("Pokemon List").bold());
        println!("{} Pokémon found", collection.len());
        println!();
        for (row, pokemon) in collection.iter().enumerate() {
            println!(
                "{:>3}. {} {}  {}",
                row + 1,
                style(format_id(pokemon.id)).dim(),
                style(capitalize(&pokemon.name)).bold(),
                style(type_tags(pokemon)).cyan(),
            );
        }
        loop {
            println!();
            print!("Pick a Pokémon (1-{}), or q to quit: ", collection.len());
            let _ = io::stdout().flush();
            let input = self.read_line();
            if input.eq_ignore_ascii_case("q") {
                return OverviewAction::Quit;
            }
            match input.parse::<usize>() {
                Ok(n) if (1..=collection.len()).contains(&n) => {
                    return OverviewAction::Select(n - 1)
                }
                _ => println!("{}", style("Not a valid choice.").dim()),
            }
        }
    }

    fn details(&mut self, pokemon: &Pokemon) {
        println!();
        println!(
            "{} {}",
            style(capitalize(&pokemon.name)).bold().underlined(),
            style(format_id(pokemon.id)).dim(),
        );
        println!("{}", style(type_tags(pokemon)).cyan());
        println!();

        println!("{}", style("Basic Information").bold());
        println!("  Height:          {} m", format_tenths(pokemon.height));
        println!("  Weight:          {} kg", format_tenths(pokemon.weight));
        println!("  Base Experience: {}", pokemon.base_experience);
        println!();

        println!("{}", style("Stats").bold());
        for entry in &pokemon.stats {
            println!(
                "  {:<16} {} {}",
                capitalize(&entry.stat.name),
                stat_bar(entry.base_stat),
                entry.base_stat,
            );
        }
        println!();

        println!("{}", style("Abilities").bold());
        for entry in &pokemon.abilities {
            if entry.is_hidden {
                println!(
                    "  {} {}",
                    capitalize(&entry.ability.name),
                    style("(hidden)").dim()
                );
            } else {
                println!("  {}", capitalize(&entry.ability.name));
            }
        }
        println!();

        println!("{}", style("Images").bold());
        println!("  Normal: {}", pokemon.sprites.front_default);
        if let Some(shiny) = &pokemon.sprites.front_shiny {
            println!("  Shiny:  {shiny}");
        }

        println!();
        print!("Press Enter to go back... ");
        let _ = io::stdout().flush();
        self.read_line();
    }
}

/// `#NNN` with the id zero-padded to three digits.
fn format_id(id: u32) -> String {
    format!("#{id:03}")
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// The API reports height in decimeters and weight in hectograms; display
/// wants meters and kilograms with one decimal.
fn format_tenths(value: u32) -> String {
    format!("{}.{}", value / 10, value % 10)
}

fn type_tags(pokemon: &Pokemon) -> String {
    pokemon
        .types
        .iter()
        .map(|slot| capitalize(&slot.kind.name))
        .collect::<Vec<_>>()
        .join(" / ")
}

fn stat_bar(base_stat: u16) -> String {
    let filled =
        (usize::from(base_stat.min(STAT_MAX)) * STAT_BAR_WIDTH) / usize::from(STAT_MAX);
    let mut bar = "█".repeat(filled);
    bar.push_str(&"░".repeat(STAT_BAR_WIDTH - filled));
    bar
}
