//! Presentation layer for the Pokédex client.
//!
//! # Overview
//! Drives the Loading → Overview → Details screen sequence over a
//! collection fetched once by `pokedex_core`. The flow logic lives behind
//! a small `Ui` trait so navigation can be tested without a terminal; the
//! terminal rendering is one implementation of that trait.

pub mod flow;
pub mod screens;

pub use flow::{browse, load, run, OverviewAction, Ui};
pub use screens::Terminal;
