//! Veintiuna Library
//!
//! This library contains the core components of the veintiuna console
//! blackjack game. Every aggregate in the game is backed by the crate's
//! own container library rather than the standard collections, so the
//! containers carry the interesting invariants and the game layer stays
//! thin.
//!
//! # Architecture
//!
//! * `collections`: the container library with the linked list, stack, queue,
//!   chained hash map, and the fixed dealer decision tree
//! * `game`: cards, deck, players, strategies, and the table loop
//! * `config`: file/environment configuration with validation
//! * `error`: per-domain error types aggregated at the crate root

// Re-export public modules
pub mod collections;
pub mod config;
pub mod error;
pub mod game;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for the card game.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library initialization function
pub fn init() -> error::VeintiunaResult<()> {
    // Initialize default configuration
    config::init_default_config()?;

    Ok(())
}
