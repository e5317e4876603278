//! Game error module.
//!
//! Failures raised by the table, its seats, and the console strategies.
//! Argument violations fail fast to the caller; recoverable conditions
//! (a missed lookup, an empty container) never appear here.

use thiserror::Error;

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;

/// Errors that can occur while running the game.
#[derive(Error, Debug)]
pub enum GameError {
    /// A seat was registered with an empty or whitespace-only name.
    #[error("player name cannot be blank")]
    BlankPlayerName,

    /// A seat was registered under a name that is already taken.
    #[error("player {0:?} is already seated")]
    DuplicatePlayer(String),

    /// A turn or settlement referred to a name missing from the registry.
    #[error("no player named {0:?} is seated")]
    UnknownPlayer(String),

    /// The deck ran out of cards during the opening deal.
    #[error("the deck ran out of cards while dealing")]
    DeckExhausted,

    /// The console prompt could not be shown or read.
    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    /// A hand was indexed outside its populated range.
    #[error("container error: {0}")]
    List(#[from] crate::collections::ListError),
}
