//! Error module for the card game.
//!
//! This module provides the error handling framework for the whole
//! application: explicit per-domain error types, proper propagation with
//! `?`, and aggregation into one crate-level enum at the boundary.
//!
//! Expected absences (a missing registry key, an empty stack or queue)
//! are `Option` sentinels on the container APIs and never appear here;
//! these types cover genuine failures only.

use thiserror::Error;

pub mod config;
pub mod game;

/// Result type alias used throughout the card game.
pub type VeintiunaResult<T> = Result<T, VeintiunaError>;

/// Core error enum for the card game.
#[derive(Error, Debug)]
pub enum VeintiunaError {
    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Errors surfaced by the table and its seats.
    #[error("Game error: {0}")]
    Game(#[from] game::GameError),

    /// Out-of-range access on the sequence container.
    #[error("Container error: {0}")]
    List(#[from] crate::collections::ListError),

    /// IO errors that may occur during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Custom error with message for cases where specific error types are
    /// not defined.
    #[error("{0}")]
    Custom(String),
}
