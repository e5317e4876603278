//! Game configuration module.
//!
//! This module defines configuration related to the table itself: seat
//! names and the size of the opening deal.

use super::ConfigResult;
use super::Validate;
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Game configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Default name offered to the human player
    pub player_name: String,

    /// Name the dealer is registered under
    pub dealer_name: String,

    /// Cards dealt to every seat at the opening of a round
    pub opening_hand: u8,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_name: "Player".to_string(),
            dealer_name: "Dealer".to_string(),
            opening_hand: 2,
        }
    }
}

impl Validate for GameConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.player_name.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "player_name must not be blank".to_string(),
            ));
        }

        if self.dealer_name.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "dealer_name must not be blank".to_string(),
            ));
        }

        if self.player_name == self.dealer_name {
            return Err(ConfigError::ValidationError(
                "player_name and dealer_name must differ".to_string(),
            ));
        }

        if self.opening_hand == 0 {
            return Err(ConfigError::ValidationError(
                "opening_hand must be greater than 0".to_string(),
            ));
        }

        // A 52-card deck cannot open larger hands for a two-seat table
        if self.opening_hand > 10 {
            return Err(ConfigError::ValidationError(format!(
                "opening_hand {} is larger than a single deck supports",
                self.opening_hand
            )));
        }

        Ok(())
    }
}
