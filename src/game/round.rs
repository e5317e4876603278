// Copyright (c) 2025 Veintiuna Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Per-round play log and outcome record.

use std::fmt::{self, Display, Formatter};

use tracing::debug;

use crate::collections::Stack;
use crate::game::card::Card;

/// One dealt card with the state it produced.
#[derive(Debug, Clone)]
pub struct PlayedCard {
    /// The card that was dealt.
    pub card: Card,

    /// Name of the seat that received it.
    pub player: String,

    /// The receiving hand's score after the card landed.
    pub score_after: u32,
}

impl Display for PlayedCard {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} drew {} (score {})",
            self.player, self.card, self.score_after
        )
    }
}

/// How one seat's round ended against the dealer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Somebody won the matchup.
    Win {
        /// Name of the winning seat.
        winner: String,
        /// Human-readable reason.
        reason: String,
    },
    /// The matchup was a push.
    Push {
        /// Human-readable reason.
        reason: String,
    },
}

impl Display for RoundOutcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            RoundOutcome::Win { winner, reason } => write!(f, "{winner} wins: {reason}"),
            RoundOutcome::Push { reason } => write!(f, "push: {reason}"),
        }
    }
}

/// The record of a single round.
///
/// Cards are logged onto a stack as they are dealt, so the most recent
/// play sits on top; the base-to-top rendering replays the round in the
/// order it happened.
#[derive(Debug)]
pub struct RoundRecord {
    /// Sequential round number, starting at 1.
    id: u32,

    /// Play log, most recent on top.
    plays: Stack<PlayedCard>,

    /// Per-seat outcomes, filled in at settlement.
    outcomes: Vec<RoundOutcome>,
}

impl RoundRecord {
    /// Creates an empty record for the given round number.
    pub fn new(id: u32) -> Self {
        Self {
            id,
            plays: Stack::new(),
            outcomes: Vec::new(),
        }
    }

    /// The round number.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Logs one dealt card.
    pub fn log_play(&mut self, card: Card, player: &str, score_after: u32) {
        let play = PlayedCard {
            card,
            player: player.to_string(),
            score_after,
        };
        debug!(round = self.id, "{play}");
        self.plays.push(play);
    }

    /// Records one seat's outcome.
    pub fn add_outcome(&mut self, outcome: RoundOutcome) {
        self.outcomes.push(outcome);
    }

    /// The play log, most recent play on top.
    pub fn plays(&self) -> &Stack<PlayedCard> {
        &self.plays
    }

    /// The per-seat outcomes, empty until settlement.
    pub fn outcomes(&self) -> &[RoundOutcome] {
        &self.outcomes
    }

    /// Replays the round's plays in the order they happened.
    pub fn history_text(&self) -> String {
        format!(
            "=== Round {} play history ===\n{}\n=== End of history ===",
            self.id,
            self.plays.render_reversed()
        )
    }
}

impl Display for RoundRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "==== Round {} ====", self.id)?;
        writeln!(f, "Cards dealt: {}", self.plays.len())?;
        if self.outcomes.is_empty() {
            write!(f, "Outcome: in progress")
        } else {
            let lines: Vec<String> = self.outcomes.iter().map(RoundOutcome::to_string).collect();
            write!(f, "Outcome: {}", lines.join("; "))
        }
    }
}
