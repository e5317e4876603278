//! Pluggable hit/stand strategies.
//!
//! Every seat at the table carries a strategy chosen at construction: the
//! automated dealer consults the fixed decision tree, a human seat is
//! asked at the console. The table's turn loop is the same for both.

use dialoguer::Select;
use tracing::debug;

use crate::collections::{Decision, DecisionTree};
use crate::error::game::GameResult;
use crate::game::player::Player;

/// How a seat chooses between hit and stand.
pub trait Strategy {
    /// Chooses the next action for the given player.
    fn choose(&mut self, player: &Player) -> GameResult<Decision>;
}

/// Tree-driven strategy used by the automated dealer.
#[derive(Debug, Default)]
pub struct TreeStrategy {
    tree: DecisionTree,
}

impl TreeStrategy {
    /// Creates the strategy over a freshly built decision tree.
    pub fn new() -> Self {
        Self {
            tree: DecisionTree::new(),
        }
    }

    /// Read-only access to the underlying tree, for diagnostics.
    pub fn tree(&self) -> &DecisionTree {
        &self.tree
    }
}

impl Strategy for TreeStrategy {
    fn choose(&mut self, player: &Player) -> GameResult<Decision> {
        let score = player.score();
        let decision = self.tree.decide(score);
        let leaf = self.tree.leaf(decision);
        debug!(
            player = player.name(),
            score,
            decision = leaf.label(),
            "{}",
            leaf.description()
        );
        Ok(decision)
    }
}

/// Console-prompted strategy for a human seat.
#[derive(Debug, Default)]
pub struct PromptStrategy;

impl PromptStrategy {
    /// Creates the prompting strategy.
    pub fn new() -> Self {
        Self
    }
}

impl Strategy for PromptStrategy {
    fn choose(&mut self, player: &Player) -> GameResult<Decision> {
        println!(
            "\n{}, your hand: {} (score {})",
            player.name(),
            player.hand_text(),
            player.score()
        );

        let selection = Select::new()
            .with_prompt("What do you do?")
            .items(&["Hit", "Stand"])
            .default(0)
            .interact()?;

        Ok(if selection == 0 {
            Decision::Hit
        } else {
            Decision::Stand
        })
    }
}
