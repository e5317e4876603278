// Copyright (c) 2025 Veintiuna Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Dealer Decision Tree Implementation
//!
//! This module provides the fixed hit/stand heuristic the automated dealer
//! consults once per decision point. The heuristic itself is a pure
//! threshold function over the hand score; the tree is its read-only,
//! tree-shaped presentation: one evaluation root with exactly two leaves,
//! kept so diagnostics can render the branch topology and tests can
//! navigate it.
//!
//! The tree is independent of the other containers in this crate: it never
//! grows, shrinks, or stores game data.

use std::fmt::{self, Display, Formatter};

mod node;
pub use node::DecisionNode;

/// Hand score at which the dealer stops taking cards.
///
/// The boundary is inclusive on the stand side: a score of exactly 17
/// stands.
pub const STAND_THRESHOLD: u32 = 17;

/// The two possible dealer decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Request another card.
    Hit,
    /// Keep the current hand.
    Stand,
}

impl Display for Decision {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Hit => write!(f, "Hit"),
            Decision::Stand => write!(f, "Stand"),
        }
    }
}

/// The fixed three-node decision tree.
///
/// Built once at construction and never mutated. `decide` evaluates the
/// threshold; `leaf` and `root` expose the tree-shaped view of the same
/// rule for rendering and navigation.
#[derive(Debug)]
pub struct DecisionTree {
    root: DecisionNode,
}

impl DecisionTree {
    /// Builds the tree: an evaluation root with a "hit" leaf on the left
    /// and a "stand" leaf on the right.
    pub fn new() -> Self {
        let hit = DecisionNode::leaf(
            "Hit",
            format!("score < {STAND_THRESHOLD}"),
            "Aggressive play: request another card",
        );
        let stand = DecisionNode::leaf(
            "Stand",
            format!("score >= {STAND_THRESHOLD}"),
            "Conservative play: keep the current hand",
        );

        let root = DecisionNode {
            label: "Evaluate score",
            condition: format!("score >= {STAND_THRESHOLD}"),
            description: "Heuristic check of the current hand score",
            left: Some(Box::new(hit)),
            right: Some(Box::new(stand)),
        };

        Self { root }
    }

    /// Decides between hit and stand for the given score.
    ///
    /// Scores below the threshold hit; the threshold itself and everything
    /// above it stands.
    pub fn decide(&self, score: u32) -> Decision {
        let decision = if score < STAND_THRESHOLD {
            Decision::Hit
        } else {
            Decision::Stand
        };
        tracing::debug!(score, %decision, "dealer strategy consulted");
        decision
    }

    /// Returns the leaf node carrying the given decision's texts.
    pub fn leaf(&self, decision: Decision) -> &DecisionNode {
        let child = match decision {
            Decision::Hit => self.root.left(),
            Decision::Stand => self.root.right(),
        };
        child.expect("the tree is built with both leaves present")
    }

    /// Decides for the given score and returns the matching leaf.
    pub fn decide_leaf(&self, score: u32) -> &DecisionNode {
        self.leaf(self.decide(score))
    }

    /// Returns the read-only root of the tree.
    pub fn root(&self) -> &DecisionNode {
        &self.root
    }

    /// Renders the tree for diagnostics.
    ///
    /// Pre-order depth-first walk; each node prints its label and condition
    /// behind a connector glyph, with its description on a second line, and
    /// indentation grows with depth. The exact glyphs are cosmetic.
    pub fn depiction(&self) -> String {
        let mut out = String::from("Decision tree [dealer strategy]\n");
        out.push_str("====================================\n");
        render(&self.root, "", true, &mut out);
        out
    }
}

impl Default for DecisionTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders one node and its subtree. Recursion depth is bounded by the
/// fixed shape of the tree, not by data size.
fn render(node: &DecisionNode, prefix: &str, is_last: bool, out: &mut String) {
    let connector = if is_last { "└── " } else { "├── " };
    out.push_str(prefix);
    out.push_str(connector);
    out.push_str(node.label());
    out.push_str(&format!(" [{}]\n", node.condition()));
    out.push_str(prefix);
    out.push_str("    └── ");
    out.push_str(node.description());
    out.push('\n');

    let child_prefix = format!("{prefix}{}", if is_last { "    " } else { "│   " });
    if let Some(left) = node.left() {
        render(left, &child_prefix, node.right().is_none(), out);
    }
    if let Some(right) = node.right() {
        render(right, &child_prefix, true, out);
    }
}
