//! Hand-rolled containers for the card game.
//!
//! This module contains the small container library every other part of the
//! crate is built on: an ordered singly linked sequence, a LIFO stack, a
//! FIFO queue, a separate-chaining hash map with dynamic growth, and the
//! fixed decision tree behind the automated dealer.
//!
//! All containers are single-owner and synchronous: every operation is a
//! direct mutation through `&mut self` with no suspension point, no
//! internal locking, and no retries. A node or entry belongs to exactly one
//! container at a time, and containers own their nodes outright.

pub mod chained_map;
pub mod decision_tree;
pub mod linked_list;
pub mod queue;
pub mod stack;

// Re-export common containers
pub use chained_map::{ChainedHashMap, ChainedHashMapConfig};
pub use decision_tree::{Decision, DecisionNode, DecisionTree, STAND_THRESHOLD};
pub use linked_list::{LinkedList, ListError, ListResult};
pub use queue::Queue;
pub use stack::Stack;
