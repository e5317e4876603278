// Copyright (c) 2025 Veintiuna Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Deck of cards backed by the linked-list sequence.

use std::fmt::{self, Display, Formatter};

use rand::seq::SliceRandom;

use crate::collections::LinkedList;
use crate::game::card::{Card, Rank, Suit};

/// A deck of cards, drawn from the front.
///
/// The deck is a thin consumer of [`LinkedList`]: building appends the 52
/// standard cards in suit-major order, shuffling drains the chain into a
/// scratch buffer and re-appends it in shuffled order, and drawing pops the
/// front.
#[derive(Debug)]
pub struct Deck {
    cards: LinkedList<Card>,
}

impl Deck {
    /// Builds the standard 52-card deck, unshuffled.
    pub fn standard() -> Self {
        let mut cards = LinkedList::new();
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push_back(Card::new(rank, suit));
            }
        }
        Self { cards }
    }

    /// Builds a standard deck and shuffles it.
    pub fn shuffled() -> Self {
        let mut deck = Self::standard();
        deck.shuffle();
        deck
    }

    /// Shuffles the remaining cards in place.
    pub fn shuffle(&mut self) {
        let mut scratch = Vec::with_capacity(self.cards.len());
        while let Some(card) = self.cards.pop_front() {
            scratch.push(card);
        }

        scratch.shuffle(&mut rand::rng());

        for card in scratch {
            self.cards.push_back(card);
        }
    }

    /// Draws the top card.
    ///
    /// # Returns
    ///
    /// `Some(card)`, or `None` when the deck is exhausted; callers decide
    /// whether that ends a turn or the round.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    /// Number of cards left in the deck.
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Whether the deck is exhausted.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Display for Deck {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Deck [{} cards]", self.remaining())
    }
}
