// Copyright (c) 2025 Veintiuna Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Card model for the blackjack table.

use std::fmt::{self, Display, Formatter};

/// The four French suits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    /// All suits in deck-building order.
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    /// Full suit name.
    pub fn name(&self) -> &'static str {
        match self {
            Suit::Hearts => "Hearts",
            Suit::Diamonds => "Diamonds",
            Suit::Clubs => "Clubs",
            Suit::Spades => "Spades",
        }
    }

    /// One-letter abbreviation for compact rendering.
    pub fn initial(&self) -> char {
        match self {
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
            Suit::Spades => 'S',
        }
    }
}

impl Display for Suit {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The thirteen card ranks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    /// All ranks in deck-building order.
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Base blackjack value of the rank.
    ///
    /// An ace counts 1 here; the upgrade to 11 is hand logic, decided where
    /// the whole hand is visible. Face cards count 10.
    pub fn base_value(&self) -> u32 {
        match self {
            Rank::Ace => 1,
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => 10,
        }
    }

    /// Rank symbol as printed on the card.
    pub fn symbol(&self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

/// One playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Creates a card of the given rank and suit.
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// The card's rank.
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// The card's suit.
    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// Base blackjack value, see [`Rank::base_value`].
    pub fn base_value(&self) -> u32 {
        self.rank.base_value()
    }

    /// Whether the card is an ace.
    pub fn is_ace(&self) -> bool {
        self.rank == Rank::Ace
    }

    /// Compact rendering, e.g. `AH` for the ace of hearts.
    pub fn short(&self) -> String {
        format!("{}{}", self.rank.symbol(), self.suit.initial())
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank.symbol(), self.suit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(Rank::Ace => 1)]
    #[test_case(Rank::Two => 2)]
    #[test_case(Rank::Nine => 9)]
    #[test_case(Rank::Ten => 10)]
    #[test_case(Rank::Jack => 10)]
    #[test_case(Rank::Queen => 10)]
    #[test_case(Rank::King => 10)]
    fn test_base_value(rank: Rank) -> u32 {
        rank.base_value()
    }

    #[test]
    fn test_card_display_forms() {
        let card = Card::new(Rank::Ace, Suit::Hearts);
        assert_eq!(card.to_string(), "A of Hearts");
        assert_eq!(card.short(), "AH");
        assert!(card.is_ace());

        let card = Card::new(Rank::Ten, Suit::Spades);
        assert_eq!(card.to_string(), "10 of Spades");
        assert_eq!(card.short(), "10S");
        assert!(!card.is_ace());
    }

    #[test]
    fn test_rank_and_suit_tables_are_complete() {
        assert_eq!(Rank::ALL.len(), 13);
        assert_eq!(Suit::ALL.len(), 4);
    }
}
