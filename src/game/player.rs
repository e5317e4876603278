//! Player state: hand, card history, stand flag, and win counter.
//!
//! A player is a plain capability set; how it decides between hit and
//! stand is supplied separately as a [`Strategy`](crate::game::strategy::Strategy)
//! at seat construction. The automated dealer is just a player whose seat
//! carries the tree-driven strategy; there is no dealer subtype.

use std::fmt::{self, Display, Formatter};

use crate::collections::{LinkedList, Stack};
use crate::game::card::Card;

/// Hand score that wins outright and above which a hand busts.
pub const TARGET_SCORE: u32 = 21;

/// One seat's state at the table.
#[derive(Debug)]
pub struct Player {
    /// Display name; doubles as the registry key.
    name: String,

    /// Cards currently held, in the order received.
    hand: LinkedList<Card>,

    /// Every card this player has ever received, most recent on top.
    history: Stack<Card>,

    /// Whether the player has declined further cards this round.
    standing: bool,

    /// Rounds won across the whole session.
    wins: u32,
}

impl Player {
    /// Creates a player with an empty hand.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: LinkedList::new(),
            history: Stack::new(),
            standing: false,
            wins: 0,
        }
    }

    /// The player's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Adds a card to the hand and to the all-time history.
    pub fn receive(&mut self, card: Card) {
        self.hand.push_back(card);
        self.history.push(card);
    }

    /// Scores the hand by blackjack rules.
    ///
    /// Aces count 1 or 11, whichever benefits the hand: every non-ace is
    /// summed first, then each ace takes 11 while that still fits under
    /// the target and 1 afterwards.
    pub fn score(&self) -> u32 {
        let mut score = 0;
        let mut aces = 0;

        for card in self.hand.iter() {
            if card.is_ace() {
                aces += 1;
            } else {
                score += card.base_value();
            }
        }

        for _ in 0..aces {
            if score + 11 <= TARGET_SCORE {
                score += 11;
            } else {
                score += 1;
            }
        }

        score
    }

    /// Whether the hand went over the target score.
    pub fn is_busted(&self) -> bool {
        self.score() > TARGET_SCORE
    }

    /// Whether the hand is a natural: the target score from two cards.
    pub fn has_blackjack(&self) -> bool {
        self.hand.len() == 2 && self.score() == TARGET_SCORE
    }

    /// Declines further cards for this round.
    pub fn stand(&mut self) {
        self.standing = true;
    }

    /// Whether the player is standing.
    pub fn is_standing(&self) -> bool {
        self.standing
    }

    /// Credits a won round.
    pub fn record_win(&mut self) {
        self.wins += 1;
    }

    /// Rounds won so far.
    pub fn wins(&self) -> u32 {
        self.wins
    }

    /// The current hand.
    pub fn hand(&self) -> &LinkedList<Card> {
        &self.hand
    }

    /// Every card received across all rounds, most recent first.
    pub fn history(&self) -> &Stack<Card> {
        &self.history
    }

    /// Renders the hand as `A of Hearts, 10 of Spades`.
    pub fn hand_text(&self) -> String {
        let cards: Vec<String> = self.hand.iter().map(Card::to_string).collect();
        cards.join(", ")
    }

    /// Empties the hand and clears the stand flag for a new round.
    ///
    /// History and the win counter survive across rounds.
    pub fn clear_hand(&mut self) {
        while self.hand.pop_front().is_some() {}
        self.standing = false;
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} (score: {})", self.name, self.score())?;
        writeln!(f, "Hand: {}", self.hand_text())?;
        writeln!(
            f,
            "Status: {}",
            if self.standing { "standing" } else { "playing" }
        )?;
        write!(f, "Rounds won: {}", self.wins)
    }
}
