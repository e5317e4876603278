//! Table orchestration: seats, turn order, round flow, and settlement.
//!
//! The table composes the containers: the player registry is a
//! [`ChainedHashMap`] keyed by name, the turn order is a [`Queue`] of
//! player handles rebuilt every round, the round records pile up on a
//! [`Stack`], and the deck rides on the linked list. The table itself adds
//! no data structure of its own.

use tracing::{debug, info, warn};

use crate::collections::{ChainedHashMap, Decision, Queue, Stack};
use crate::config::game::GameConfig;
use crate::error::game::{GameError, GameResult};
use crate::game::deck::Deck;
use crate::game::player::{Player, TARGET_SCORE};
use crate::game::round::{RoundOutcome, RoundRecord};
use crate::game::strategy::{Strategy, TreeStrategy};

/// The blackjack table.
pub struct Table {
    /// Deck for the current round, rebuilt and shuffled at every deal.
    deck: Deck,

    /// Name-keyed registry of every seat, the dealer included.
    registry: ChainedHashMap<String, Player>,

    /// Name-keyed decision strategies, one per seat.
    strategies: ChainedHashMap<String, Box<dyn Strategy>>,

    /// Turn order for the round in play.
    turn_order: Queue<String>,

    /// Non-dealer seats in registration order; the dealer always goes last.
    seat_names: Vec<String>,

    /// The dealer's registry key.
    dealer_name: String,

    /// Cards dealt to each seat at the opening of a round.
    opening_hand: u8,

    /// Rounds started so far.
    rounds_played: u32,

    /// Completed round records, most recent on top.
    records: Stack<RoundRecord>,
}

impl Table {
    /// Creates a table with only the dealer seated.
    ///
    /// The dealer plays the tree-driven strategy; further seats join
    /// through [`Table::add_player`].
    pub fn new(config: &GameConfig) -> GameResult<Self> {
        if config.dealer_name.trim().is_empty() {
            return Err(GameError::BlankPlayerName);
        }

        let mut table = Self {
            deck: Deck::standard(),
            registry: ChainedHashMap::new(),
            strategies: ChainedHashMap::new(),
            turn_order: Queue::new(),
            seat_names: Vec::new(),
            dealer_name: config.dealer_name.clone(),
            opening_hand: config.opening_hand,
            rounds_played: 0,
            records: Stack::new(),
        };

        table
            .registry
            .insert(config.dealer_name.clone(), Player::new(&config.dealer_name));
        table
            .strategies
            .insert(config.dealer_name.clone(), Box::new(TreeStrategy::new()));

        Ok(table)
    }

    /// Seats a player with the given strategy.
    ///
    /// # Errors
    ///
    /// * [`GameError::BlankPlayerName`] when the name is empty or whitespace
    /// * [`GameError::DuplicatePlayer`] when the name is already seated
    pub fn add_player(
        &mut self,
        name: impl Into<String>,
        strategy: Box<dyn Strategy>,
    ) -> GameResult<()> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(GameError::BlankPlayerName);
        }
        if self.registry.contains_key(&name) {
            return Err(GameError::DuplicatePlayer(name));
        }

        info!(player = %name, "seated at the table");
        self.registry.insert(name.clone(), Player::new(&name));
        self.strategies.insert(name.clone(), strategy);
        self.seat_names.push(name);
        Ok(())
    }

    /// Plays one full round: fresh shuffled deck, opening deal, player
    /// turns in seating order, the dealer last, then settlement.
    ///
    /// # Returns
    ///
    /// The completed round's record.
    pub fn play_round(&mut self) -> GameResult<&RoundRecord> {
        self.rounds_played += 1;
        let mut record = RoundRecord::new(self.rounds_played);
        info!(round = self.rounds_played, "starting round");

        self.deck = Deck::shuffled();

        // Seating order with the dealer at the back
        let mut names = self.seat_names.clone();
        names.push(self.dealer_name.clone());

        for name in &names {
            self.seat_mut(name)?.clear_hand();
        }

        // Opening deal, one card per pass
        for _ in 0..self.opening_hand {
            for name in &names {
                let card = self.deck.draw().ok_or(GameError::DeckExhausted)?;
                let player = self.seat_mut(name)?;
                player.receive(card);
                let score = player.score();
                record.log_play(card, name, score);
            }
        }

        // The dealer's first card is public knowledge
        let upcard = *self.seat(&self.dealer_name)?.hand().get(0)?;
        info!(upcard = %upcard, "dealer shows");

        // Rebuild the turn order
        while self.turn_order.dequeue().is_some() {}
        for name in &names {
            self.turn_order.enqueue(name.clone());
        }
        debug!(order = %self.turn_order, "turn order ready");

        // A natural blackjack ends the round before any turn is taken
        if self.any_natural() {
            info!("natural blackjack ends the round");
            self.settle_naturals(&mut record)?;
        } else {
            while let Some(name) = self.turn_order.dequeue() {
                self.play_turn(&name, &mut record)?;
            }
            self.settle(&mut record)?;
        }

        self.records.push(record);
        Ok(self
            .records
            .peek()
            .expect("the completed record was just pushed"))
    }

    /// Runs one seat's turn until it stands, busts, or the deck runs dry.
    fn play_turn(&mut self, name: &str, record: &mut RoundRecord) -> GameResult<()> {
        // A dealer with nobody left to beat keeps its opening hand
        if name == self.dealer_name && !self.any_live_challenger() {
            self.seat_mut(name)?.stand();
            debug!("every challenger busted; the dealer stands pat");
            return Ok(());
        }

        loop {
            // Field-level borrows: the strategy mutates while it reads the
            // player's state, so both lookups must go through the fields
            // directly.
            let decision = {
                let player = self
                    .registry
                    .get(name)
                    .ok_or_else(|| GameError::UnknownPlayer(name.to_string()))?;
                if player.is_standing() || player.is_busted() {
                    break;
                }
                let strategy = self
                    .strategies
                    .get_mut(name)
                    .ok_or_else(|| GameError::UnknownPlayer(name.to_string()))?;
                strategy.choose(player)?
            };

            match decision {
                Decision::Hit => match self.deck.draw() {
                    Some(card) => {
                        let player = self.seat_mut(name)?;
                        player.receive(card);
                        let score = player.score();
                        record.log_play(card, name, score);
                        if score > TARGET_SCORE {
                            info!(player = name, score, "went over the target");
                            break;
                        }
                    }
                    None => {
                        warn!(player = name, "deck exhausted, turn ends");
                        break;
                    }
                },
                Decision::Stand => {
                    let player = self.seat_mut(name)?;
                    player.stand();
                    info!(player = name, score = player.score(), "stands");
                    break;
                }
            }
        }

        Ok(())
    }

    /// Settles a round that ran to completion, one matchup per challenger.
    fn settle(&mut self, record: &mut RoundRecord) -> GameResult<()> {
        let dealer = self.seat(&self.dealer_name)?;
        let dealer_score = dealer.score();
        let dealer_busted = dealer.is_busted();

        for name in self.seat_names.clone() {
            let (score, busted) = {
                let challenger = self.seat(&name)?;
                (challenger.score(), challenger.is_busted())
            };

            let outcome = if busted {
                self.win_for_dealer(format!("{name} went over {TARGET_SCORE}"))?
            } else if dealer_busted {
                self.win_for(&name, format!("the dealer went over {TARGET_SCORE}"))?
            } else if score > dealer_score {
                self.win_for(&name, format!("{score} beats the dealer's {dealer_score}"))?
            } else if dealer_score > score {
                self.win_for_dealer(format!("{dealer_score} beats {name}'s {score}"))?
            } else {
                RoundOutcome::Push {
                    reason: format!("both hold {score}"),
                }
            };

            info!(round = record.id(), "{outcome}");
            record.add_outcome(outcome);
        }

        Ok(())
    }

    /// Settles a round cut short by a natural blackjack.
    fn settle_naturals(&mut self, record: &mut RoundRecord) -> GameResult<()> {
        let dealer_natural = self.seat(&self.dealer_name)?.has_blackjack();

        for name in self.seat_names.clone() {
            let challenger_natural = self.seat(&name)?.has_blackjack();

            let outcome = match (challenger_natural, dealer_natural) {
                (true, true) => RoundOutcome::Push {
                    reason: "both drew naturals".to_string(),
                },
                (true, false) => self.win_for(&name, "natural blackjack".to_string())?,
                (false, true) => {
                    self.win_for_dealer("the dealer's natural blackjack".to_string())?
                }
                (false, false) => RoundOutcome::Push {
                    reason: "round ended on another seat's natural".to_string(),
                },
            };

            info!(round = record.id(), "{outcome}");
            record.add_outcome(outcome);
        }

        Ok(())
    }

    /// Credits a matchup win to the named challenger.
    fn win_for(&mut self, name: &str, reason: String) -> GameResult<RoundOutcome> {
        self.seat_mut(name)?.record_win();
        Ok(RoundOutcome::Win {
            winner: name.to_string(),
            reason,
        })
    }

    /// Credits a matchup win to the dealer.
    fn win_for_dealer(&mut self, reason: String) -> GameResult<RoundOutcome> {
        let dealer = self.dealer_name.clone();
        self.seat_mut(&dealer)?.record_win();
        Ok(RoundOutcome::Win {
            winner: dealer,
            reason,
        })
    }

    /// Whether any seat holds a natural blackjack.
    fn any_natural(&self) -> bool {
        self.registry.iter().any(|(_, player)| player.has_blackjack())
    }

    /// Whether any challenger is still under the target score.
    fn any_live_challenger(&self) -> bool {
        self.registry
            .iter()
            .any(|(name, player)| name != &self.dealer_name && !player.is_busted())
    }

    /// Looks up a seat, treating absence as a programmer error surfaced to
    /// the caller.
    fn seat(&self, name: &str) -> GameResult<&Player> {
        self.registry
            .get(name)
            .ok_or_else(|| GameError::UnknownPlayer(name.to_string()))
    }

    fn seat_mut(&mut self, name: &str) -> GameResult<&mut Player> {
        self.registry
            .get_mut(name)
            .ok_or_else(|| GameError::UnknownPlayer(name.to_string()))
    }

    /// The name-keyed registry of seats.
    pub fn registry(&self) -> &ChainedHashMap<String, Player> {
        &self.registry
    }

    /// The dealer's name.
    pub fn dealer_name(&self) -> &str {
        &self.dealer_name
    }

    /// Rounds started so far.
    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// The most recently completed round, if any.
    pub fn last_round(&self) -> Option<&RoundRecord> {
        self.records.peek()
    }

    /// All completed round records, most recent on top.
    pub fn records(&self) -> &Stack<RoundRecord> {
        &self.records
    }

    /// Renders the session standings in seating order, dealer last.
    pub fn standings_text(&self) -> GameResult<String> {
        let mut names = self.seat_names.clone();
        names.push(self.dealer_name.clone());

        let mut lines = vec!["==== Final standings ====".to_string()];
        let mut best = 0;
        for name in &names {
            let player = self.seat(name)?;
            best = best.max(player.wins());
            lines.push(format!("{name}: {} rounds won", player.wins()));
        }

        let champions: Vec<&str> = {
            let mut champions = Vec::new();
            for name in &names {
                if self.seat(name)?.wins() == best {
                    champions.push(name.as_str());
                }
            }
            champions
        };
        if best == 0 {
            lines.push("Nobody has won a round yet".to_string());
        } else if champions.len() == 1 {
            lines.push(format!("Overall champion: {}", champions[0]));
        } else {
            lines.push(format!(
                "Tied at {best} rounds: {}",
                champions.join(", ")
            ));
        }

        Ok(lines.join("\n"))
    }
}
