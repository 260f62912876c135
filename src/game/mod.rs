//! Game engine and round flow.

use std::collections::VecDeque;

use log::debug;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::DealError;
use crate::options::GameOptions;
use crate::player::{Dealer, Player};

mod actions;
mod bet;
mod dealer;
pub mod state;

pub use state::RoundState;

/// A single-player blackjack engine that manages one round at a time.
///
/// The game owns the deck, the player, and the dealer. A round moves through
/// [`RoundState`]s: a fresh shuffled deck and the initial deal, the bet, the
/// player's hit/stand decisions, the dealer's draw to 17, and settlement
/// against the player's balance. Use [`GameOptions`] to configure the
/// starting balance and player name.
#[derive(Debug)]
pub struct Game {
    /// Cards for the current round.
    deck: Deck,
    /// Prepared decks queued for upcoming rounds, used instead of shuffling.
    stacked: VecDeque<Deck>,
    /// The human player.
    player: Player,
    /// The dealer.
    dealer: Dealer,
    /// Current round state.
    state: RoundState,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// All shuffling draws from a generator seeded here, so a session is a
    /// pure function of the seed and the choices made.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use twentyone::{Game, GameOptions};
    ///
    /// let options = GameOptions::default();
    /// let game = Game::new(options, 42);
    /// let _ = game;
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Deck::new_shuffled(&mut rng);

        Self {
            deck,
            stacked: VecDeque::new(),
            player: Player::new(options.player_name, options.starting_balance),
            dealer: Dealer::new(),
            state: RoundState::Idle,
            rng,
        }
    }

    /// Begins a new round: a fresh deck and fresh hands.
    ///
    /// The deck is recreated every round; used cards never carry over. If a
    /// deck was queued with [`stack_deck`](Self::stack_deck) it is used as-is,
    /// otherwise a full shuffled deck is built.
    ///
    /// # Errors
    ///
    /// Returns an error unless the game is between rounds.
    pub fn begin_round(&mut self) -> Result<(), DealError> {
        if self.state != RoundState::Idle {
            return Err(DealError::InvalidState);
        }

        self.deck = match self.stacked.pop_front() {
            Some(deck) => deck,
            None => Deck::new_shuffled(&mut self.rng),
        };
        self.player.reset_hand();
        self.dealer.reset_hand();
        self.state = RoundState::Dealing;

        debug!("round started with {} cards", self.deck.len());
        Ok(())
    }

    /// Deals the initial cards: two to the player, then two to the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if a round has not been started or fewer than four
    /// cards remain.
    pub fn deal_initial(&mut self) -> Result<(), DealError> {
        if self.state != RoundState::Dealing {
            return Err(DealError::InvalidState);
        }
        if self.deck.len() < 4 {
            return Err(DealError::NotEnoughCards);
        }

        for _ in 0..2 {
            if let Some(card) = self.deck.deal() {
                self.player.hand_mut().add_card(card);
            }
        }
        for _ in 0..2 {
            if let Some(card) = self.deck.deal() {
                self.dealer.hand_mut().add_card(card);
            }
        }

        self.state = RoundState::Betting;
        debug!(
            "initial deal: player {}, dealer {}",
            self.player.hand().value(),
            self.dealer.hand().value()
        );
        Ok(())
    }

    /// Queues a prepared deck for an upcoming round.
    ///
    /// Each queued deck is consumed by one [`begin_round`](Self::begin_round)
    /// call, in order, instead of shuffling. Supports scripted rounds and
    /// deterministic replays.
    pub fn stack_deck(&mut self, deck: Deck) {
        self.stacked.push_back(deck);
    }

    /// Draws a card from the deck.
    pub(crate) fn draw(&mut self) -> Option<Card> {
        self.deck.deal()
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// The human player.
    #[must_use]
    pub const fn player(&self) -> &Player {
        &self.player
    }

    /// The dealer.
    #[must_use]
    pub const fn dealer(&self) -> &Dealer {
        &self.dealer
    }

    /// Number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }
}
