//! Deck construction and dealing.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Suit};

/// An ordered pile of cards, dealt one at a time from the top.
///
/// A round always starts from a full 52-card deck; the deck is never reused
/// across rounds.
#[derive(Debug, Clone)]
pub struct Deck {
    /// Remaining cards. The top of the deck is the end of the vector.
    cards: Vec<Card>,
}

impl Deck {
    /// Builds the full 52-card deck and shuffles it with `rng`.
    #[must_use]
    pub fn new_shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades] {
            for rank in 1..=13 {
                cards.push(Card::new(suit, rank));
            }
        }

        cards.shuffle(rng);
        Self { cards }
    }

    /// Builds a deck with an explicit card order.
    ///
    /// Cards are dealt from the end of `cards`, so the last element is the
    /// first card dealt. Useful for scripted rounds and deterministic tests.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Removes and returns the top card.
    ///
    /// Returns `None` when the deck is empty. Running dry is not a fault:
    /// callers decide whether a missing card ends the operation.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Number of cards left in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
