//! A single-player blackjack session engine with a scriptable console.
//!
//! The crate provides a [`Game`] type that manages the round flow — the
//! initial deal, betting, the player's hit/stand decisions, the dealer's
//! draw-to-17 policy, and settlement — and a [`Session`] loop that drives
//! rounds over a [`Console`] until the player runs out of credits or walks
//! away.
//!
//! # Example
//!
//! ```no_run
//! use twentyone::{Game, GameOptions, Session, StdConsole};
//!
//! let game = Game::new(GameOptions::default(), 42);
//! let mut session = Session::new(game, StdConsole::new());
//! let _ = session.run();
//! ```

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod player;
pub mod result;
pub mod session;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use deck::Deck;
pub use error::{ActionError, BetError, DealError, SessionError, ShowdownError};
pub use game::{Game, RoundState};
pub use hand::Hand;
pub use options::GameOptions;
pub use player::{Dealer, Player};
pub use result::{RoundOutcome, RoundResult};
pub use session::{Console, Session, StdConsole};
