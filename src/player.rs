//! Participants at the table.

use crate::error::BetError;
use crate::hand::Hand;

/// The human player: a name, a credit balance, and the bet for the current
/// round.
///
/// Bets are escrowed: placing a bet moves the amount out of the balance
/// immediately, and only a win pays it back (doubled).
#[derive(Debug, Clone)]
pub struct Player {
    /// Display name.
    name: String,
    /// Credit balance, excluding any escrowed bet.
    balance: usize,
    /// Bet escrowed for the current round; 0 between rounds.
    bet: usize,
    /// Cards held this round.
    hand: Hand,
}

impl Player {
    /// Creates a player with the given name and starting balance.
    #[must_use]
    pub fn new(name: impl Into<String>, balance: usize) -> Self {
        Self {
            name: name.into(),
            balance,
            bet: 0,
            hand: Hand::new(),
        }
    }

    /// The player's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current credit balance.
    #[must_use]
    pub const fn balance(&self) -> usize {
        self.balance
    }

    /// Bet escrowed for the current round.
    #[must_use]
    pub const fn bet(&self) -> usize {
        self.bet
    }

    /// The player's hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    pub(crate) const fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    /// Escrows `amount` as the bet for the current round.
    ///
    /// On failure the balance and bet are left untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the amount is zero or exceeds the balance.
    pub fn place_bet(&mut self, amount: usize) -> Result<(), BetError> {
        if amount == 0 {
            return Err(BetError::ZeroBet);
        }
        if amount > self.balance {
            return Err(BetError::InsufficientFunds);
        }

        self.balance -= amount;
        self.bet = amount;
        Ok(())
    }

    /// Credits double the escrowed bet and clears it. Returns the payout.
    pub(crate) const fn collect_win(&mut self) -> usize {
        let payout = self.bet * 2;
        self.balance += payout;
        self.bet = 0;
        payout
    }

    /// Forfeits the escrowed bet.
    pub(crate) const fn forfeit_bet(&mut self) {
        self.bet = 0;
    }

    /// Replaces the hand with a fresh one for a new round.
    pub(crate) fn reset_hand(&mut self) {
        self.hand = Hand::new();
    }
}

/// The dealer: a hand and the house's unlimited funds.
///
/// The dealer never bets and has no balance to decrement, so the record
/// carries only the hand.
#[derive(Debug, Clone)]
pub struct Dealer {
    /// Cards held this round.
    hand: Hand,
}

impl Dealer {
    /// Creates a dealer with an empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { hand: Hand::new() }
    }

    /// The dealer's hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    pub(crate) const fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    /// Replaces the hand with a fresh one for a new round.
    pub(crate) fn reset_hand(&mut self) {
        self.hand = Hand::new();
    }
}

impl Default for Dealer {
    fn default() -> Self {
        Self::new()
    }
}
