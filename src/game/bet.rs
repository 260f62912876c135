use log::debug;

use crate::error::BetError;

use super::{Game, RoundState};

impl Game {
    /// Places the player's bet for the round.
    ///
    /// The amount is escrowed immediately and the bet is fixed for the rest
    /// of the round. Betting ends the dealing phase: play moves to the
    /// player's turn, or straight to the dealer's turn when the dealt hand
    /// is already 21.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not accepting bets, the amount is
    /// zero, or the amount exceeds the player's balance.
    pub fn place_bet(&mut self, amount: usize) -> Result<(), BetError> {
        if self.state != RoundState::Betting {
            return Err(BetError::InvalidState);
        }

        self.player.place_bet(amount)?;
        debug!("bet placed: {amount}");

        self.state = if self.player.hand().value() == 21 {
            RoundState::DealerTurn
        } else {
            RoundState::PlayerTurn
        };
        Ok(())
    }
}
