use log::debug;

use crate::card::Card;
use crate::error::ActionError;

use super::{Game, RoundState};

impl Game {
    /// Player action: hit (draw one card).
    ///
    /// Reaching 21 ends the turn and hands play to the dealer. Busting ends
    /// the round outright; the dealer's turn is skipped entirely.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the deck is empty.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        if self.state != RoundState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }

        let card = self.draw().ok_or(ActionError::NoCards)?;
        self.player.hand_mut().add_card(card);

        let total = self.player.hand().value();
        debug!("player drew {card}, total {total}");

        if total > 21 {
            self.state = RoundState::RoundOver;
        } else if total == 21 {
            self.state = RoundState::DealerTurn;
        }
        Ok(card)
    }

    /// Player action: stand (lock in the current hand).
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        if self.state != RoundState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }

        debug!("player stands on {}", self.player.hand().value());
        self.state = RoundState::DealerTurn;
        Ok(())
    }
}
