use log::debug;

use crate::card::Card;
use crate::error::ShowdownError;
use crate::result::{RoundOutcome, RoundResult};

use super::{Game, RoundState};

impl Game {
    /// Dealer plays out their hand.
    ///
    /// The dealer draws until reaching 17 or higher and then stops; busting
    /// past 21 ends the loop like any other total of 17 or more. The policy
    /// is fixed and never looks at the player's hand.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the dealer's turn, or the deck runs out
    /// while the dealer must draw.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, ShowdownError> {
        if self.state != RoundState::DealerTurn {
            return Err(ShowdownError::InvalidState);
        }

        let mut drawn = Vec::new();
        while self.dealer.hand().value() < 17 {
            let card = self.draw().ok_or(ShowdownError::NoCards)?;
            self.dealer.hand_mut().add_card(card);
            drawn.push(card);
        }

        debug!(
            "dealer stands on {} after drawing {} card(s)",
            self.dealer.hand().value(),
            drawn.len()
        );
        self.state = RoundState::RoundOver;
        Ok(drawn)
    }

    /// Settles the round against the player's balance.
    ///
    /// A player bust loses the escrowed bet outright. Otherwise a dealer
    /// bust or a lower dealer total pays double the bet, and a dealer total
    /// equal to or above the player's keeps it: a tie is a dealer win.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not over yet.
    pub fn settle(&mut self) -> Result<RoundResult, ShowdownError> {
        if self.state != RoundState::RoundOver {
            return Err(ShowdownError::InvalidState);
        }

        let bet = self.player.bet();
        let player_total = self.player.hand().value();
        let dealer_total = self.dealer.hand().value();
        let dealer_bust = dealer_total > 21;

        let outcome = if player_total > 21 {
            RoundOutcome::Lose
        } else if dealer_bust || dealer_total < player_total {
            RoundOutcome::Win
        } else {
            RoundOutcome::Lose
        };

        let payout = match outcome {
            RoundOutcome::Win => self.player.collect_win(),
            RoundOutcome::Lose => {
                self.player.forfeit_bet();
                0
            }
        };

        debug!("round settled: {outcome:?}, payout {payout}");
        self.state = RoundState::Idle;

        Ok(RoundResult {
            outcome,
            bet,
            payout,
            player_total,
            dealer_total,
            dealer_bust,
        })
    }
}
