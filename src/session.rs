//! Interactive session driving a [`Game`] through a console.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use crate::error::{ActionError, BetError, SessionError, ShowdownError};
use crate::game::{Game, RoundState};
use crate::result::{RoundOutcome, RoundResult};

/// Minimal console abstraction for a session.
///
/// The session talks to the table through this trait only, so it can run
/// against a real terminal or a scripted stand-in with predetermined
/// responses.
pub trait Console {
    /// Prints `prompt` and reads one trimmed line of input.
    fn read_line(&mut self, prompt: &str) -> String;

    /// Prints one line of output.
    fn write_line(&mut self, line: &str);

    /// Dramatic pause before a card lands or the dealer reveals.
    ///
    /// Purely pacing; implementations may make this a no-op without changing
    /// game semantics.
    fn pause(&mut self);
}

/// Console backed by stdin/stdout.
#[derive(Debug)]
pub struct StdConsole {
    /// Pause duration between reveals.
    pacing: Duration,
}

impl StdConsole {
    /// Creates a console with the default one-second pacing.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pacing: Duration::from_secs(1),
        }
    }

    /// Sets the pause duration used between reveals.
    #[must_use]
    pub const fn with_pacing(mut self, pacing: Duration) -> Self {
        self.pacing = pacing;
        self
    }
}

impl Default for StdConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for StdConsole {
    fn read_line(&mut self, prompt: &str) -> String {
        print!("{prompt}");
        let _ = io::stdout().flush();

        let mut input = String::new();
        if io::stdin().read_line(&mut input).is_err() {
            return String::new();
        }
        input.trim().to_string()
    }

    fn write_line(&mut self, line: &str) {
        println!("{line}");
    }

    fn pause(&mut self) {
        thread::sleep(self.pacing);
    }
}

fn is_affirmative(input: &str) -> bool {
    matches!(input.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Drives rounds of a [`Game`] over a [`Console`] until the player runs out
/// of credits or declines another round.
#[derive(Debug)]
pub struct Session<C> {
    /// The game being played.
    game: Game,
    /// The console the session talks through.
    console: C,
}

impl<C: Console> Session<C> {
    /// Creates a session over the given game and console.
    pub fn new(game: Game, console: C) -> Self {
        Self { game, console }
    }

    /// The underlying game.
    #[must_use]
    pub const fn game(&self) -> &Game {
        &self.game
    }

    /// The console the session talks through.
    #[must_use]
    pub const fn console(&self) -> &C {
        &self.console
    }

    /// Runs the session loop.
    ///
    /// Plays rounds until the player's balance reaches zero or the player
    /// declines to continue. The balance is reported after every round.
    ///
    /// # Errors
    ///
    /// Propagates engine errors; with a full deck per round these do not
    /// occur in normal play.
    pub fn run(&mut self) -> Result<(), SessionError> {
        self.console.write_line("Welcome to Blackjack!");

        loop {
            self.play_round()?;

            let balance = self.game.player().balance();
            self.console
                .write_line(&format!("Your balance: {balance} credits"));

            if balance == 0 {
                self.console
                    .write_line("You have run out of credits. Game over.");
                break;
            }

            let again = self.console.read_line("Do you want to play again? (y/n): ");
            if !is_affirmative(&again) {
                self.console.write_line("Thanks for playing!");
                break;
            }
        }
        Ok(())
    }

    /// Plays a single round: deal, bet, player turn, dealer turn, settlement.
    ///
    /// Normally driven by [`run`](Self::run), but usable directly for
    /// scripted rounds.
    ///
    /// # Errors
    ///
    /// Propagates engine errors; invalid bet input is handled by
    /// re-prompting and never fails the round.
    pub fn play_round(&mut self) -> Result<RoundResult, SessionError> {
        self.game.begin_round()?;
        self.game.deal_initial()?;

        self.prompt_bet();
        self.player_turn()?;

        if self.game.state() == RoundState::DealerTurn {
            self.dealer_turn()?;
        }

        let result = self.game.settle()?;
        self.report_outcome(&result);
        Ok(result)
    }

    /// Prompts for a bet until a valid amount is escrowed.
    fn prompt_bet(&mut self) {
        loop {
            let prompt = format!(
                "Place your bet (minimum 1 credit, {} available): ",
                self.game.player().balance()
            );
            let input = self.console.read_line(&prompt);

            let Ok(amount) = input.trim().parse::<usize>() else {
                self.console
                    .write_line("Invalid input. Please enter a valid number.");
                continue;
            };

            match self.game.place_bet(amount) {
                Ok(()) => break,
                Err(BetError::InsufficientFunds) => {
                    self.console.write_line(&format!(
                        "{}, you don't have enough balance to place a bet of {amount}.",
                        self.game.player().name()
                    ));
                }
                Err(_) => {
                    self.console
                        .write_line("Invalid bet amount. Please enter a positive integer.");
                }
            }
        }
    }

    /// Runs the player's hit/stand loop until the turn ends.
    fn player_turn(&mut self) -> Result<(), ActionError> {
        loop {
            self.show_player_hand();

            let total = self.game.player().hand().value();
            if total == 21 {
                self.console.write_line("Blackjack!");
                break;
            }
            if total > 21 {
                self.console.write_line("Busted! You lose.");
                break;
            }

            let choice = self.console.read_line("Do you want to hit? (y/n): ");
            if is_affirmative(&choice) {
                self.console.pause();
                self.game.hit()?;
            } else {
                self.game.stand()?;
                break;
            }
        }
        Ok(())
    }

    /// Plays out and reveals the dealer's hand.
    fn dealer_turn(&mut self) -> Result<(), ShowdownError> {
        self.console.pause();
        self.game.dealer_play()?;

        self.console.write_line("\nDealer's Hand:");
        for card in self.game.dealer().hand().cards() {
            self.console.write_line(&card.to_string());
        }
        self.console
            .write_line(&format!("Total: {}", self.game.dealer().hand().value()));
        Ok(())
    }

    fn show_player_hand(&mut self) {
        self.console
            .write_line(&format!("\n{}'s Hand:", self.game.player().name()));
        for card in self.game.player().hand().cards() {
            self.console.write_line(&card.to_string());
        }
        self.console
            .write_line(&format!("Total: {}", self.game.player().hand().value()));
    }

    fn report_outcome(&mut self, result: &RoundResult) {
        // A player bust was already announced during the turn.
        if result.player_total > 21 {
            return;
        }

        if result.dealer_bust {
            self.console.write_line("Dealer busted! You win!");
        } else if result.outcome == RoundOutcome::Lose {
            self.console.write_line("Dealer wins!");
        } else {
            self.console.write_line("You win!");
        }
    }
}
