//! Session loop tests with a scripted console.

use std::collections::VecDeque;

use twentyone::{Card, Console, Deck, Game, GameOptions, RoundOutcome, Session, Suit};

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

/// Builds a deck that deals `draws` in order: player's two cards first, then
/// the dealer's two, then any later draws.
fn stacked_deck(draws: &[Card]) -> Deck {
    let mut cards = draws.to_vec();
    cards.reverse();
    Deck::from_cards(cards)
}

/// Console stand-in with predetermined responses and a transcript of
/// everything printed or prompted.
struct ScriptedConsole {
    responses: VecDeque<String>,
    transcript: Vec<String>,
}

impl ScriptedConsole {
    fn new(responses: &[&str]) -> Self {
        Self {
            responses: responses.iter().map(|s| (*s).to_string()).collect(),
            transcript: Vec::new(),
        }
    }

    fn saw(&self, needle: &str) -> bool {
        self.transcript.iter().any(|line| line.contains(needle))
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> String {
        self.transcript.push(prompt.to_string());
        self.responses.pop_front().expect("script ran out of responses")
    }

    fn write_line(&mut self, line: &str) {
        self.transcript.push(line.to_string());
    }

    fn pause(&mut self) {}
}

/// Player 20 vs dealer 18: a clean win when the player stands.
fn winning_deck() -> Deck {
    stacked_deck(&[
        card(Suit::Hearts, 13),  // player
        card(Suit::Clubs, 12),   // player
        card(Suit::Spades, 10),  // dealer
        card(Suit::Diamonds, 8), // dealer
    ])
}

#[test]
fn full_round_win_then_quit() {
    let mut game = Game::new(GameOptions::default(), 1);
    game.stack_deck(winning_deck());

    let mut session = Session::new(game, ScriptedConsole::new(&["10", "n", "n"]));
    session.run().unwrap();

    assert_eq!(session.game().player().balance(), 110);
    let console = session.console();
    assert!(console.saw("Welcome to Blackjack!"));
    assert!(console.saw("Player's Hand:"));
    assert!(console.saw("King of Hearts"));
    assert!(console.saw("Total: 20"));
    assert!(console.saw("Dealer's Hand:"));
    assert!(console.saw("Total: 18"));
    assert!(console.saw("You win!"));
    assert!(console.saw("Your balance: 110 credits"));
    assert!(console.saw("Thanks for playing!"));
}

#[test]
fn bet_prompt_retries_until_valid() {
    let mut game = Game::new(GameOptions::default(), 2);
    game.stack_deck(winning_deck());

    let script = ["credits", "0", "500", "10", "n", "n"];
    let mut session = Session::new(game, ScriptedConsole::new(&script));
    session.run().unwrap();

    let console = session.console();
    assert!(console.saw("Invalid input. Please enter a valid number."));
    assert!(console.saw("Invalid bet amount. Please enter a positive integer."));
    assert!(console.saw("Player, you don't have enough balance to place a bet of 500."));
    assert_eq!(session.game().player().balance(), 110);
}

#[test]
fn losing_the_last_credit_ends_the_session() {
    let mut game = Game::new(GameOptions::default().with_starting_balance(10), 3);
    game.stack_deck(stacked_deck(&[
        card(Suit::Hearts, 10),  // player
        card(Suit::Clubs, 6),    // player
        card(Suit::Spades, 10),  // dealer
        card(Suit::Diamonds, 9), // dealer
    ]));

    // No play-again answer is scripted: the session must not ask for one.
    let mut session = Session::new(game, ScriptedConsole::new(&["10", "n"]));
    session.run().unwrap();

    assert_eq!(session.game().player().balance(), 0);
    let console = session.console();
    assert!(console.saw("Dealer wins!"));
    assert!(console.saw("Your balance: 0 credits"));
    assert!(console.saw("You have run out of credits. Game over."));
    assert!(!console.saw("Do you want to play again?"));
}

#[test]
fn bust_round_never_reveals_the_dealer() {
    let mut game = Game::new(GameOptions::default(), 4);
    game.stack_deck(stacked_deck(&[
        card(Suit::Hearts, 10),  // player
        card(Suit::Clubs, 6),    // player
        card(Suit::Spades, 5),   // dealer
        card(Suit::Diamonds, 9), // dealer
        card(Suit::Hearts, 10),  // player hit
    ]));

    let mut session = Session::new(game, ScriptedConsole::new(&["10", "y", "n"]));
    session.run().unwrap();

    assert_eq!(session.game().player().balance(), 90);
    let console = session.console();
    assert!(console.saw("Busted! You lose."));
    assert!(console.saw("Total: 26"));
    assert!(!console.saw("Dealer's Hand:"));
    assert!(console.saw("Your balance: 90 credits"));
}

#[test]
fn dealt_blackjack_skips_the_hit_prompt() {
    let mut game = Game::new(GameOptions::default(), 5);
    game.stack_deck(stacked_deck(&[
        card(Suit::Spades, 1),   // player
        card(Suit::Hearts, 13),  // player
        card(Suit::Clubs, 10),   // dealer
        card(Suit::Diamonds, 7), // dealer
    ]));

    let mut session = Session::new(game, ScriptedConsole::new(&["10", "n"]));
    session.run().unwrap();

    let console = session.console();
    assert!(console.saw("Blackjack!"));
    assert!(!console.saw("Do you want to hit?"));
    assert!(console.saw("You win!"));
    assert_eq!(session.game().player().balance(), 110);
}

#[test]
fn session_plays_multiple_rounds() {
    let mut game = Game::new(GameOptions::default(), 6);
    game.stack_deck(winning_deck());
    game.stack_deck(stacked_deck(&[
        card(Suit::Hearts, 10),  // player
        card(Suit::Clubs, 8),    // player
        card(Suit::Spades, 10),  // dealer
        card(Suit::Diamonds, 9), // dealer
    ]));

    let script = ["10", "n", "y", "10", "n", "n"];
    let mut session = Session::new(game, ScriptedConsole::new(&script));
    session.run().unwrap();

    // Round one wins 10, round two loses 10.
    assert_eq!(session.game().player().balance(), 100);
    let console = session.console();
    assert!(console.saw("You win!"));
    assert!(console.saw("Dealer wins!"));
    assert!(console.saw("Your balance: 110 credits"));
    assert!(console.saw("Your balance: 100 credits"));
}

#[test]
fn play_round_reports_the_settlement() {
    let mut game = Game::new(GameOptions::default(), 7);
    game.stack_deck(winning_deck());

    let mut session = Session::new(game, ScriptedConsole::new(&["25", "n"]));
    let result = session.play_round().unwrap();

    assert_eq!(result.outcome, RoundOutcome::Win);
    assert_eq!(result.bet, 25);
    assert_eq!(result.payout, 50);
    assert_eq!(result.player_total, 20);
    assert_eq!(result.dealer_total, 18);
    assert_eq!(session.game().player().balance(), 125);
}
