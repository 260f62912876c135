//! Interactive console blackjack.

use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use twentyone::{Game, GameOptions, Session, StdConsole};

fn main() -> ExitCode {
    env_logger::init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let game = Game::new(GameOptions::default(), seed);
    let mut session = Session::new(game, StdConsole::new());

    if let Err(err) = session.run() {
        eprintln!("session error: {err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
