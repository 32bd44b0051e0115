//! Interactive Twenty-One in the terminal.

use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use twenty_one::{Game, GameOptions, Terminal};

fn main() -> ExitCode {
    env_logger::init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    log::debug!("starting with seed {seed}");

    let mut game = Game::new(GameOptions::default(), seed, Terminal::new());
    match game.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("twenty-one: {err}");
            ExitCode::FAILURE
        }
    }
}
