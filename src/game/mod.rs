//! Game flow: match orchestration and turn control.

use alloc::string::String;
use core::time::Duration;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::console::Console;
use crate::error::PlayError;
use crate::input::wants_restart;
use crate::options::GameOptions;
use crate::render;
use crate::result::Winner;
use crate::scoreboard::{BestOf, Scoreboard};
use crate::table::Table;

mod round;
mod turn;

/// A Twenty-One session against the computer dealer.
///
/// The game owns its options, the random number generator used to shuffle
/// each round's deck, and the console it plays on.
pub struct Game<C> {
    /// Game options.
    pub options: GameOptions,
    /// Random number generator.
    rng: ChaCha8Rng,
    /// Terminal the game is played on.
    console: C,
}

impl<C: Console> Game<C> {
    /// Creates a new game with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use twenty_one::{Game, GameOptions, Scripted};
    ///
    /// let console = Scripted::new(["", "3"]);
    /// let game = Game::new(GameOptions::default().without_delays(), 42, console);
    /// let _ = game;
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64, console: C) -> Self {
        Self {
            options,
            rng: ChaCha8Rng::seed_from_u64(seed),
            console,
        }
    }

    /// Returns the console.
    #[must_use]
    pub const fn console(&self) -> &C {
        &self.console
    }

    /// Consumes the game and returns its console.
    #[must_use]
    pub fn into_console(self) -> C {
        self.console
    }

    /// Runs matches until the player declines a restart.
    ///
    /// Each match starts from scratch: welcome screen, round-count selection
    /// and a new scoreboard.
    ///
    /// # Errors
    ///
    /// Returns an error if the console fails or input ends.
    pub fn run(&mut self) -> Result<(), PlayError> {
        loop {
            if self.options.show_rules {
                self.welcome()?;
            }
            let best_of = self.select_best_of()?;
            let scoreboard = self.play_match(best_of)?;
            self.announce_grand_winner(&scoreboard)?;

            self.say("Restart game? (y/n)")?;
            let answer = self.ask()?;
            if !wants_restart(&answer) {
                break;
            }
            self.reply("Ok, restarting game...")?;
        }

        self.console
            .write_line("Thanks for playing Twenty-One! Goodbye.")?;
        Ok(())
    }

    /// Asks for the number of rounds until the answer is 3, 5 or 7.
    ///
    /// # Errors
    ///
    /// Returns an error if the console fails or input ends.
    pub fn select_best_of(&mut self) -> Result<BestOf, PlayError> {
        self.say("How many rounds would you like to play? (3, 5, 7)")?;
        loop {
            let answer = self.ask()?;
            if let Some(best_of) = BestOf::from_answer(&answer) {
                let message = alloc::format!("Ok, we'll play best of {}.", best_of.rounds());
                self.reply(&message)?;
                return Ok(best_of);
            }
            log::debug!("rejected round count {answer:?}");
            self.say("Sorry, that's not a valid choice. Please enter 3, 5 or 7.")?;
        }
    }

    fn welcome(&mut self) -> Result<(), PlayError> {
        self.console.clear_screen()?;
        for line in render::welcome(self.options.display_width) {
            self.console.write_line(&line)?;
        }
        self.ask()?;
        Ok(())
    }

    fn announce_grand_winner(&mut self, scoreboard: &Scoreboard) -> Result<(), PlayError> {
        let winner = scoreboard.grand_winner();
        log::info!(
            "match over: player {} dealer {} ties {} -> {winner:?}",
            scoreboard.player_wins(),
            scoreboard.dealer_wins(),
            scoreboard.ties()
        );
        match winner {
            Winner::Player => self.reply("You are the grand winner!"),
            Winner::Dealer => self.reply("Dealer is the grand winner!"),
            Winner::Tie => self.reply("There's no grand winner. It's a tie!"),
        }
    }

    /// Clears the screen and draws the full board.
    fn show_board(&mut self, table: &Table, scoreboard: &Scoreboard) -> Result<(), PlayError> {
        self.console.clear_screen()?;
        for line in render::board(table, scoreboard, self.options.display_width) {
            self.console.write_line(&line)?;
        }
        Ok(())
    }

    /// Writes a prompted message.
    fn say(&mut self, message: &str) -> Result<(), PlayError> {
        self.console.write_line(&render::prompt(message))?;
        Ok(())
    }

    /// Writes a prompted message followed by the standard pause.
    fn reply(&mut self, message: &str) -> Result<(), PlayError> {
        self.reply_after(message, self.options.message_delay)
    }

    fn reply_after(&mut self, message: &str, delay: Duration) -> Result<(), PlayError> {
        self.say(message)?;
        self.console.pause(delay);
        Ok(())
    }

    fn ask(&mut self) -> Result<String, PlayError> {
        Ok(self.console.read_line()?)
    }
}
