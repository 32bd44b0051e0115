use alloc::format;

use crate::console::Console;
use crate::deck::Deck;
use crate::error::PlayError;
use crate::hand::Identity;
use crate::render;
use crate::result::{PlayerStop, RoundResult, Winner};
use crate::scoreboard::{BestOf, Scoreboard};
use crate::table::{Phase, Table};

use super::Game;

/// Cards dealt before the player's turn.
const INITIAL_CARDS: usize = 4;

impl<C: Console> Game<C> {
    /// Plays every round of a match and returns the final scoreboard.
    ///
    /// # Errors
    ///
    /// Returns an error if the console fails or input ends.
    pub fn play_match(&mut self, best_of: BestOf) -> Result<Scoreboard, PlayError> {
        let mut scoreboard = Scoreboard::new(best_of);

        for round in 0..best_of.rounds() {
            if round > 0 {
                scoreboard.advance();
            }
            self.play_round(&mut scoreboard)?;
        }

        Ok(scoreboard)
    }

    /// Plays the current round with a freshly shuffled deck.
    ///
    /// # Errors
    ///
    /// Returns an error if the console fails or input ends.
    pub fn play_round(&mut self, scoreboard: &mut Scoreboard) -> Result<RoundResult, PlayError> {
        let deck = Deck::build(&mut self.rng);
        self.play_round_with_deck(deck, scoreboard)
    }

    /// Plays the current round with the given deck.
    ///
    /// Deals, runs the player's turn, runs the dealer's turn unless the player
    /// busted, records the winner and shows the result. Before every round but
    /// the last, waits for the player to continue.
    ///
    /// # Errors
    ///
    /// Returns an error if the console fails, input ends or the deck runs out.
    pub fn play_round_with_deck(
        &mut self,
        deck: Deck,
        scoreboard: &mut Scoreboard,
    ) -> Result<RoundResult, PlayError> {
        log::debug!(
            "round {} of {} starts",
            scoreboard.current_round(),
            scoreboard.total_rounds()
        );
        let mut table = Table::new(deck);

        self.starting_deal(&mut table)?;
        let stop = self.player_turn(&mut table, scoreboard)?;
        if stop != PlayerStop::Busted {
            self.dealer_turn(&mut table, scoreboard)?;
        }

        table.set_phase(Phase::RoundOver);
        table.reveal_dealer();
        let result = RoundResult::settle(scoreboard.current_round(), table.player(), table.dealer());
        scoreboard.record(result.winner);
        log::info!(
            "round {} over: {:?} (player {}, dealer {})",
            result.round,
            result.winner,
            result.player_value,
            result.dealer_value
        );

        self.end_round(&table, scoreboard, &result)?;

        if !scoreboard.is_final_round() {
            self.say("Press enter for next round.")?;
            self.ask()?;
        }

        Ok(result)
    }

    /// Deals four cards, alternating player and dealer, player first.
    ///
    /// # Errors
    ///
    /// Returns an error if the console fails or the deck runs out.
    pub fn starting_deal(&mut self, table: &mut Table) -> Result<(), PlayError> {
        table.set_phase(Phase::Dealing);

        for n in 0..INITIAL_CARDS {
            let who = if n % 2 == 0 {
                Identity::Player
            } else {
                Identity::Dealer
            };
            self.reply("Dealing...")?;
            table.draw_to(who)?;

            self.console.clear_screen()?;
            for line in render::hands(table, self.options.display_width) {
                self.console.write_line(&line)?;
            }
        }

        Ok(())
    }

    fn end_round(
        &mut self,
        table: &Table,
        scoreboard: &Scoreboard,
        result: &RoundResult,
    ) -> Result<(), PlayError> {
        self.show_board(table, scoreboard)?;

        if let Some(loser) = result.busted {
            let message = format!(
                "{} busted. {} wins!",
                loser.name(),
                loser.opponent().name()
            );
            return self.say(&message);
        }

        self.reply("Dealer decided to stay.")?;
        match result.winner {
            Winner::Player => self.say("You won the round!"),
            Winner::Dealer => self.say("Dealer won the round!"),
            Winner::Tie => self.say("It's a tie!"),
        }
    }
}
