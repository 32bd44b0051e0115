use crate::console::Console;
use crate::error::PlayError;
use crate::hand::{Identity, TARGET};
use crate::input::{Move, parse_move};
use crate::result::{DealerStop, PlayerStop};
use crate::scoreboard::Scoreboard;
use crate::table::{Phase, Table};

use super::Game;

impl<C: Console> Game<C> {
    /// Runs the player's hit-or-stay loop.
    ///
    /// The turn ends when the player stays, busts or holds exactly 21. A hand
    /// dealt at 21 ends the turn without asking. Unrecognized answers are asked
    /// again without drawing. If the player did not bust, the dealer's cards
    /// are revealed when the turn ends.
    ///
    /// # Errors
    ///
    /// Returns an error if the console fails, input ends or the deck is empty.
    pub fn player_turn(
        &mut self,
        table: &mut Table,
        scoreboard: &Scoreboard,
    ) -> Result<PlayerStop, PlayError> {
        table.set_phase(Phase::PlayerTurn);
        self.show_board(table, scoreboard)?;

        let stop = loop {
            if table.player().reached_target() {
                break PlayerStop::ReachedTarget;
            }

            self.say("Hit or stay?")?;
            let answer = self.ask()?;
            match parse_move(&answer) {
                Some(Move::Hit) => {
                    self.reply("You decided to hit!")?;
                    table.draw_to(Identity::Player)?;
                    if table.player().is_bust() {
                        break PlayerStop::Busted;
                    }
                    if table.player().reached_target() {
                        break PlayerStop::ReachedTarget;
                    }
                    self.show_board(table, scoreboard)?;
                }
                Some(Move::Stay) => {
                    self.reply("You decided to stay!")?;
                    break PlayerStop::Stayed;
                }
                None => {
                    log::debug!("rejected move {answer:?}");
                    self.say("Please enter (h)it or (s)tay.")?;
                }
            }
        };

        self.show_board(table, scoreboard)?;
        if stop == PlayerStop::ReachedTarget {
            let message = alloc::format!("You reached the max sum of {TARGET}.");
            self.reply(&message)?;
        }
        if stop != PlayerStop::Busted {
            table.reveal_dealer();
        }

        log::debug!(
            "player turn over: {stop:?} at {} (soft: {})",
            table.player().value(),
            table.player().is_soft()
        );
        Ok(stop)
    }

    /// Runs the dealer's fixed policy: draw while below the standing
    /// threshold, stop at or above it or on a bust.
    ///
    /// The dealer has no separate stop on 21; it stands there because 21 is
    /// above the threshold.
    ///
    /// # Errors
    ///
    /// Returns an error if the console fails or the deck is empty.
    pub fn dealer_turn(
        &mut self,
        table: &mut Table,
        scoreboard: &Scoreboard,
    ) -> Result<DealerStop, PlayError> {
        table.set_phase(Phase::DealerTurn);
        table.reveal_dealer();
        self.reply("Dealer's turn starts.")?;

        loop {
            let dealer = table.dealer();
            if dealer.value() >= self.options.dealer_stands_at || dealer.is_bust() {
                break;
            }

            self.reply_after("Dealer is deciding...", self.options.dealer_think_delay)?;
            table.draw_to(Identity::Dealer)?;
            self.show_board(table, scoreboard)?;
            self.reply_after("Dealer decided to hit.", self.options.dealer_hit_delay)?;
        }

        let stop = if table.dealer().is_bust() {
            DealerStop::Busted
        } else {
            DealerStop::Stood
        };
        log::debug!(
            "dealer turn over: {stop:?} at {} (soft: {})",
            table.dealer().value(),
            table.dealer().is_soft()
        );
        Ok(stop)
    }
}
