//! State of a single round.

use crate::card::Card;
use crate::deck::Deck;
use crate::error::DrawError;
use crate::hand::{Hand, Identity};

/// Round phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Initial four cards are being dealt.
    Dealing,
    /// Waiting for the player's hit or stay decisions.
    PlayerTurn,
    /// Dealer draws to its threshold.
    DealerTurn,
    /// Round has ended and can be settled.
    RoundOver,
}

/// The deck and both hands for one round.
#[derive(Debug, Clone)]
pub struct Table {
    deck: Deck,
    player: Hand,
    dealer: Hand,
    dealer_revealed: bool,
    phase: Phase,
}

impl Table {
    /// Sets up an empty table around `deck`.
    #[must_use]
    pub const fn new(deck: Deck) -> Self {
        Self {
            deck,
            player: Hand::new(Identity::Player),
            dealer: Hand::new(Identity::Dealer),
            dealer_revealed: false,
            phase: Phase::Dealing,
        }
    }

    /// Draws the top card into `identity`'s hand.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::EmptyDeck`] if the deck is exhausted.
    pub fn draw_to(&mut self, identity: Identity) -> Result<Card, DrawError> {
        let card = self.deck.draw().ok_or(DrawError::EmptyDeck)?;
        log::trace!("{} draws {card} during {:?}", identity.name(), self.phase);
        match identity {
            Identity::Player => self.player.add_card(card),
            Identity::Dealer => self.dealer.add_card(card),
        }
        Ok(card)
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the remaining deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns whether the dealer's hidden cards are face up.
    #[must_use]
    pub const fn is_dealer_revealed(&self) -> bool {
        self.dealer_revealed
    }

    /// Turns the dealer's hidden cards face up.
    pub const fn reveal_dealer(&mut self) {
        self.dealer_revealed = true;
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Moves the round to `phase`.
    pub fn set_phase(&mut self, phase: Phase) {
        log::trace!("phase {:?} -> {phase:?}", self.phase);
        self.phase = phase;
    }
}
