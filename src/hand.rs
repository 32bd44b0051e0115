//! Hands and hand evaluation.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// Highest value a hand may reach without busting.
pub const TARGET: u8 = 21;

/// Who a hand belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Identity {
    /// The human player.
    Player,
    /// The computer dealer.
    Dealer,
}

impl Identity {
    /// The other side of the table.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::Player => Self::Dealer,
            Self::Dealer => Self::Player,
        }
    }

    /// Display name used in messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Player => "Player",
            Self::Dealer => "Dealer",
        }
    }
}

/// Sums provisional values, then turns aces from 11 into 1 one at a time
/// until the total is back to 21 or no aces are left.
fn evaluate_cards(cards: &[Card]) -> (u8, bool) {
    let mut value: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.rank.is_ace() {
            aces += 1;
        }
        value = value.saturating_add(card.rank.points());
    }

    while value > TARGET && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    let is_soft = aces > 0 && value <= TARGET;
    (value, is_soft)
}

/// Cards held by one side during a round.
///
/// The value is always derived from the cards; nothing is cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    owner: Identity,
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new(owner: Identity) -> Self {
        Self {
            owner,
            cards: Vec::new(),
        }
    }

    /// Creates a hand already holding `cards`.
    #[must_use]
    pub fn with_cards(owner: Identity, cards: &[Card]) -> Self {
        Self {
            owner,
            cards: cards.to_vec(),
        }
    }

    /// Returns who holds this hand.
    #[must_use]
    pub const fn owner(&self) -> Identity {
        self.owner
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Calculates the value of the hand.
    ///
    /// Aces count 11 unless that would push the total over 21, in which case
    /// only as many aces as necessary count 1.
    #[must_use]
    pub fn value(&self) -> u8 {
        evaluate_cards(&self.cards).0
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(&self.cards).1
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > TARGET
    }

    /// Returns whether the hand is worth exactly 21.
    #[must_use]
    pub fn reached_target(&self) -> bool {
        self.value() == TARGET
    }
}
