//! Round and match outcomes.

use crate::hand::{Hand, Identity};

/// Who took a round or a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Winner {
    /// The player won.
    Player,
    /// The dealer won.
    Dealer,
    /// Nobody won.
    Tie,
}

impl From<Identity> for Winner {
    fn from(identity: Identity) -> Self {
        match identity {
            Identity::Player => Self::Player,
            Identity::Dealer => Self::Dealer,
        }
    }
}

/// How the player's turn ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerStop {
    /// Player chose to stay.
    Stayed,
    /// Player's hand is worth exactly 21.
    ReachedTarget,
    /// Player went over 21.
    Busted,
}

/// How the dealer's turn ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealerStop {
    /// Dealer reached the standing threshold.
    Stood,
    /// Dealer went over 21.
    Busted,
}

/// Result of a single round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// Round number, starting at 1.
    pub round: u8,
    /// Who took the round.
    pub winner: Winner,
    /// Player's final hand value.
    pub player_value: u8,
    /// Dealer's final hand value.
    pub dealer_value: u8,
    /// Which side busted, if any.
    pub busted: Option<Identity>,
}

impl RoundResult {
    /// Decides the round from the final hands.
    ///
    /// A busted player loses whatever the dealer holds; otherwise a busted
    /// dealer loses; otherwise the higher value wins and equal values tie.
    #[must_use]
    pub fn settle(round: u8, player: &Hand, dealer: &Hand) -> Self {
        let player_value = player.value();
        let dealer_value = dealer.value();

        let busted = if player.is_bust() {
            Some(Identity::Player)
        } else if dealer.is_bust() {
            Some(Identity::Dealer)
        } else {
            None
        };

        let winner = match busted {
            Some(loser) => Winner::from(loser.opponent()),
            None if player_value > dealer_value => Winner::Player,
            None if player_value < dealer_value => Winner::Dealer,
            None => Winner::Tie,
        };

        Self {
            round,
            winner,
            player_value,
            dealer_value,
            busted,
        }
    }
}
