//! Match length and running score.

use core::cmp::Ordering;

use crate::result::Winner;

/// Number of rounds in a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BestOf {
    /// Three rounds.
    Three,
    /// Five rounds.
    Five,
    /// Seven rounds.
    Seven,
}

impl BestOf {
    /// Parses the round-count answer. Only exactly `3`, `5` or `7` is
    /// accepted.
    #[must_use]
    pub fn from_answer(answer: &str) -> Option<Self> {
        match answer {
            "3" => Some(Self::Three),
            "5" => Some(Self::Five),
            "7" => Some(Self::Seven),
            _ => None,
        }
    }

    /// Number of rounds to play.
    #[must_use]
    pub const fn rounds(self) -> u8 {
        match self {
            Self::Three => 3,
            Self::Five => 5,
            Self::Seven => 7,
        }
    }
}

/// Score for one match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scoreboard {
    total_rounds: u8,
    current_round: u8,
    player_wins: u8,
    dealer_wins: u8,
    ties: u8,
}

impl Scoreboard {
    /// Creates a scoreboard at round 1 with no wins.
    #[must_use]
    pub const fn new(best_of: BestOf) -> Self {
        Self {
            total_rounds: best_of.rounds(),
            current_round: 1,
            player_wins: 0,
            dealer_wins: 0,
            ties: 0,
        }
    }

    /// Total rounds in the match.
    #[must_use]
    pub const fn total_rounds(&self) -> u8 {
        self.total_rounds
    }

    /// Current round, starting at 1.
    #[must_use]
    pub const fn current_round(&self) -> u8 {
        self.current_round
    }

    /// Rounds won by the player.
    #[must_use]
    pub const fn player_wins(&self) -> u8 {
        self.player_wins
    }

    /// Rounds won by the dealer.
    #[must_use]
    pub const fn dealer_wins(&self) -> u8 {
        self.dealer_wins
    }

    /// Rounds that ended level.
    #[must_use]
    pub const fn ties(&self) -> u8 {
        self.ties
    }

    /// Returns whether the current round is the last one.
    #[must_use]
    pub const fn is_final_round(&self) -> bool {
        self.current_round >= self.total_rounds
    }

    /// Records the outcome of the current round. A tie scores for nobody.
    pub const fn record(&mut self, winner: Winner) {
        match winner {
            Winner::Player => self.player_wins += 1,
            Winner::Dealer => self.dealer_wins += 1,
            Winner::Tie => self.ties += 1,
        }
    }

    /// Moves on to the next round.
    pub const fn advance(&mut self) {
        if self.current_round < self.total_rounds {
            self.current_round += 1;
        }
    }

    /// Overall winner from the round-win counts. Equal counts are a tie.
    #[must_use]
    pub fn grand_winner(&self) -> Winner {
        match self.player_wins.cmp(&self.dealer_wins) {
            Ordering::Greater => Winner::Player,
            Ordering::Less => Winner::Dealer,
            Ordering::Equal => Winner::Tie,
        }
    }
}
