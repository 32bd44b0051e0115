//! Parsing of the player's terminal answers.
//!
//! Hit-or-stay answers are matched on their first character ignoring case,
//! so `h`, `Hit` and `hello` all mean hit. Leading whitespace is not skipped.

/// A decision during the player's turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    /// Draw another card.
    Hit,
    /// End the turn.
    Stay,
}

/// Parses a hit-or-stay answer. Anything not starting with `h` or `s` is
/// rejected and should be asked again.
#[must_use]
pub fn parse_move(answer: &str) -> Option<Move> {
    match answer.chars().next().map(|c| c.to_ascii_lowercase())? {
        'h' => Some(Move::Hit),
        's' => Some(Move::Stay),
        _ => None,
    }
}

/// Returns whether the restart answer asks for another match.
///
/// Only answers starting with a lowercase `n` decline; anything else,
/// including empty input, restarts.
#[must_use]
pub fn wants_restart(answer: &str) -> bool {
    !answer.starts_with('n')
}
