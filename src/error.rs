//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when drawing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    EmptyDeck,
}

/// Errors reported by a [`Console`](crate::console::Console).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConsoleError {
    /// Input reached end of stream.
    #[error("terminal input closed")]
    Closed,
    /// Reading from or writing to the terminal failed.
    #[cfg(feature = "std")]
    #[error("terminal i/o failed: {0}")]
    Io(std::io::ErrorKind),
}

/// Errors that abort a game in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// A card could not be drawn.
    #[error("draw failed: {0}")]
    Draw(#[from] DrawError),
    /// The terminal is unusable.
    #[error("console failed: {0}")]
    Console(#[from] ConsoleError),
}
