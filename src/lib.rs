//! A terminal Twenty-One game against a computer dealer, with an optional
//! `no_std` engine.
//!
//! The crate provides a [`Game`] type that runs best-of-N matches: dealing,
//! the player's hit-or-stay turn, the dealer's fixed-threshold turn, round
//! settlement and the running scoreboard. All terminal traffic goes through
//! a [`Console`], so the same flow runs on a real terminal or from a script.
//!
//! # Example
//!
//! ```
//! use twenty_one::{BestOf, Game, GameOptions, Scripted};
//!
//! let console = Scripted::new(Vec::<String>::new()).with_responder(|_| "s".to_string());
//! let mut game = Game::new(GameOptions::default().without_delays(), 7, console);
//! let scoreboard = game.play_match(BestOf::Three).unwrap();
//! assert_eq!(
//!     scoreboard.player_wins() + scoreboard.dealer_wins() + scoreboard.ties(),
//!     3
//! );
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod console;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod input;
pub mod options;
pub mod render;
pub mod result;
pub mod scoreboard;
pub mod table;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
#[cfg(feature = "std")]
pub use console::Terminal;
pub use console::{Console, Scripted};
pub use deck::Deck;
pub use error::{ConsoleError, DrawError, PlayError};
pub use game::Game;
pub use hand::{Hand, Identity, TARGET};
pub use input::{Move, parse_move, wants_restart};
pub use options::GameOptions;
pub use result::{DealerStop, PlayerStop, RoundResult, Winner};
pub use scoreboard::{BestOf, Scoreboard};
pub use table::{Phase, Table};
