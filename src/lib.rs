//! A Monte Carlo simulator for the Bus Driver drinking card game.
//!
//! A game is played with a 32-card deck (sevens to aces) over four rounds:
//! guess the suit, guess the color, guess higher/lower/same, and guess
//! inside/outside. Every wrong guess costs a drink. The crate plays the game
//! with uniformly random guesses and records how many drinks each game cost.
//!
//! # Example
//!
//! ```
//! use busdriver::{GameOptions, Simulator};
//!
//! let results = Simulator::new(42)
//!     .with_games(1_000)
//!     .with_options(GameOptions::default())
//!     .run();
//! assert_eq!(results.len(), 1_000);
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod options;
pub mod output;
pub mod result;
pub mod simulator;

// Re-export main types
pub use card::{Card, Color, DECK_SIZE, MAX_RANK, MIN_RANK, Suit};
pub use deck::Deck;
pub use error::{OutputError, TurnError};
pub use game::{Direction, Game, Guess, Round, Span, play_game};
pub use options::{GameOptions, MissPolicy, RoundOrder};
pub use output::{DEFAULT_OUTPUT, ResultsFile, save_results, write_results};
pub use result::{GameResult, Outcome, ResultSet, Summary};
pub use simulator::{DEFAULT_GAMES, Simulator};
