//! Wordle Guesser
//!
//! A constraint-satisfaction filter for five-letter-word guessing games.
//! Given a history of (guess, per-letter feedback) observations, it computes
//! the exact set of dictionary words consistent with all observations,
//! including the game's duplicate-letter semantics.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_guesser::core::{Observation, Word};
//! use wordle_guesser::filter::filter_candidates;
//!
//! let dictionary: Vec<Word> = ["about", "atone", "crate"]
//!     .iter()
//!     .map(|w| Word::new(*w).unwrap())
//!     .collect();
//!
//! let history = vec!["stare=-GY-G".parse::<Observation>().unwrap()];
//! let candidates = filter_candidates(&dictionary, &history);
//! assert_eq!(candidates.len(), 1);
//! assert_eq!(candidates[0].text(), "atone");
//! ```

// Core domain types
pub mod core;

// Candidate filtering
pub mod filter;

// Ranking and derived display data
pub mod rank;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
