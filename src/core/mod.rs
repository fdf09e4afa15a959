//! Core domain types for the guesser
//!
//! This module contains the fundamental domain types with zero external I/O.
//! All types here are immutable values whose validity rules are enforced at
//! construction time, so the rest of the crate never revalidates them.

mod feedback;
mod observation;
mod word;

pub use feedback::{Feedback, FeedbackError, FeedbackMark};
pub use observation::{Observation, ObservationError};
pub use word::{Word, WordError};

/// Fixed word length for the game. Every `Word` and every `Feedback` is
/// exactly this long.
pub const WORD_LEN: usize = 5;
