//! A submitted guess together with its feedback
//!
//! The compatibility evaluator here is the single source of truth for which
//! candidate words a guess+feedback pair rules out. Duplicate letters make
//! this subtle: marks are resolved in three passes (hits, then presents,
//! then absents), each claiming occurrences from the candidate's letter
//! pool, exactly mirroring how the game itself assigns marks.

use super::{Feedback, FeedbackError, FeedbackMark, WORD_LEN, Word, WordError};
use std::fmt;

/// One submitted guess with its per-position feedback marks
///
/// Immutable once created; the caller appends observations to its history
/// as guesses are submitted and discards them only on a full reset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Observation {
    guess: Word,
    feedback: Feedback,
}

/// Error type for invalid observation strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObservationError {
    MissingSeparator,
    BadGuess(WordError),
    BadFeedback(FeedbackError),
}

impl fmt::Display for ObservationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSeparator => {
                write!(f, "Expected 'guess=marks', e.g. stare=-G-Y-")
            }
            Self::BadGuess(e) => write!(f, "Invalid guess: {e}"),
            Self::BadFeedback(e) => write!(f, "Invalid feedback: {e}"),
        }
    }
}

impl std::error::Error for ObservationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::MissingSeparator => None,
            Self::BadGuess(e) => Some(e),
            Self::BadFeedback(e) => Some(e),
        }
    }
}

impl Observation {
    /// Pair a guess with its feedback
    ///
    /// Both halves are already validated by their own constructors, so this
    /// cannot fail: a length mismatch is unrepresentable.
    #[inline]
    #[must_use]
    pub const fn new(guess: Word, feedback: Feedback) -> Self {
        Self { guess, feedback }
    }

    /// The guessed word
    #[inline]
    #[must_use]
    pub const fn guess(&self) -> &Word {
        &self.guess
    }

    /// The feedback marks for the guess
    #[inline]
    #[must_use]
    pub const fn feedback(&self) -> &Feedback {
        &self.feedback
    }

    /// Whether this observation solved the game (all hits)
    #[inline]
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.feedback.is_all_hits()
    }

    /// Decide whether `candidate` could be the answer given this observation
    ///
    /// Pure and total for constructed values. Marks are resolved in three
    /// passes over the candidate's pool of letter occurrences:
    ///
    /// 1. Every `Hit` requires positional equality and claims one occurrence
    ///    of its letter from the pool.
    /// 2. Every `Present`, in position order, fails if the candidate has the
    ///    same letter at that position (the game would have marked a hit),
    ///    fails if no unclaimed occurrence remains, and otherwise claims one.
    /// 3. Every `Absent` fails if any unclaimed occurrence of its letter
    ///    remains after the hit and present claims.
    ///
    /// The pass order is mandatory: evaluating out of order misclassifies
    /// repeated letters (a guess with two of a letter where the answer has
    /// one).
    ///
    /// # Examples
    /// ```
    /// use wordle_guesser::core::{Feedback, Observation, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let answer = Word::new("crate").unwrap();
    /// let obs = Observation::new(guess, Feedback::score(
    ///     &Word::new("crane").unwrap(),
    ///     &answer,
    /// ));
    ///
    /// assert!(obs.allows(&answer));
    /// assert!(!obs.allows(&Word::new("about").unwrap()));
    /// ```
    #[must_use]
    pub fn allows(&self, candidate: &Word) -> bool {
        // Hits are an unconditional positional constraint
        for i in 0..WORD_LEN {
            if self.feedback.mark_at(i) == FeedbackMark::Hit
                && candidate.char_at(i) != self.guess.char_at(i)
            {
                return false;
            }
        }

        let mut available = candidate.char_counts();

        // Hit claims come first
        for i in 0..WORD_LEN {
            if self.feedback.mark_at(i) == FeedbackMark::Hit
                && let Some(count) = available.get_mut(&self.guess.char_at(i))
            {
                *count = count.saturating_sub(1);
            }
        }

        // Present claims, in position order
        for i in 0..WORD_LEN {
            if self.feedback.mark_at(i) == FeedbackMark::Present {
                let letter = self.guess.char_at(i);

                // Same letter in the same slot would have been a hit
                if candidate.char_at(i) == letter {
                    return false;
                }

                match available.get_mut(&letter) {
                    Some(count) if *count > 0 => *count -= 1,
                    _ => return false,
                }
            }
        }

        // Absents rule out any occurrence the hits and presents did not claim
        for i in 0..WORD_LEN {
            if self.feedback.mark_at(i) == FeedbackMark::Absent
                && available
                    .get(&self.guess.char_at(i))
                    .is_some_and(|&count| count > 0)
            {
                return false;
            }
        }

        true
    }
}

impl fmt::Display for Observation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.guess, self.feedback)
    }
}

impl std::str::FromStr for Observation {
    type Err = ObservationError;

    /// Parse an observation from `"guess=marks"`, e.g. `"stare=-G-Y-"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (guess, marks) = s.split_once('=').ok_or(ObservationError::MissingSeparator)?;

        let guess = Word::new(guess.trim()).map_err(ObservationError::BadGuess)?;
        let feedback =
            Feedback::from_str(marks.trim()).map_err(ObservationError::BadFeedback)?;

        Ok(Self::new(guess, feedback))
    }
}
