//! Per-letter feedback marks for a guess
//!
//! A `Feedback` holds one mark per letter position:
//! - `Hit` (green): correct letter, correct position
//! - `Present` (yellow): letter occurs in the answer, wrong position
//! - `Absent` (gray): no further unmatched occurrence of that letter
//!
//! The core never holds partially-entered feedback; once constructed, every
//! position carries one of the three marks.

use super::{WORD_LEN, Word};
use std::fmt;

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedbackMark {
    /// Correct letter in the correct position (green)
    Hit,
    /// Letter occurs in the answer at a different position (yellow)
    Present,
    /// No unmatched occurrence of the letter remains (gray)
    Absent,
}

impl FeedbackMark {
    /// Display dominance for keyboard coloring: `Hit` over `Present` over
    /// `Absent`.
    #[inline]
    #[must_use]
    pub const fn priority(self) -> u8 {
        match self {
            Self::Hit => 2,
            Self::Present => 1,
            Self::Absent => 0,
        }
    }

    /// Emoji square for this mark
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Hit => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Error type for invalid feedback strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackError {
    InvalidLength(usize),
    InvalidSymbol(char),
}

impl fmt::Display for FeedbackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Feedback must be exactly {WORD_LEN} marks, got {len}")
            }
            Self::InvalidSymbol(ch) => {
                write!(f, "Invalid feedback symbol '{ch}' (use G, Y, or -)")
            }
        }
    }
}

impl std::error::Error for FeedbackError {}

/// The complete feedback for one guess: one mark per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback {
    marks: [FeedbackMark; WORD_LEN],
}

impl Feedback {
    /// All hits (the guess is the answer)
    pub const ALL_HITS: Self = Self {
        marks: [FeedbackMark::Hit; WORD_LEN],
    };

    /// Create feedback from explicit per-position marks
    #[inline]
    #[must_use]
    pub const fn new(marks: [FeedbackMark; WORD_LEN]) -> Self {
        Self { marks }
    }

    /// Get the marks as an array
    #[inline]
    #[must_use]
    pub const fn marks(&self) -> &[FeedbackMark; WORD_LEN] {
        &self.marks
    }

    /// Get the mark at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn mark_at(&self, position: usize) -> FeedbackMark {
        self.marks[position]
    }

    /// Check whether every position is a `Hit`
    #[inline]
    #[must_use]
    pub fn is_all_hits(&self) -> bool {
        self.marks.iter().all(|&m| m == FeedbackMark::Hit)
    }

    /// Score `guess` against a known `answer` per the game's feedback rules
    ///
    /// This is the canonical feedback-generation rule, including duplicate
    /// letters:
    /// 1. First pass: mark all exact matches as `Hit` and remove each from
    ///    the answer's pool of available occurrences
    /// 2. Second pass, left to right: mark `Present` where an unmatched
    ///    occurrence remains in the pool, `Absent` otherwise
    ///
    /// # Examples
    /// ```
    /// use wordle_guesser::core::{Feedback, FeedbackMark, Word};
    ///
    /// let guess = Word::new("speed").unwrap();
    /// let answer = Word::new("erase").unwrap();
    /// let feedback = Feedback::score(&guess, &answer);
    ///
    /// // S and the first E are present; the second E exhausts the pool
    /// // only after both of ERASE's E's are claimed, so it is present too.
    /// assert_eq!(feedback.mark_at(0), FeedbackMark::Present); // s
    /// assert_eq!(feedback.mark_at(2), FeedbackMark::Present); // e
    /// assert_eq!(feedback.mark_at(3), FeedbackMark::Present); // e
    /// ```
    #[must_use]
    pub fn score(guess: &Word, answer: &Word) -> Self {
        let mut marks = [FeedbackMark::Absent; WORD_LEN];
        let mut available = answer.char_counts();

        // First pass: hits claim their occurrence before any present can
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LEN {
            if guess.char_at(i) == answer.char_at(i) {
                marks[i] = FeedbackMark::Hit;
                if let Some(count) = available.get_mut(&guess.char_at(i)) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: presents claim remaining occurrences left to right
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LEN {
            if marks[i] == FeedbackMark::Absent {
                let letter = guess.char_at(i);
                if let Some(count) = available.get_mut(&letter)
                    && *count > 0
                {
                    marks[i] = FeedbackMark::Present;
                    *count -= 1;
                }
            }
        }

        Self { marks }
    }

    /// Parse feedback from a string like `"GY-GY"` or `"🟩🟨⬜🟩🟨"`
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for a hit
    /// - 'Y'/'y'/🟨 for a present
    /// - '-'/'_'/⬜/⬛ for an absent
    ///
    /// # Errors
    /// Returns `FeedbackError` on wrong length or an unrecognized symbol.
    ///
    /// # Examples
    /// ```
    /// use wordle_guesser::core::Feedback;
    ///
    /// let f1 = Feedback::from_str("GY-GY").unwrap();
    /// let f2 = Feedback::from_str("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(f1, f2);
    /// ```
    #[allow(clippy::should_implement_trait)] // FromStr is also implemented below
    pub fn from_str(s: &str) -> Result<Self, FeedbackError> {
        let chars: Vec<char> = s.chars().collect();

        if chars.len() != WORD_LEN {
            return Err(FeedbackError::InvalidLength(chars.len()));
        }

        let mut marks = [FeedbackMark::Absent; WORD_LEN];
        for (i, ch) in chars.into_iter().enumerate() {
            marks[i] = match ch {
                'G' | 'g' | '🟩' => FeedbackMark::Hit,
                'Y' | 'y' | '🟨' => FeedbackMark::Present,
                '-' | '_' | '⬜' | '⬛' => FeedbackMark::Absent,
                other => return Err(FeedbackError::InvalidSymbol(other)),
            };
        }

        Ok(Self { marks })
    }

    /// Convert feedback to an emoji string like `"🟩🟨⬜🟩🟨"`
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.marks.iter().map(|m| m.to_emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_emoji())
    }
}

impl std::str::FromStr for Feedback {
    type Err = FeedbackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use FeedbackMark::{Absent, Hit, Present};

    #[test]
    fn all_hits_constant() {
        assert!(Feedback::ALL_HITS.is_all_hits());
        assert_eq!(Feedback::ALL_HITS.to_emoji(), "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn score_all_absent() {
        let guess = Word::new("abcde").unwrap();
        let answer = Word::new("fghij").unwrap();
        let feedback = Feedback::score(&guess, &answer);

        assert_eq!(*feedback.marks(), [Absent; 5]);
    }

    #[test]
    fn score_all_hits() {
        let word = Word::new("crate").unwrap();
        let feedback = Feedback::score(&word, &word);

        assert_eq!(feedback, Feedback::ALL_HITS);
    }

    #[test]
    fn score_self_is_always_all_hits() {
        for word in ["crate", "slate", "audio", "zzzzz", "aaaaa"] {
            let w = Word::new(word).unwrap();
            assert_eq!(Feedback::score(&w, &w), Feedback::ALL_HITS);
        }
    }

    #[test]
    fn score_classic_example() {
        // CRANE vs SLATE: A and E hit, R is absent because SLATE has no R
        let guess = Word::new("crane").unwrap();
        let answer = Word::new("slate").unwrap();
        let feedback = Feedback::score(&guess, &answer);

        assert_eq!(*feedback.marks(), [Absent, Absent, Hit, Absent, Hit]);
    }

    #[test]
    fn score_duplicate_letters_both_present() {
        // SPEED vs ERASE: both E's of the guess find an unclaimed E in the
        // answer (ERASE has two), so each is marked present independently
        let guess = Word::new("speed").unwrap();
        let answer = Word::new("erase").unwrap();
        let feedback = Feedback::score(&guess, &answer);

        assert_eq!(
            *feedback.marks(),
            [Present, Absent, Present, Present, Absent]
        );
    }

    #[test]
    fn score_duplicate_letters_hit_takes_priority() {
        // ROBOT vs FLOOR: the second O is a hit and claims its occurrence
        // before the first O's present claim is evaluated
        let guess = Word::new("robot").unwrap();
        let answer = Word::new("floor").unwrap();
        let feedback = Feedback::score(&guess, &answer);

        assert_eq!(*feedback.marks(), [Present, Present, Absent, Hit, Absent]);
    }

    #[test]
    fn score_duplicate_guess_letter_single_answer_occurrence() {
        // SPEED vs CRATE: one E in the answer, claimed by the left-most
        // unmatched E of the guess; the second E is absent
        let guess = Word::new("speed").unwrap();
        let answer = Word::new("crate").unwrap();
        let feedback = Feedback::score(&guess, &answer);

        assert_eq!(*feedback.marks(), [Absent, Absent, Present, Absent, Absent]);
    }

    #[test]
    fn from_str_valid() {
        let f1 = Feedback::from_str("GYG--").unwrap();
        let f2 = Feedback::from_str("🟩🟨🟩⬜⬜").unwrap();
        let f3 = Feedback::from_str("gyg__").unwrap();

        assert_eq!(f1, f2);
        assert_eq!(f1, f3);
        assert_eq!(*f1.marks(), [Hit, Present, Hit, Absent, Absent]);
    }

    #[test]
    fn from_str_accepts_black_square() {
        // Shared results use ⬛ instead of ⬜ in dark mode
        let f = Feedback::from_str("⬛⬛🟩⬛🟩").unwrap();
        assert_eq!(*f.marks(), [Absent, Absent, Hit, Absent, Hit]);
    }

    #[test]
    fn from_str_invalid() {
        assert!(matches!(
            Feedback::from_str("GYGGYX"),
            Err(FeedbackError::InvalidLength(6))
        ));
        assert!(matches!(
            Feedback::from_str("GYG"),
            Err(FeedbackError::InvalidLength(3))
        ));
        assert!(matches!(
            Feedback::from_str("GXGGY"),
            Err(FeedbackError::InvalidSymbol('X'))
        ));
        assert!(matches!(
            Feedback::from_str(""),
            Err(FeedbackError::InvalidLength(0))
        ));
    }

    #[test]
    fn from_str_trait_matches_inherent() {
        let parsed: Feedback = "G-Y-G".parse().unwrap();
        assert_eq!(parsed, Feedback::from_str("G-Y-G").unwrap());
    }

    #[test]
    fn mark_priority_ordering() {
        assert!(Hit.priority() > Present.priority());
        assert!(Present.priority() > Absent.priority());
    }

    #[test]
    fn display_is_emoji() {
        let f = Feedback::from_str("G-Y-G").unwrap();
        assert_eq!(format!("{f}"), "🟩⬜🟨⬜🟩");
    }
}
