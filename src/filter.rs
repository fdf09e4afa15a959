//! Candidate filtering over a dictionary
//!
//! The filter is a pure query: given the dictionary and the full observation
//! history, it returns exactly the words compatible with every observation,
//! in dictionary order. It keeps no state between calls and always
//! recomputes from the full dictionary, so a corrected or undone
//! observation can never leave stale narrowing behind.

use crate::core::{Observation, Word, WordError};
use rayon::prelude::*;
use rustc_hash::FxHashSet;

/// An ordered collection of unique candidate words
///
/// Built once per session and held read-only. Construction rejects
/// malformed entries up front and reports them, rather than skipping them
/// silently mid-filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dictionary {
    words: Vec<Word>,
}

/// A dictionary entry rejected at construction time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedEntry {
    pub entry: String,
    pub reason: WordError,
}

impl Dictionary {
    /// Build a dictionary from already-validated words
    ///
    /// Duplicates are dropped, keeping the first occurrence.
    #[must_use]
    pub fn new(words: impl IntoIterator<Item = Word>) -> Self {
        let mut seen = FxHashSet::default();
        let words = words
            .into_iter()
            .filter(|word| seen.insert(word.clone()))
            .collect();
        Self { words }
    }

    /// Build a dictionary from raw text lines, reporting rejected entries
    ///
    /// Blank lines are ignored. Every non-blank line that fails word
    /// validation is returned alongside its reason so the caller can audit
    /// the dictionary's provenance.
    #[must_use]
    pub fn from_lines<'a>(
        lines: impl IntoIterator<Item = &'a str>,
    ) -> (Self, Vec<RejectedEntry>) {
        let mut accepted = Vec::new();
        let mut rejected = Vec::new();

        for line in lines {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            match Word::new(trimmed) {
                Ok(word) => accepted.push(word),
                Err(reason) => rejected.push(RejectedEntry {
                    entry: trimmed.to_string(),
                    reason,
                }),
            }
        }

        (Self::new(accepted), rejected)
    }

    /// The words, in insertion order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Compute the candidate set: dictionary words compatible with every
/// observation in `history`, in dictionary order
///
/// An empty history returns the dictionary unchanged. The result is a
/// freshly computed value each call; repeated calls with the same inputs
/// always agree, and appending an observation can only shrink the set.
///
/// The scan parallelizes across the dictionary; `par_iter` preserves input
/// order through indexed collection, so parallelism never changes the
/// result.
///
/// # Examples
/// ```
/// use wordle_guesser::core::{Observation, Word};
/// use wordle_guesser::filter::filter_candidates;
///
/// let dictionary: Vec<Word> = ["about", "atone", "crate"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
///
/// let history = vec!["crate=GGGGG".parse::<Observation>().unwrap()];
/// let candidates = filter_candidates(&dictionary, &history);
/// assert_eq!(candidates.len(), 1);
/// assert_eq!(candidates[0].text(), "crate");
/// ```
#[must_use]
pub fn filter_candidates(dictionary: &[Word], history: &[Observation]) -> Vec<Word> {
    if history.is_empty() {
        return dictionary.to_vec();
    }

    dictionary
        .par_iter()
        .filter(|candidate| history.iter().all(|obs| obs.allows(candidate)))
        .cloned()
        .collect()
}
