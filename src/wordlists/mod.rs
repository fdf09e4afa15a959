//! Word lists for the guesser
//!
//! Provides an embedded default word list plus file loading for callers
//! supplying their own dictionary.

mod embedded;
pub mod loader;

pub use embedded::{DEFAULT_WORDS, DEFAULT_WORDS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_count_matches_const() {
        assert_eq!(DEFAULT_WORDS.len(), DEFAULT_WORDS_COUNT);
    }

    #[test]
    fn default_words_are_valid() {
        // All words should be 5 letters, lowercase
        for &word in DEFAULT_WORDS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn default_words_are_unique() {
        let unique: std::collections::HashSet<_> = DEFAULT_WORDS.iter().collect();
        assert_eq!(unique.len(), DEFAULT_WORDS.len());
    }

    #[test]
    fn default_words_are_nonempty() {
        assert!(DEFAULT_WORDS_COUNT > 1000);
    }
}
