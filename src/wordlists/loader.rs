//! Word list loading utilities
//!
//! Builds a [`Dictionary`] from a file or from the embedded default list.
//! Dictionary construction reports rejected entries; callers decide
//! whether to surface or ignore them.

use crate::filter::{Dictionary, RejectedEntry};
use std::fs;
use std::io;
use std::path::Path;

/// Load a dictionary from a file of newline-separated words
///
/// Returns the dictionary plus any entries rejected by word validation.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_guesser::wordlists::loader::load_from_file;
///
/// let (dictionary, rejected) = load_from_file("words.txt").unwrap();
/// println!("Loaded {} words ({} rejected)", dictionary.len(), rejected.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<(Dictionary, Vec<RejectedEntry>)> {
    let content = fs::read_to_string(path)?;
    Ok(Dictionary::from_lines(content.lines()))
}

/// Build a dictionary from an embedded string slice
///
/// # Examples
/// ```
/// use wordle_guesser::wordlists::{DEFAULT_WORDS, loader::dictionary_from_slice};
///
/// let dictionary = dictionary_from_slice(DEFAULT_WORDS);
/// assert_eq!(dictionary.len(), DEFAULT_WORDS.len());
/// ```
#[must_use]
pub fn dictionary_from_slice(slice: &[&str]) -> Dictionary {
    let (dictionary, _rejected) = Dictionary::from_lines(slice.iter().copied());
    dictionary
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dictionary_from_slice_accepts_valid_words() {
        let input = &["crate", "slate", "irate"];
        let dictionary = dictionary_from_slice(input);

        assert_eq!(dictionary.len(), 3);
        assert_eq!(dictionary.words()[0].text(), "crate");
        assert_eq!(dictionary.words()[1].text(), "slate");
        assert_eq!(dictionary.words()[2].text(), "irate");
    }

    #[test]
    fn dictionary_from_slice_skips_invalid() {
        let input = &["crate", "toolong", "abc", "slate"];
        let dictionary = dictionary_from_slice(input);

        // Only "crate" and "slate" are valid 5-letter words
        assert_eq!(dictionary.len(), 2);
        assert_eq!(dictionary.words()[0].text(), "crate");
        assert_eq!(dictionary.words()[1].text(), "slate");
    }

    #[test]
    fn dictionary_from_slice_empty() {
        let input: &[&str] = &[];
        let dictionary = dictionary_from_slice(input);
        assert!(dictionary.is_empty());
    }

    #[test]
    fn embedded_default_list_loads_cleanly() {
        use crate::filter::Dictionary;
        use crate::wordlists::DEFAULT_WORDS;

        let (dictionary, rejected) = Dictionary::from_lines(DEFAULT_WORDS.iter().copied());
        assert_eq!(dictionary.len(), DEFAULT_WORDS.len());
        assert!(rejected.is_empty());
    }
}
