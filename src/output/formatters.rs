//! Formatting utilities for terminal output

use crate::core::{FeedbackMark, Observation, Word};
use colored::{ColoredString, Colorize};

/// Render a guess with each letter colored by its feedback mark
#[must_use]
pub fn colorize_guess(observation: &Observation) -> String {
    observation
        .guess()
        .chars()
        .iter()
        .enumerate()
        .map(|(i, &letter)| {
            let ch = (letter as char).to_ascii_uppercase().to_string();
            match observation.feedback().mark_at(i) {
                FeedbackMark::Hit => ch.on_green().white().bold().to_string(),
                FeedbackMark::Present => ch.on_yellow().white().bold().to_string(),
                FeedbackMark::Absent => ch.on_bright_black().white().to_string(),
            }
        })
        .collect()
}

/// Color a keyboard letter by its best observed mark
#[must_use]
pub fn status_letter(letter: u8, mark: Option<FeedbackMark>) -> ColoredString {
    let ch = (letter as char).to_ascii_uppercase().to_string();
    match mark {
        Some(FeedbackMark::Hit) => ch.green().bold(),
        Some(FeedbackMark::Present) => ch.yellow().bold(),
        Some(FeedbackMark::Absent) => ch.bright_black(),
        None => ch.normal(),
    }
}

/// Format the session as shareable plain text
///
/// One line per observation (`GUESS: 🟩🟨⬜...`) followed by the candidate
/// count and a preview of the first candidates. The caller decides where
/// the text goes (clipboard, file, chat).
#[must_use]
pub fn share_text(history: &[Observation], candidates: &[Word]) -> String {
    let mut out = String::from("Wordle Guesser Results\n\n");

    for observation in history {
        out.push_str(&format!(
            "{}: {}\n",
            observation.guess().text().to_uppercase(),
            observation.feedback().to_emoji()
        ));
    }

    out.push_str(&format!("\nPossible words: {}\n", candidates.len()));

    let preview: Vec<&str> = candidates.iter().take(10).map(Word::text).collect();
    out.push_str(&preview.join(", "));
    if candidates.len() > 10 {
        out.push_str("...");
    }

    out
}
