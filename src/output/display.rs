//! Display functions for command results

use super::formatters::{colorize_guess, status_letter};
use crate::commands::QueryResult;
use crate::core::{FeedbackMark, Word};
use crate::rank::Statistics;
use colored::Colorize;
use rustc_hash::FxHashMap;

const KEYBOARD_ROWS: [&[u8]; 3] = [b"qwertyuiop", b"asdfghjkl", b"zxcvbnm"];

/// Print the result of a one-shot query
pub fn print_query_result(result: &QueryResult, limit: usize) {
    println!("\n{}", "─".repeat(60).cyan());
    for observation in &result.history {
        println!("  {}", colorize_guess(observation));
    }
    if !result.history.is_empty() {
        println!("{}", "─".repeat(60).cyan());
    }

    print_candidates(&result.candidates, limit);
    print_statistics(&result.stats);
    print_letter_statuses(&result.statuses);
}

/// Print the candidate list, truncated to `limit` entries
pub fn print_candidates(candidates: &[Word], limit: usize) {
    if candidates.is_empty() {
        println!(
            "\n{}",
            "No candidates remain. Check the entered feedback.".red()
        );
        return;
    }

    println!(
        "\n{} {}",
        "Possible words:".bright_cyan().bold(),
        candidates.len().to_string().bright_yellow()
    );

    for chunk in candidates.iter().take(limit).collect::<Vec<_>>().chunks(8) {
        let row: Vec<&str> = chunk.iter().map(|w| w.text()).collect();
        println!("  {}", row.join("  "));
    }

    if candidates.len() > limit {
        println!(
            "  {}",
            format!("...and {} more", candidates.len() - limit).bright_black()
        );
    }
}

/// Print the top-letter statistics
pub fn print_statistics(stats: &Statistics) {
    if stats.top_letters.is_empty() {
        return;
    }

    println!("\n{}", "Top letters:".bright_cyan().bold());
    for stat in &stats.top_letters {
        let bar_width = (stat.percentage / 5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░".repeat(20_usize.saturating_sub(bar_width)).bright_black()
        );
        println!(
            "  {}: {} {:3} ({:3}%)",
            stat.letter.to_ascii_uppercase(),
            bar,
            stat.count,
            stat.percentage
        );
    }
}

/// Print the keyboard with letters colored by their best observed mark
pub fn print_letter_statuses(statuses: &FxHashMap<u8, FeedbackMark>) {
    if statuses.is_empty() {
        return;
    }

    println!("\n{}", "Keyboard:".bright_cyan().bold());
    for (row_idx, row) in KEYBOARD_ROWS.iter().enumerate() {
        print!("  {}", " ".repeat(row_idx));
        for &letter in *row {
            print!("{} ", status_letter(letter, statuses.get(&letter).copied()));
        }
        println!();
    }
}
