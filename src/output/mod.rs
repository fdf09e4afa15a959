//! Terminal output formatting

pub mod display;
pub mod formatters;

pub use display::{print_letter_statuses, print_query_result, print_statistics};
pub use formatters::{colorize_guess, share_text};
