//! Interactive session command
//!
//! Text-based interactive guessing session: the user plays the game
//! elsewhere and enters each guess with its feedback here; the session
//! shows the remaining candidates after every observation.

use crate::core::{Feedback, Observation, Word};
use crate::filter::{Dictionary, filter_candidates};
use crate::output::display::{print_candidates, print_letter_statuses, print_statistics};
use crate::output::formatters::{colorize_guess, share_text};
use crate::rank::{RankMethod, letter_statuses, rank, statistics};
use std::io::{self, Write as _};

/// Run the interactive session loop
///
/// # Errors
///
/// Returns an error if reading user input fails.
pub fn run_session(dictionary: &Dictionary, method: RankMethod, limit: usize) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                Wordle Guesser - Interactive Mode             ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Enter each guess with its feedback as guess=marks, e.g. stare=-GY-G");
    println!("  - G for green (correct position)");
    println!("  - Y for yellow (wrong position)");
    println!("  - - for gray (not in word)\n");
    println!(
        "Commands: 'quit' to exit, 'new' for new game, 'undo' to undo, 'share' for results text"
    );
    println!("Type 'win' when your last guess was the answer!\n");

    let mut history: Vec<Observation> = Vec::new();

    loop {
        let candidates = filter_candidates(dictionary.words(), &history);

        if candidates.is_empty() {
            println!("\nNo candidates remain! The entered feedback may be wrong.");
            println!("Type 'undo' to go back, or 'new' to start over.\n");
        } else {
            println!("────────────────────────────────────────────────────────────");
            println!(
                "Turn {}: {} candidates remaining",
                history.len() + 1,
                candidates.len()
            );
            println!("────────────────────────────────────────────────────────────");

            let ranked = rank(&candidates, method);
            print_candidates(&ranked, limit);
            print_statistics(&statistics(&candidates));
            print_letter_statuses(&letter_statuses(&history));
            println!();
        }

        let input = get_user_input("Observation (guess=marks) or command")?;

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                println!("\nBye!\n");
                return Ok(());
            }
            "new" | "n" => {
                history.clear();
                println!("\nNew game started!\n");
            }
            "undo" | "u" => {
                if history.pop().is_some() {
                    println!("\nUndone! Back to turn {}\n", history.len() + 1);
                } else {
                    println!("Nothing to undo!\n");
                }
            }
            "share" | "s" => {
                println!("\n{}\n", share_text(&history, &candidates));
            }
            "win" | "w" | "correct" | "solved" => {
                // Shortcut for all greens on the last entered guess
                if let Some(answer) = mark_last_solved(&mut history) {
                    if !celebrate(&mut history, &answer)? {
                        return Ok(());
                    }
                } else {
                    println!("Enter a guess first, then 'win' to mark it correct!\n");
                }
            }
            _ => match input.parse::<Observation>() {
                Ok(observation) => {
                    let solved = observation.is_solved();
                    let answer = observation.guess().clone();
                    let colored_row = colorize_guess(&observation);
                    history.push(observation);

                    if solved {
                        if !celebrate(&mut history, &answer)? {
                            return Ok(());
                        }
                    } else {
                        println!("  {colored_row}");
                    }
                }
                Err(e) => {
                    println!("Invalid input: {e}\n");
                }
            },
        }
    }
}

/// Replace the last observation's feedback with all hits, returning the answer.
///
/// Returns `None` when no guess has been entered yet.
fn mark_last_solved(history: &mut Vec<Observation>) -> Option<Word> {
    let answer = history.pop()?.guess().clone();
    history.push(Observation::new(answer.clone(), Feedback::ALL_HITS));
    Some(answer)
}

/// Show the solved celebration and ask whether to play again.
///
/// Returns `Ok(true)` to continue with a fresh game, `Ok(false)` to exit.
fn celebrate(history: &mut Vec<Observation>, answer: &Word) -> Result<bool, String> {
    println!("\nSolved in {} guesses!", history.len());
    for (i, obs) in history.iter().enumerate() {
        println!("  {}. {}", i + 1, colorize_guess(obs));
    }
    println!("\n{}\n", share_text(history, std::slice::from_ref(answer)));

    match get_user_input("Play again? (yes/no)")?.to_lowercase().as_str() {
        "yes" | "y" => {
            history.clear();
            println!("\nNew game started!\n");
            Ok(true)
        }
        _ => {
            println!("\nBye!\n");
            Ok(false)
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
