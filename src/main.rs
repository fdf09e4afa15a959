//! Wordle Guesser - CLI
//!
//! Filters a dictionary of five-letter words against guess feedback and
//! ranks what remains.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use wordle_guesser::{
    commands::{run_query, run_session},
    filter::Dictionary,
    output::print_query_result,
    rank::RankMethod,
    wordlists::{DEFAULT_WORDS, loader},
};

#[derive(Parser)]
#[command(
    name = "wordle_guesser",
    about = "Find the words consistent with your Wordle guesses and feedback",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Sort order: alphabetical (default), frequency, positional
    #[arg(short, long, global = true, default_value = "alphabetical")]
    sort: String,

    /// Wordlist: 'default' (embedded list) or path to a word file
    #[arg(short = 'w', long, global = true, default_value = "default")]
    wordlist: String,

    /// Maximum candidates to display
    #[arg(short, long, global = true, default_value = "24")]
    limit: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive session (default)
    Session,

    /// One-shot query from observations given as guess=marks
    Query {
        /// Observations, e.g. stare=-GY-G crone=G--Y-
        observations: Vec<String>,
    },
}

/// Load the dictionary based on the -w flag
///
/// Rejected entries are reported to stderr; an unreadable file is an error.
fn load_dictionary(wordlist_mode: &str) -> Result<Dictionary> {
    let (dictionary, rejected) = match wordlist_mode {
        "default" => return Ok(loader::dictionary_from_slice(DEFAULT_WORDS)),
        path => loader::load_from_file(path)
            .with_context(|| format!("Failed to read wordlist '{path}'"))?,
    };

    for entry in &rejected {
        eprintln!("Skipping '{}': {}", entry.entry, entry.reason);
    }

    if dictionary.is_empty() {
        bail!("Wordlist '{wordlist_mode}' contains no valid words");
    }

    Ok(dictionary)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let dictionary = load_dictionary(&cli.wordlist)?;
    let method = RankMethod::from_name(&cli.sort);

    // Default to Session mode if no command given
    let command = cli.command.unwrap_or(Commands::Session);

    match command {
        Commands::Session => {
            run_session(&dictionary, method, cli.limit).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Query { observations } => {
            let result = run_query(dictionary.words(), &observations, method)
                .map_err(|e| anyhow::anyhow!(e))?;
            print_query_result(&result, cli.limit);
            Ok(())
        }
    }
}
