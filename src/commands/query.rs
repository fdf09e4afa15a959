//! One-shot query command
//!
//! Parses a set of observations, filters the dictionary against them, and
//! packages the ranked candidates with the derived display data.

use crate::core::{FeedbackMark, Observation, Word};
use crate::filter::filter_candidates;
use crate::rank::{RankMethod, Statistics, letter_statuses, rank, statistics};
use rustc_hash::FxHashMap;

/// Result of a one-shot query
#[derive(Debug)]
pub struct QueryResult {
    pub history: Vec<Observation>,
    /// Candidates in ranked display order
    pub candidates: Vec<Word>,
    pub stats: Statistics,
    pub statuses: FxHashMap<u8, FeedbackMark>,
}

/// Filter the dictionary against observations given as `guess=marks` strings
///
/// # Errors
///
/// Returns an error if any observation string fails to parse. A query whose
/// observations rule out every word is not an error; it returns an empty
/// candidate list.
pub fn run_query(
    dictionary: &[Word],
    observations: &[String],
    method: RankMethod,
) -> Result<QueryResult, String> {
    let history: Vec<Observation> = observations
        .iter()
        .map(|s| s.parse::<Observation>().map_err(|e| format!("'{s}': {e}")))
        .collect::<Result<_, _>>()?;

    let candidates = filter_candidates(dictionary, &history);
    let stats = statistics(&candidates);
    let statuses = letter_statuses(&history);
    let candidates = rank(&candidates, method);

    Ok(QueryResult {
        history,
        candidates,
        stats,
        statuses,
    })
}
