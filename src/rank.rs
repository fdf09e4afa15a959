//! Candidate ranking and derived display data
//!
//! Everything here is a pure function recomputed from the current candidate
//! set or observation history. None of it feeds back into filtering: the
//! letter-status map and statistics exist only for display, and a ranking
//! never adds or removes candidates.

use crate::core::{FeedbackMark, Observation, WORD_LEN, Word};
use rustc_hash::FxHashMap;
use std::cmp::Reverse;

/// How to order the candidate set for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RankMethod {
    /// Lexicographic ascending
    #[default]
    Alphabetical,
    /// Words whose distinct letters appear in the most candidates first
    OverallFrequency,
    /// Words whose letters are most common at their positions first
    PositionalFrequency,
}

impl RankMethod {
    /// Create a rank method from a name string
    ///
    /// Supported names: "alphabetical", "frequency", "positional".
    /// Defaults to alphabetical if the name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "frequency" | "overall" => Self::OverallFrequency,
            "positional" | "position" => Self::PositionalFrequency,
            _ => Self::Alphabetical,
        }
    }
}

/// Count, for each letter, how many candidate words contain it
///
/// A letter repeated within one word counts that word once.
fn containing_word_counts(candidates: &[Word]) -> [usize; 26] {
    let mut counts = [0usize; 26];
    for word in candidates {
        for letter in word.distinct_letters() {
            counts[(letter - b'a') as usize] += 1;
        }
    }
    counts
}

/// Count, for each (position, letter) pair, how many candidates have that
/// letter at that position
fn positional_counts(candidates: &[Word]) -> [[usize; 26]; WORD_LEN] {
    let mut counts = [[0usize; 26]; WORD_LEN];
    for word in candidates {
        for (i, &letter) in word.chars().iter().enumerate() {
            counts[i][(letter - b'a') as usize] += 1;
        }
    }
    counts
}

/// Order candidates for display
///
/// A stable total order: two words with equal score keep their relative
/// order from the input. Frequency scores are computed against the
/// candidate set itself, so the "best" words are those sharing the most
/// letters with the rest of the field.
///
/// # Examples
/// ```
/// use wordle_guesser::core::Word;
/// use wordle_guesser::rank::{RankMethod, rank};
///
/// let candidates: Vec<Word> = ["crate", "about"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
///
/// let ordered = rank(&candidates, RankMethod::Alphabetical);
/// assert_eq!(ordered[0].text(), "about");
/// ```
#[must_use]
pub fn rank(candidates: &[Word], method: RankMethod) -> Vec<Word> {
    let mut ordered = candidates.to_vec();

    match method {
        RankMethod::Alphabetical => {
            ordered.sort();
        }
        RankMethod::OverallFrequency => {
            let counts = containing_word_counts(candidates);
            ordered.sort_by_cached_key(|word| {
                let score: usize = word
                    .distinct_letters()
                    .map(|letter| counts[(letter - b'a') as usize])
                    .sum();
                Reverse(score)
            });
        }
        RankMethod::PositionalFrequency => {
            let counts = positional_counts(candidates);
            ordered.sort_by_cached_key(|word| {
                let score: usize = word
                    .chars()
                    .iter()
                    .enumerate()
                    .map(|(i, &letter)| counts[i][(letter - b'a') as usize])
                    .sum();
                Reverse(score)
            });
        }
    }

    ordered
}

/// Derive the best mark ever observed for each guessed letter
///
/// `Hit` dominates `Present` dominates `Absent`. This is a display-only
/// view (keyboard coloring); the compatibility evaluator never consults it.
#[must_use]
pub fn letter_statuses(history: &[Observation]) -> FxHashMap<u8, FeedbackMark> {
    let mut statuses: FxHashMap<u8, FeedbackMark> = FxHashMap::default();

    for observation in history {
        for (i, &letter) in observation.guess().chars().iter().enumerate() {
            let mark = observation.feedback().mark_at(i);
            statuses
                .entry(letter)
                .and_modify(|best| {
                    if mark.priority() > best.priority() {
                        *best = mark;
                    }
                })
                .or_insert(mark);
        }
    }

    statuses
}

/// One entry of the top-letters statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterStat {
    pub letter: char,
    /// Number of candidate words containing the letter
    pub count: usize,
    /// Rounded percentage of candidates containing the letter
    pub percentage: u32,
}

/// Aggregate statistics over the current candidate set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total: usize,
    pub top_letters: Vec<LetterStat>,
}

/// Number of letters reported in [`Statistics::top_letters`]
pub const TOP_LETTERS: usize = 5;

/// Summarize the candidate set: total count and the most frequent letters
///
/// Letters are ranked by how many candidates contain them (repeats within
/// a word count once), ties broken alphabetically. An empty candidate set
/// yields zero/empty results.
#[must_use]
pub fn statistics(candidates: &[Word]) -> Statistics {
    let total = candidates.len();
    if total == 0 {
        return Statistics {
            total: 0,
            top_letters: Vec::new(),
        };
    }

    let counts = containing_word_counts(candidates);

    let mut ranked: Vec<(u8, usize)> = counts
        .iter()
        .enumerate()
        .filter(|&(_, &count)| count > 0)
        .map(|(idx, &count)| (b'a' + idx as u8, count))
        .collect();
    ranked.sort_by_key(|&(letter, count)| (Reverse(count), letter));

    let top_letters = ranked
        .into_iter()
        .take(TOP_LETTERS)
        .map(|(letter, count)| LetterStat {
            letter: letter as char,
            count,
            percentage: ((count as f64 / total as f64) * 100.0).round() as u32,
        })
        .collect();

    Statistics { total, top_letters }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Feedback;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    fn texts(words: &[Word]) -> Vec<&str> {
        words.iter().map(Word::text).collect()
    }

    #[test]
    fn from_name_recognizes_methods() {
        assert_eq!(RankMethod::from_name("frequency"), RankMethod::OverallFrequency);
        assert_eq!(
            RankMethod::from_name("positional"),
            RankMethod::PositionalFrequency
        );
        assert_eq!(RankMethod::from_name("alphabetical"), RankMethod::Alphabetical);
        assert_eq!(RankMethod::from_name("???"), RankMethod::Alphabetical);
    }

    #[test]
    fn alphabetical_sorts_lexicographically() {
        let candidates = words(&["tiger", "about", "stare", "crate"]);
        let ordered = rank(&candidates, RankMethod::Alphabetical);
        assert_eq!(texts(&ordered), vec!["about", "crate", "stare", "tiger"]);
    }

    #[test]
    fn overall_frequency_counts_distinct_letters_once() {
        // e appears in three words; speed's double e must not double-count
        // either in the letter counts or in speed's own score
        let candidates = words(&["speed", "crate", "erase", "blunt"]);
        let counts = containing_word_counts(&candidates);

        assert_eq!(counts[(b'e' - b'a') as usize], 3);
        assert_eq!(counts[(b's' - b'a') as usize], 2);
        assert_eq!(counts[(b'b' - b'a') as usize], 1);
    }

    #[test]
    fn overall_frequency_prefers_common_letters() {
        // crate shares e/a/r/t with the others; blunt shares almost nothing
        let candidates = words(&["blunt", "crate", "erase", "stare"]);
        let ordered = rank(&candidates, RankMethod::OverallFrequency);

        // stare 14, crate 13, erase 11, blunt 7
        assert_eq!(texts(&ordered), vec!["stare", "crate", "erase", "blunt"]);
    }

    #[test]
    fn positional_frequency_prefers_common_positions() {
        // crate and stare score 10, grasp and spike score 8; ties keep
        // input order
        let candidates = words(&["crate", "stare", "grasp", "spike"]);
        let ordered = rank(&candidates, RankMethod::PositionalFrequency);

        assert_eq!(texts(&ordered), vec!["crate", "stare", "grasp", "spike"]);
    }

    #[test]
    fn ranking_is_stable_on_ties() {
        // Anagram pairs score identically under overall frequency
        let candidates = words(&["ocean", "canoe", "crate", "trace"]);
        let ordered = rank(&candidates, RankMethod::OverallFrequency);

        let ocean_pos = ordered.iter().position(|w| w.text() == "ocean").unwrap();
        let canoe_pos = ordered.iter().position(|w| w.text() == "canoe").unwrap();
        let crate_pos = ordered.iter().position(|w| w.text() == "crate").unwrap();
        let trace_pos = ordered.iter().position(|w| w.text() == "trace").unwrap();

        assert!(ocean_pos < canoe_pos, "tie order not preserved");
        assert!(crate_pos < trace_pos, "tie order not preserved");
    }

    #[test]
    fn ranking_never_changes_membership() {
        let candidates = words(&["tiger", "about", "stare", "crate"]);
        for method in [
            RankMethod::Alphabetical,
            RankMethod::OverallFrequency,
            RankMethod::PositionalFrequency,
        ] {
            let ordered = rank(&candidates, method);
            assert_eq!(ordered.len(), candidates.len());
            for word in &candidates {
                assert!(ordered.contains(word));
            }
        }
    }

    #[test]
    fn rank_empty_candidates() {
        for method in [
            RankMethod::Alphabetical,
            RankMethod::OverallFrequency,
            RankMethod::PositionalFrequency,
        ] {
            assert!(rank(&[], method).is_empty());
        }
    }

    #[test]
    fn letter_statuses_best_mark_wins() {
        let history = vec![
            "stare=-GY-G".parse::<Observation>().unwrap(),
            "tides=G----".parse::<Observation>().unwrap(),
        ];
        let statuses = letter_statuses(&history);

        // t: hit in both observations (position 1 of stare, 0 of tides)
        assert_eq!(statuses.get(&b't'), Some(&FeedbackMark::Hit));
        // a: present in stare
        assert_eq!(statuses.get(&b'a'), Some(&FeedbackMark::Present));
        // s: absent in both
        assert_eq!(statuses.get(&b's'), Some(&FeedbackMark::Absent));
        // e: hit in stare, absent in tides; hit must not be downgraded
        assert_eq!(statuses.get(&b'e'), Some(&FeedbackMark::Hit));
        // unguessed letters have no status
        assert_eq!(statuses.get(&b'z'), None);
    }

    #[test]
    fn letter_statuses_upgrade_only() {
        // Same letter absent first, then present, then hit
        let history = vec![
            "loums=-----".parse::<Observation>().unwrap(),
            "login=-Y---".parse::<Observation>().unwrap(),
            "oddly=G----".parse::<Observation>().unwrap(),
        ];
        let statuses = letter_statuses(&history);
        assert_eq!(statuses.get(&b'o'), Some(&FeedbackMark::Hit));
    }

    #[test]
    fn letter_statuses_empty_history() {
        assert!(letter_statuses(&[]).is_empty());
    }

    #[test]
    fn statistics_counts_and_percentages() {
        let candidates = words(&["crate", "stare", "erase", "about"]);
        let stats = statistics(&candidates);

        assert_eq!(stats.total, 4);
        assert_eq!(stats.top_letters.len(), TOP_LETTERS);

        // a appears in all four words; e/r/t tie at three and break
        // alphabetically
        let top: Vec<char> = stats.top_letters.iter().map(|s| s.letter).collect();
        assert_eq!(top, vec!['a', 'e', 'r', 't', 's']);
        assert_eq!(stats.top_letters[0].count, 4);
        assert_eq!(stats.top_letters[0].percentage, 100);

        // r appears in crate, stare, erase
        let r = stats.top_letters.iter().find(|s| s.letter == 'r').unwrap();
        assert_eq!(r.count, 3);
        assert_eq!(r.percentage, 75);
    }

    #[test]
    fn statistics_repeated_letters_count_word_once() {
        let candidates = words(&["erase", "speed"]);
        let stats = statistics(&candidates);

        let e = stats.top_letters.iter().find(|s| s.letter == 'e').unwrap();
        assert_eq!(e.count, 2);
        assert_eq!(e.percentage, 100);
    }

    #[test]
    fn statistics_ties_break_alphabetically() {
        let candidates = words(&["crate"]);
        let stats = statistics(&candidates);

        // All five letters tie at count 1
        let top: Vec<char> = stats.top_letters.iter().map(|s| s.letter).collect();
        assert_eq!(top, vec!['a', 'c', 'e', 'r', 't']);
    }

    #[test]
    fn statistics_empty_candidates() {
        let stats = statistics(&[]);
        assert_eq!(stats.total, 0);
        assert!(stats.top_letters.is_empty());
    }

    #[test]
    fn statistics_percentage_rounds_to_nearest() {
        // 1 of 3 words contain b: 33.33 rounds to 33; 2 of 3 contain t:
        // 66.67 rounds to 67
        let candidates = words(&["about", "crate", "snail"]);
        let stats = statistics(&candidates);

        let b = stats.top_letters.iter().find(|s| s.letter == 'b');
        let t = stats.top_letters.iter().find(|s| s.letter == 't').unwrap();
        assert_eq!(t.count, 2);
        assert_eq!(t.percentage, 67);
        if let Some(b) = b {
            assert_eq!(b.percentage, 33);
        }
    }

    #[test]
    fn statuses_from_scored_history_match_game() {
        let answer = Word::new("crate").unwrap();
        let guess = Word::new("caret").unwrap();
        let feedback = Feedback::score(&guess, &answer);
        let history = vec![Observation::new(guess, feedback)];

        let statuses = letter_statuses(&history);
        assert_eq!(statuses.get(&b'c'), Some(&FeedbackMark::Hit));
        assert_eq!(statuses.get(&b'a'), Some(&FeedbackMark::Present));
    }
}
