//! Word tokenization helpers
//!
//! Every word the engine compares is lower-cased and split on whitespace.

use super::Clue;
use rustc_hash::FxHashSet;

/// Split a phrase into lower-cased tokens
///
/// # Examples
/// ```
/// use bandadle::core::words::tokenize;
///
/// let tokens: Vec<String> = tokenize("  Big Apple\tPie ").collect();
/// assert_eq!(tokens, ["big", "apple", "pie"]);
/// ```
pub fn tokenize(phrase: &str) -> impl Iterator<Item = String> + '_ {
    phrase.split_whitespace().map(str::to_lowercase)
}

/// Join selected words into the sentence compared against answers
#[must_use]
pub fn sentence(words: &[String]) -> String {
    words.join(" ").to_lowercase()
}

/// Union of the answer tokens of the given clues
pub fn answer_words<'a>(clues: impl IntoIterator<Item = &'a Clue>) -> FxHashSet<String> {
    clues
        .into_iter()
        .flat_map(|clue| tokenize(&clue.answer).collect::<Vec<_>>())
        .collect()
}

/// Build the sorted, deduplicated word pool offered at the start of a puzzle
#[must_use]
pub fn word_pool(clues: &[Clue], extra_words: &[String]) -> Vec<String> {
    let mut pool: Vec<String> = answer_words(clues)
        .into_iter()
        .chain(extra_words.iter().map(|w| w.trim().to_lowercase()))
        .filter(|w| !w.is_empty())
        .collect();

    pool.sort_unstable();
    pool.dedup();
    pool
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentence_joins_with_single_spaces() {
        let words = vec!["Kevin".to_string(), "james".to_string(), "BOND".to_string()];
        assert_eq!(sentence(&words), "kevin james bond");
    }

    #[test]
    fn sentence_of_nothing_is_empty() {
        assert_eq!(sentence(&[]), "");
    }

    #[test]
    fn answer_words_spans_all_clues() {
        let clues = vec![Clue::new(0, "q", "Kevin James Bond"), Clue::new(1, "q", "big apple pie")];
        let words = answer_words(&clues);
        assert_eq!(words.len(), 6);
        assert!(words.contains("kevin"));
        assert!(words.contains("pie"));
    }

    #[test]
    fn word_pool_is_sorted_and_deduplicated() {
        let clues = vec![Clue::new(0, "q", "big apple pie")];
        let extras = vec![
            "Zebra".to_string(),
            "apple".to_string(),
            "  ".to_string(),
            "cider".to_string(),
        ];

        let pool = word_pool(&clues, &extras);
        assert_eq!(pool, ["apple", "big", "cider", "pie", "zebra"]);
    }
}
