//! Typed word entry
//!
//! Resolves free text against the available words: an exact match wins,
//! otherwise a prefix shared by exactly one word.

use super::{PuzzleSession, Solve};

/// Outcome of committing typed text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// The text resolved to a word, which was selected
    Selected {
        word: String,
        solve: Option<Solve>,
    },
    /// Nothing matched; the session is untouched
    Unresolved,
}

impl PuzzleSession {
    /// Available words starting with `prefix`, in display order
    ///
    /// # Examples
    /// ```
    /// use bandadle::engine::PuzzleSession;
    /// use bandadle::puzzles::Dataset;
    /// use chrono::NaiveDate;
    ///
    /// let dataset = Dataset::embedded().unwrap();
    /// let today = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
    /// let session = PuzzleSession::initialize(&dataset, "2026-10-17", today);
    ///
    /// assert_eq!(session.suggestions("MOV"), ["movie"]);
    /// assert!(session.suggestions(" ").is_empty());
    /// ```
    #[must_use]
    pub fn suggestions(&self, prefix: &str) -> Vec<&str> {
        let prefix = prefix.trim().to_lowercase();
        if prefix.is_empty() {
            return Vec::new();
        }

        self.available_words
            .iter()
            .filter(|word| word.to_lowercase().starts_with(&prefix))
            .map(String::as_str)
            .collect()
    }

    /// Resolve typed text to one available word
    #[must_use]
    pub fn resolve_entry(&self, input: &str) -> Option<&str> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }

        let lowered = input.to_lowercase();
        if let Some(exact) = self
            .available_words
            .iter()
            .find(|word| word.to_lowercase() == lowered)
        {
            return Some(exact);
        }

        match self.suggestions(input).as_slice() {
            [only] => Some(*only),
            _ => None,
        }
    }

    /// Resolve typed text and select the resulting word
    pub fn enter_text(&mut self, input: &str) -> Entry {
        let Some(word) = self.resolve_entry(input).map(str::to_string) else {
            tracing::debug!("Typed text {input:?} matches no available word");
            return Entry::Unresolved;
        };

        let solve = self.select_word(word.clone());
        Entry::Selected { word, solve }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::fixtures::session;

    #[test]
    fn suggestions_match_prefix_case_insensitively() {
        let session = session();
        assert_eq!(session.suggestions("CA"), ["candle", "candy", "castle"]);
        assert_eq!(session.suggestions("can"), ["candle", "candy"]);
        assert!(session.suggestions("zz").is_empty());
    }

    #[test]
    fn empty_input_has_no_suggestions() {
        let session = session();
        assert!(session.suggestions("").is_empty());
        assert!(session.suggestions("   ").is_empty());
    }

    #[test]
    fn exact_match_beats_longer_prefix_matches() {
        let session = session();
        // "a" is an answer word and also prefixes "anchor" and "apple"
        assert_eq!(session.resolve_entry("a"), Some("a"));
        assert_eq!(session.resolve_entry("ROCK"), Some("rock"));
    }

    #[test]
    fn unique_prefix_resolves() {
        let session = session();
        assert_eq!(session.resolve_entry("thun"), Some("thunder"));
    }

    #[test]
    fn ambiguous_prefix_does_not_resolve() {
        let session = session();
        assert_eq!(session.resolve_entry("can"), None);
    }

    #[test]
    fn unknown_text_leaves_session_untouched() {
        let mut session = session();
        let before = session.clone();
        assert_eq!(session.enter_text("xylophone"), Entry::Unresolved);
        assert_eq!(session.enter_text(""), Entry::Unresolved);
        assert_eq!(session, before);
    }

    #[test]
    fn typed_words_build_and_solve_sentence() {
        let mut session = session();
        assert!(matches!(
            session.enter_text("Kev"),
            Entry::Selected { ref word, solve: None } if word == "kevin"
        ));
        session.enter_text("james");

        match session.enter_text("bond") {
            Entry::Selected {
                solve: Some(solve), ..
            } => assert_eq!(solve.clue_id, 0),
            other => panic!("expected a solve, got {other:?}"),
        }
        assert!(session.resolve_entry("kevin").is_none());
    }

    #[test]
    fn retired_words_are_no_longer_suggested() {
        let mut session = session();
        for word in ["big", "apple", "pie"] {
            session.enter_text(word);
        }
        assert!(session.suggestions("app").is_empty());
    }
}
