//! Puzzle dataset loading and date resolution
//!
//! A dataset maps `YYYY-MM-DD` keys to one puzzle each. Keys sort
//! lexicographically, so the last key is always the latest puzzle.

use crate::core::words::word_pool;
use crate::core::{Clue, ClueId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Key format used by the dataset
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Errors raised while loading a dataset
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read puzzle dataset {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed puzzle dataset: {0}")]
    Json(#[from] serde_json::Error),
    #[error("puzzle dataset contains no puzzles")]
    Empty,
}

/// A clue as authored in the dataset, without play state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClueSpec {
    pub id: ClueId,
    pub question: String,
    pub answer: String,
}

impl ClueSpec {
    #[must_use]
    pub fn to_clue(&self) -> Clue {
        Clue::new(self.id, self.question.clone(), self.answer.clone())
    }
}

/// One day's puzzle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Puzzle {
    pub title: String,
    pub clues: Vec<ClueSpec>,
    #[serde(default)]
    pub extra_words: Vec<String>,
}

impl Puzzle {
    /// Fresh, unsolved clues in id order
    #[must_use]
    pub fn clues(&self) -> Vec<Clue> {
        let mut clues: Vec<Clue> = self.clues.iter().map(ClueSpec::to_clue).collect();
        clues.sort_by_key(|clue| clue.id);
        clues
    }

    /// Initial word pool: answer words plus extra words, sorted and deduplicated
    #[must_use]
    pub fn word_pool(&self) -> Vec<String> {
        word_pool(&self.clues(), &self.extra_words)
    }
}

/// All known puzzles keyed by date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    puzzles: BTreeMap<String, Puzzle>,
}

impl Dataset {
    /// Build a dataset from `(date, puzzle)` pairs
    ///
    /// # Errors
    ///
    /// Returns `DatasetError::Empty` if no puzzles are given.
    pub fn from_puzzles(
        puzzles: impl IntoIterator<Item = (String, Puzzle)>,
    ) -> Result<Self, DatasetError> {
        let puzzles: BTreeMap<String, Puzzle> = puzzles.into_iter().collect();
        if puzzles.is_empty() {
            return Err(DatasetError::Empty);
        }
        Ok(Self { puzzles })
    }

    /// Parse a dataset from its JSON form
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON does not have the dataset shape or holds
    /// no puzzles.
    pub fn from_json(json: &str) -> Result<Self, DatasetError> {
        let puzzles: BTreeMap<String, Puzzle> = serde_json::from_str(json)?;
        Self::from_puzzles(puzzles)
    }

    /// The dataset bundled into the binary
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled JSON is malformed.
    pub fn embedded() -> Result<Self, DatasetError> {
        Self::from_json(super::PUZZLES_JSON)
    }

    /// Load a dataset from a JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid dataset.
    ///
    /// # Examples
    /// ```no_run
    /// use bandadle::puzzles::Dataset;
    ///
    /// let dataset = Dataset::load_from_file("data/puzzles.json").unwrap();
    /// println!("Loaded {} puzzles", dataset.len());
    /// ```
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let dataset = Self::from_json(&content)?;
        tracing::info!(
            "Loaded {} puzzles from {}",
            dataset.len(),
            path.display()
        );
        Ok(dataset)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.puzzles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.puzzles.is_empty()
    }

    /// Dates in ascending order
    pub fn dates(&self) -> impl Iterator<Item = &str> {
        self.puzzles.keys().map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, date: &str) -> bool {
        self.puzzles.contains_key(date)
    }

    #[must_use]
    pub fn get(&self, date: &str) -> Option<&Puzzle> {
        self.puzzles.get(date)
    }

    /// The lexicographically last date
    ///
    /// # Panics
    /// Will not panic - construction guarantees at least one puzzle.
    #[must_use]
    pub fn latest_date(&self) -> &str {
        self.puzzles
            .keys()
            .next_back()
            .map(String::as_str)
            .expect("dataset is never empty")
    }

    /// Puzzle for `date`, falling back to the latest puzzle for unknown dates
    ///
    /// Returns the date actually used along with the puzzle.
    ///
    /// # Panics
    /// Will not panic - construction guarantees at least one puzzle.
    #[must_use]
    pub fn puzzle_or_latest(&self, date: &str) -> (&str, &Puzzle) {
        self.puzzles
            .get_key_value(date)
            .or_else(|| self.puzzles.last_key_value())
            .map(|(key, puzzle)| (key.as_str(), puzzle))
            .expect("dataset is never empty")
    }

    /// Pick the puzzle date to play
    ///
    /// A well-formed `requested` date present in the dataset wins. Otherwise
    /// today's date is used if present, and the latest date if not.
    ///
    /// # Examples
    /// ```
    /// use bandadle::puzzles::Dataset;
    /// use chrono::NaiveDate;
    ///
    /// let dataset = Dataset::embedded().unwrap();
    /// let today = NaiveDate::from_ymd_opt(1999, 1, 1).unwrap();
    ///
    /// // Unknown today and a malformed override both fall back to the latest puzzle
    /// assert_eq!(dataset.resolve_date(today, Some("yesterday")), dataset.latest_date());
    /// ```
    #[must_use]
    pub fn resolve_date(&self, today: NaiveDate, requested: Option<&str>) -> &str {
        if let Some(requested) = requested {
            match parse_puzzle_date(requested) {
                Some(_) if self.contains(requested) => {
                    return self.puzzle_or_latest(requested).0;
                }
                Some(_) => tracing::debug!("No puzzle for requested date {requested}"),
                None => tracing::debug!("Ignoring malformed date override {requested:?}"),
            }
        }

        let today = today.format(DATE_FORMAT).to_string();
        self.puzzle_or_latest(&today).0
    }

    /// Initial word pool for `date` (or the latest puzzle)
    #[must_use]
    pub fn available_words(&self, date: &str) -> Vec<String> {
        self.puzzle_or_latest(date).1.word_pool()
    }
}

/// Parse a strict `YYYY-MM-DD` date
///
/// # Examples
/// ```
/// use bandadle::puzzles::parse_puzzle_date;
///
/// assert!(parse_puzzle_date("2026-10-17").is_some());
/// assert!(parse_puzzle_date("2026-1-7").is_none());
/// assert!(parse_puzzle_date("2026-02-30").is_none());
/// ```
#[must_use]
pub fn parse_puzzle_date(text: &str) -> Option<NaiveDate> {
    let well_formed = text.len() == 10
        && text
            .char_indices()
            .all(|(i, c)| if i == 4 || i == 7 { c == '-' } else { c.is_ascii_digit() });

    if well_formed {
        NaiveDate::parse_from_str(text, DATE_FORMAT).ok()
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn puzzle(title: &str) -> Puzzle {
        Puzzle {
            title: title.to_string(),
            clues: vec![
                ClueSpec {
                    id: 1,
                    question: "Dessert".to_string(),
                    answer: "Big Apple Pie".to_string(),
                },
                ClueSpec {
                    id: 0,
                    question: "Spy".to_string(),
                    answer: "Kevin James Bond".to_string(),
                },
            ],
            extra_words: vec!["river".to_string(), "Apple".to_string()],
        }
    }

    fn dataset() -> Dataset {
        Dataset::from_puzzles([
            ("2026-10-01".to_string(), puzzle("First")),
            ("2026-10-03".to_string(), puzzle("Third")),
            ("2026-10-02".to_string(), puzzle("Second")),
        ])
        .unwrap()
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, d).unwrap()
    }

    #[test]
    fn empty_dataset_is_rejected() {
        assert!(matches!(Dataset::from_json("{}"), Err(DatasetError::Empty)));
    }

    #[test]
    fn malformed_json_is_rejected() {
        assert!(matches!(
            Dataset::from_json("[1, 2, 3]"),
            Err(DatasetError::Json(_))
        ));
    }

    #[test]
    fn missing_extra_words_default_to_empty() {
        let json = r#"{"2026-10-01": {"title": "T", "clues": [{"id": 0, "question": "q", "answer": "a b c"}]}}"#;
        let dataset = Dataset::from_json(json).unwrap();
        assert!(dataset.get("2026-10-01").unwrap().extra_words.is_empty());
    }

    #[test]
    fn unsorted_and_reindented_json_loads_in_date_order() {
        let json = "{\n    \"2026-10-02\": {\"title\": \"B\", \"clues\": []},\n    \"2026-10-01\": {\"title\": \"A\", \"clues\": []}\n}";
        let dataset = Dataset::from_json(json).unwrap();
        assert_eq!(dataset.len(), 2);
        assert!(!dataset.is_empty());
        assert_eq!(dataset.dates().collect::<Vec<_>>(), ["2026-10-01", "2026-10-02"]);
    }

    #[test]
    fn latest_date_is_lexicographic_max() {
        assert_eq!(dataset().latest_date(), "2026-10-03");
    }

    #[test]
    fn resolve_prefers_valid_override() {
        let dataset = dataset();
        assert_eq!(dataset.resolve_date(day(3), Some("2026-10-01")), "2026-10-01");
    }

    #[test]
    fn resolve_ignores_unknown_override() {
        let dataset = dataset();
        assert_eq!(dataset.resolve_date(day(2), Some("2026-09-30")), "2026-10-02");
    }

    #[test]
    fn resolve_ignores_malformed_override() {
        let dataset = dataset();
        assert_eq!(dataset.resolve_date(day(2), Some("10/01/2026")), "2026-10-02");
        assert_eq!(dataset.resolve_date(day(2), Some("")), "2026-10-02");
    }

    #[test]
    fn resolve_uses_today_when_present() {
        assert_eq!(dataset().resolve_date(day(2), None), "2026-10-02");
    }

    #[test]
    fn resolve_falls_back_to_latest() {
        assert_eq!(dataset().resolve_date(day(20), None), "2026-10-03");
    }

    #[test]
    fn puzzle_or_latest_reports_date_used() {
        let dataset = dataset();
        let (date, puzzle) = dataset.puzzle_or_latest("1999-01-01");
        assert_eq!(date, "2026-10-03");
        assert_eq!(puzzle.title, "Third");
    }

    #[test]
    fn clues_are_sorted_by_id() {
        let clues = puzzle("T").clues();
        assert_eq!(clues[0].id, 0);
        assert_eq!(clues[1].id, 1);
        assert!(clues.iter().all(|c| !c.solved));
    }

    #[test]
    fn available_words_merges_answers_and_extras() {
        let words = dataset().available_words("2026-10-01");
        assert_eq!(
            words,
            ["apple", "big", "bond", "james", "kevin", "pie", "river"]
        );
    }

    #[test]
    fn load_from_missing_file_is_io_error() {
        let result = Dataset::load_from_file("/definitely/not/here.json");
        assert!(matches!(result, Err(DatasetError::Io { .. })));
    }

    #[test]
    fn date_parsing_is_strict() {
        assert_eq!(parse_puzzle_date("2026-10-17"), Some(day(17)));
        assert!(parse_puzzle_date("2026-10-17T00:00").is_none());
        assert!(parse_puzzle_date("20261017").is_none());
        assert!(parse_puzzle_date("2026-13-01").is_none());
    }
}
