//! Puzzle authoring
//!
//! Drafts are checked against the authoring rules before export. The engine
//! never runs these checks itself; they exist for submissions and for
//! linting a dataset.

mod draft;

pub use draft::{
    CLUE_COUNT, DraftError, DraftErrors, ExportError, Field, MIN_EXTRA_WORDS, PuzzleDraft,
    PuzzleExport,
};

use crate::puzzles::Dataset;

/// Run the authoring checks over every puzzle of a dataset
///
/// Returns the failing dates with their reports, in date order.
#[must_use]
pub fn lint_dataset(dataset: &Dataset) -> Vec<(String, DraftErrors)> {
    dataset
        .dates()
        .filter_map(|date| {
            let puzzle = dataset.get(date)?;
            PuzzleDraft::from_puzzle(puzzle)
                .validate()
                .err()
                .map(|errors| (date.to_string(), errors))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_dataset_passes_lint() {
        let dataset = Dataset::embedded().unwrap();
        assert!(lint_dataset(&dataset).is_empty());
    }

    #[test]
    fn lint_reports_bad_puzzles_by_date() {
        let json = r#"{
            "2026-10-15": {
                "title": "",
                "clues": [{"id": 0, "question": "Q", "answer": "one two"}],
                "extraWords": []
            }
        }"#;
        let dataset = Dataset::from_json(json).unwrap();

        let report = lint_dataset(&dataset);
        assert_eq!(report.len(), 1);
        assert_eq!(report[0].0, "2026-10-15");
        assert!(report[0].1.has_error(Field::Title));
        assert!(report[0].1.has_error(Field::Answer(0)));
        assert!(report[0].1.has_error(Field::Question(3)));
    }
}
