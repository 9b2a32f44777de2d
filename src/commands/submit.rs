//! Validate a puzzle draft and export it

use crate::authoring::{ExportError, PuzzleDraft, PuzzleExport};
use crate::puzzles::Puzzle;
use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use colored::Colorize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Where an exported puzzle goes
#[derive(Debug, Clone, Copy)]
pub enum SubmitTarget<'a> {
    Stdout,
    /// Write the puzzle JSON to a file
    File(&'a Path),
    /// Add the puzzle to an existing dataset file
    Dataset(&'a Path),
}

/// Read a draft from `draft_path`, validate it and export it for `date`
///
/// # Errors
///
/// Returns an error if the draft cannot be read, breaks authoring rules, or
/// the export cannot be written.
pub fn run_submit(draft_path: &Path, date: NaiveDate, target: SubmitTarget<'_>) -> Result<()> {
    let json = fs::read_to_string(draft_path)
        .with_context(|| format!("Failed to read draft {}", draft_path.display()))?;
    let draft: PuzzleDraft = serde_json::from_str(&json)
        .with_context(|| format!("Draft {} is not a puzzle draft", draft_path.display()))?;

    let export = match draft.to_export(date) {
        Ok(export) => export,
        Err(ExportError::Invalid(errors)) => {
            println!("\n{}", "Draft has problems:".red().bold());
            for (field, error) in errors.iter() {
                println!("    {}: {error}", field.to_string().yellow());
            }
            bail!("{} problem(s) found in {}", errors.len(), draft_path.display());
        }
        Err(e) => return Err(e.into()),
    };

    match target {
        SubmitTarget::Stdout => {
            println!("{}", serde_json::to_string_pretty(&export)?);
        }
        SubmitTarget::File(path) => {
            fs::write(path, serde_json::to_string_pretty(&export)?)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("✅ Puzzle for {} written to {}", export.date, path.display());
        }
        SubmitTarget::Dataset(path) => {
            let dataset = fs::read_to_string(path)
                .with_context(|| format!("Failed to read dataset {}", path.display()))?;
            let date = export.date.clone();
            let merged = merge_into_dataset(&dataset, export)?;
            fs::write(path, merged)
                .with_context(|| format!("Failed to write dataset {}", path.display()))?;
            println!("✅ Puzzle for {date} added to {}", path.display());
        }
    }

    tracing::info!(date = %date, "Exported puzzle draft");
    Ok(())
}

/// Add an exported puzzle to dataset JSON, refusing to replace a date
///
/// # Errors
///
/// Returns an error if the dataset is malformed or already has the date.
pub fn merge_into_dataset(dataset_json: &str, export: PuzzleExport) -> Result<String> {
    let mut puzzles: BTreeMap<String, Puzzle> =
        serde_json::from_str(dataset_json).context("Dataset is malformed")?;

    let (date, puzzle) = export.into_entry();
    if puzzles.contains_key(&date) {
        bail!("Dataset already has a puzzle for {date}");
    }
    puzzles.insert(date, puzzle);

    Ok(serde_json::to_string_pretty(&puzzles)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzles::{Dataset, PUZZLES_JSON};
    use std::process;

    fn draft_json(answer_zero: &str) -> String {
        serde_json::json!({
            "title": "Test Day",
            "questions": ["q1", "q2", "q3", "q4"],
            "answers": [answer_zero, "big apple pie", "punk rock candy", "once upon a time"],
            "extraWords": [
                "anchor", "button", "candle", "castle", "dragon", "feather", "garden",
                "jungle", "lantern", "marble", "mirror", "pencil", "river", "thunder", "violet"
            ]
        })
        .to_string()
    }

    fn export_for(date: NaiveDate) -> PuzzleExport {
        let draft: PuzzleDraft = serde_json::from_str(&draft_json("kevin james bond")).unwrap();
        draft.to_export(date).unwrap()
    }

    #[test]
    fn merge_adds_new_date() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        let merged = merge_into_dataset(PUZZLES_JSON, export_for(date)).unwrap();

        let dataset = Dataset::from_json(&merged).unwrap();
        assert_eq!(dataset.latest_date(), "2026-10-18");
        assert_eq!(dataset.get("2026-10-18").unwrap().title, "Test Day");
        assert!(dataset.contains("2026-10-15"));
    }

    #[test]
    fn merge_refuses_existing_date() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
        let err = merge_into_dataset(PUZZLES_JSON, export_for(date)).unwrap_err();
        assert!(err.to_string().contains("already has a puzzle"));
    }

    #[test]
    fn submit_writes_export_file() {
        let dir = std::env::temp_dir().join(format!("bandadle-submit-{}", process::id()));
        fs::create_dir_all(&dir).unwrap();
        let draft = dir.join("draft.json");
        let out = dir.join("out.json");
        fs::write(&draft, draft_json("kevin james bond")).unwrap();

        let date = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        run_submit(&draft, date, SubmitTarget::File(&out)).unwrap();

        let written: PuzzleExport =
            serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(written.date, "2026-10-18");
        assert_eq!(written.clues.len(), 4);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn submit_rejects_invalid_draft() {
        let dir = std::env::temp_dir().join(format!("bandadle-submit-bad-{}", process::id()));
        fs::create_dir_all(&dir).unwrap();
        let draft = dir.join("draft.json");
        fs::write(&draft, draft_json("kevin bond")).unwrap();

        let date = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        let err = run_submit(&draft, date, SubmitTarget::Stdout).unwrap_err();
        assert!(err.to_string().contains("1 problem(s)"));

        fs::remove_dir_all(&dir).unwrap();
    }
}
