//! List the puzzles in a dataset

use crate::puzzles::Dataset;
use chrono::NaiveDate;
use colored::Colorize;

/// One dataset entry as listed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateEntry {
    pub date: String,
    pub title: String,
    /// Whether this is the puzzle `today` resolves to
    pub current: bool,
}

/// Every puzzle in date order, marking the one played today
#[must_use]
pub fn list_dates(dataset: &Dataset, today: NaiveDate) -> Vec<DateEntry> {
    let current = dataset.resolve_date(today, None);
    dataset
        .dates()
        .filter_map(|date| {
            dataset.get(date).map(|puzzle| DateEntry {
                date: date.to_string(),
                title: puzzle.title.clone(),
                current: date == current,
            })
        })
        .collect()
}

pub fn print_dates(entries: &[DateEntry]) {
    println!("\n{}", "Available puzzles:".bright_cyan().bold());
    for entry in entries {
        if entry.current {
            println!(
                "  {} {}  {}",
                "▶".bright_green(),
                entry.date.bright_white().bold(),
                entry.title.bright_yellow()
            );
        } else {
            println!("    {}  {}", entry.date, entry.title);
        }
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_dates_mark_todays_puzzle() {
        let dataset = Dataset::embedded().unwrap();
        let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();

        let entries = list_dates(&dataset, today);
        assert_eq!(entries.len(), dataset.len());
        assert!(entries.windows(2).all(|w| w[0].date < w[1].date));

        let current: Vec<&str> = entries
            .iter()
            .filter(|e| e.current)
            .map(|e| e.date.as_str())
            .collect();
        assert_eq!(current, ["2026-10-16"]);
    }

    #[test]
    fn unknown_day_marks_latest_puzzle() {
        let dataset = Dataset::embedded().unwrap();
        let today = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap();

        let entries = list_dates(&dataset, today);
        assert!(entries.last().unwrap().current);
        assert_eq!(entries.iter().filter(|e| e.current).count(), 1);
    }
}
