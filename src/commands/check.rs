//! Lint a dataset against the authoring rules

use crate::authoring::lint_dataset;
use crate::puzzles::Dataset;
use anyhow::{Result, bail};
use colored::Colorize;

/// Check every puzzle and print a report
///
/// # Errors
///
/// Returns an error if any puzzle breaks an authoring rule.
pub fn run_check(dataset: &Dataset) -> Result<()> {
    let failures = lint_dataset(dataset);

    for (date, errors) in &failures {
        println!("\n{} {}", "✗".red().bold(), date.bright_white().bold());
        for (field, error) in errors.iter() {
            println!("    {}: {error}", field.to_string().yellow());
        }
    }

    if failures.is_empty() {
        println!(
            "{}",
            format!("✅ All {} puzzles pass the authoring checks", dataset.len())
                .green()
                .bold()
        );
        return Ok(());
    }

    bail!(
        "{} of {} puzzles failed the authoring checks",
        failures.len(),
        dataset.len()
    )
}
