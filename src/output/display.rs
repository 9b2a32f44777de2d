//! Colored printing for the line-mode game

use super::formatters::{create_progress_bar, format_time, share_text};
use crate::core::{Clue, ClueId, ClueStatus};
use crate::engine::PuzzleSession;
use colored::{Color, ColoredString, Colorize};
use std::time::Duration;

/// Words printed per row of the word grid
const GRID_COLUMNS: usize = 6;

/// Highlight color for words hinted by each clue
#[must_use]
pub const fn clue_color(clue_id: ClueId) -> Color {
    match clue_id % 4 {
        0 => Color::BrightBlue,
        1 => Color::BrightMagenta,
        2 => Color::BrightGreen,
        _ => Color::BrightYellow,
    }
}

fn status_label(clue: &Clue) -> ColoredString {
    match clue.status() {
        ClueStatus::Pending if clue.hinted => "hinted".yellow(),
        ClueStatus::Pending => "open".bright_black(),
        ClueStatus::Solved => "solved".green().bold(),
        ClueStatus::Hinted => "solved (hint)".yellow().bold(),
        ClueStatus::Failed => "revealed".red().bold(),
    }
}

/// Print the game title and clock
pub fn print_header(session: &PuzzleSession, elapsed: Duration) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {}   ⏱  {}",
        "BANDADLE".bright_cyan().bold(),
        session.title().bright_yellow().bold(),
        format_time(elapsed)
    );
    println!("{}", "═".repeat(60).cyan());
}

/// Print every clue with its status, revealing solved answers
pub fn print_clues(session: &PuzzleSession) {
    for clue in session.clues() {
        println!(
            "\n {} {} [{}]",
            format!("{}.", clue.id + 1).bright_white().bold(),
            clue.question,
            status_label(clue)
        );

        let kind = clue.kind().label().bright_black();
        if clue.failed {
            println!("    {kind}: {}", clue.answer.to_uppercase().red().bold());
        } else if clue.solved {
            println!("    {kind}: {}", clue.answer.to_uppercase().green().bold());
        } else {
            println!("    {kind}");
        }
    }
}

/// Print the remaining words, hinted ones in their clue's color
pub fn print_word_grid(session: &PuzzleSession) {
    println!("\n{}", "Words:".bright_cyan().bold());
    for row in session.available_words().chunks(GRID_COLUMNS) {
        let cells: Vec<String> = row
            .iter()
            .map(|word| {
                let cell = format!("{word:<12}");
                match session.hint_owner(word) {
                    Some(owner) => cell.as_str().color(clue_color(owner)).bold().to_string(),
                    None => cell,
                }
            })
            .collect();
        println!("  {}", cells.join(""));
    }
}

/// Print the sentence under construction
pub fn print_sentence(session: &PuzzleSession) {
    let sentence = session.sentence();
    if sentence.is_empty() {
        println!("\n{} {}", "Sentence:".bright_cyan().bold(), "(empty)".bright_black());
    } else {
        println!(
            "\n{} {}",
            "Sentence:".bright_cyan().bold(),
            sentence.to_uppercase().bright_white().bold()
        );
    }
}

/// Print the full board
pub fn print_board(session: &PuzzleSession, elapsed: Duration) {
    print_header(session, elapsed);
    print_clues(session);
    print_word_grid(session);
    print_sentence(session);

    let solved = session.clues().iter().filter(|c| c.solved).count();
    println!(
        "\n {} {solved}/{}",
        create_progress_bar(solved, session.clues().len(), 20).green(),
        session.clues().len()
    );
}

/// Print the end-of-game banner and share text
pub fn print_results(session: &PuzzleSession, elapsed: Duration) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    if session.is_forfeited() {
        println!("{}", "    Better luck tomorrow!".bright_red().bold());
    } else {
        println!(
            "{}",
            "    🎉  P U Z Z L E   S O L V E D !  🎉".bright_green().bold()
        );
    }
    println!("{}", "═".repeat(60).bright_cyan());

    print_clues(session);

    println!("\n{}", "Share your result:".bright_cyan().bold());
    for line in share_text(session, elapsed).lines() {
        println!("  {line}");
    }
    println!();
}
