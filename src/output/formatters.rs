//! Formatting utilities for results and sharing

use crate::core::Clue;
use crate::engine::PuzzleSession;
use crate::puzzles::parse_puzzle_date;
use chrono::Datelike;
use std::fmt::Write;
use std::time::Duration;

/// Where the share text points players
pub const SHARE_URL: &str = "bandadle.com";

/// Format a duration as `m:ss`
///
/// # Examples
/// ```
/// use bandadle::output::formatters::format_time;
/// use std::time::Duration;
///
/// assert_eq!(format_time(Duration::from_secs(0)), "0:00");
/// assert_eq!(format_time(Duration::from_secs(125)), "2:05");
/// ```
#[must_use]
pub fn format_time(elapsed: Duration) -> String {
    let seconds = elapsed.as_secs();
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Emoji summarizing how the game ended
#[must_use]
pub const fn time_emoji(forfeited: bool, elapsed: Duration) -> &'static str {
    if forfeited {
        "❌"
    } else if elapsed.as_secs() > 180 {
        "⏱️"
    } else if elapsed.as_secs() > 120 {
        "⚡"
    } else {
        "🔥"
    }
}

/// One status square per clue, in id order
#[must_use]
pub fn result_grid(clues: &[Clue]) -> String {
    let mut sorted: Vec<&Clue> = clues.iter().collect();
    sorted.sort_by_key(|c| c.id);
    sorted.iter().map(|c| c.status().emoji()).collect()
}

/// Spoiler-free result summary for pasting elsewhere
#[must_use]
pub fn share_text(session: &PuzzleSession, elapsed: Duration) -> String {
    let date = parse_puzzle_date(session.puzzle_id()).unwrap_or_else(|| session.current_date());

    let mut text = String::new();
    // Writing into a String cannot fail
    let _ = writeln!(text, "Bandadle {}/{}", date.month(), date.day());
    let _ = writeln!(
        text,
        "{}/{} {}",
        session.solved_count(),
        session.clues().len(),
        time_emoji(session.is_forfeited(), elapsed)
    );
    let _ = writeln!(text, "Time: {}", format_time(elapsed));
    let _ = write!(
        text,
        "\n{}\n\n{SHARE_URL}",
        result_grid(session.clues())
    );
    text
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 { 0 } else { value * width / max };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::fixtures::{session, solve};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn time_formats_minutes_and_padded_seconds() {
        assert_eq!(format_time(Duration::from_secs(9)), "0:09");
        assert_eq!(format_time(Duration::from_secs(60)), "1:00");
        assert_eq!(format_time(Duration::from_millis(61_900)), "1:01");
        assert_eq!(format_time(Duration::from_secs(3_725)), "62:05");
    }

    #[test]
    fn time_emoji_thresholds() {
        assert_eq!(time_emoji(false, Duration::from_secs(90)), "🔥");
        assert_eq!(time_emoji(false, Duration::from_secs(120)), "🔥");
        assert_eq!(time_emoji(false, Duration::from_secs(121)), "⚡");
        assert_eq!(time_emoji(false, Duration::from_secs(180)), "⚡");
        assert_eq!(time_emoji(false, Duration::from_secs(181)), "⏱️");
        assert_eq!(time_emoji(true, Duration::from_secs(30)), "❌");
    }

    #[test]
    fn grid_reflects_clue_status() {
        let mut session = session();
        solve(&mut session, 0);
        session.request_hint(1, &mut StdRng::seed_from_u64(3));
        solve(&mut session, 1);
        assert_eq!(result_grid(session.clues()), "🟩🟨⬜⬜");

        session.forfeit();
        assert_eq!(result_grid(session.clues()), "🟩🟨🟥🟥");
    }

    #[test]
    fn share_text_for_forfeited_game() {
        let mut session = session();
        solve(&mut session, 2);
        session.forfeit();

        let text = share_text(&session, Duration::from_secs(75));
        assert_eq!(
            text,
            "Bandadle 10/17\n1/4 ❌\nTime: 1:15\n\n🟥🟥🟩🟥\n\nbandadle.com"
        );
    }

    #[test]
    fn share_text_for_fast_clean_game() {
        let mut session = session();
        for id in 0..4 {
            solve(&mut session, id);
        }

        let text = share_text(&session, Duration::from_secs(100));
        assert!(text.starts_with("Bandadle 10/17\n4/4 🔥\nTime: 1:40\n"));
        assert!(text.contains("🟩🟩🟩🟩"));
    }

    #[test]
    fn progress_bar_fills_proportionally() {
        assert_eq!(create_progress_bar(0, 4, 8), "░░░░░░░░");
        assert_eq!(create_progress_bar(2, 4, 8), "████░░░░");
        assert_eq!(create_progress_bar(4, 4, 8), "████████");
        assert_eq!(create_progress_bar(1, 0, 4), "░░░░");
    }
}
