//! Match-and-reveal puzzle engine
//!
//! Holds one [`PuzzleSession`] and the transitions the player can trigger:
//! selecting and removing words, matching sentences against clues, hints and
//! forfeiting.

mod entry;
mod session;

pub use entry::Entry;
pub use session::{MAX_RED_HERRINGS, PuzzleSession, Solve};

#[cfg(test)]
pub(crate) mod fixtures {
    //! Shared test puzzle: three 3-word answers, one 4-word answer, 15 fillers

    use super::PuzzleSession;
    use crate::puzzles::{ClueSpec, Puzzle};
    use chrono::NaiveDate;

    pub const PUZZLE_ID: &str = "2026-10-17";

    pub const ANSWERS: [&str; 4] = [
        "kevin james bond",
        "big apple pie",
        "punk rock candy",
        "once upon a time",
    ];

    pub const FILLERS: [&str; 15] = [
        "anchor", "button", "candle", "castle", "dragon", "feather", "garden", "jungle",
        "lantern", "marble", "mirror", "pencil", "river", "thunder", "violet",
    ];

    pub fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
    }

    pub fn puzzle_with(extra_words: &[&str]) -> Puzzle {
        Puzzle {
            title: "Test Puzzle".to_string(),
            clues: ANSWERS
                .iter()
                .enumerate()
                .map(|(id, answer)| ClueSpec {
                    id: id as u8,
                    question: format!("Question {id}"),
                    answer: (*answer).to_string(),
                })
                .collect(),
            extra_words: extra_words.iter().map(|w| (*w).to_string()).collect(),
        }
    }

    pub fn puzzle() -> Puzzle {
        puzzle_with(&FILLERS)
    }

    pub fn session_with(extra_words: &[&str]) -> PuzzleSession {
        PuzzleSession::from_puzzle(PUZZLE_ID, &puzzle_with(extra_words), today())
    }

    pub fn session() -> PuzzleSession {
        session_with(&FILLERS)
    }

    /// Select every word of clue `id`'s answer in order
    pub fn solve(session: &mut PuzzleSession, id: usize) {
        for word in ANSWERS[id].split(' ') {
            session.select_word(word);
        }
    }
}
