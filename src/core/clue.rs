//! Clue representation
//!
//! A clue pairs a riddle with its chained answer phrase and tracks how the
//! player resolved it.

use super::words::tokenize;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of a clue within its puzzle (0-3)
pub type ClueId = u8;

/// Id of the three-part "before, during & after" clue
pub const BEFORE_DURING_AFTER_ID: ClueId = 3;

/// Shape of the chained answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClueKind {
    /// Two overlapping phrases, e.g. "kevin james" + "james bond"
    BeforeAndAfter,
    /// Three overlapping phrases
    BeforeDuringAfter,
}

impl ClueKind {
    /// Kind implied by a clue id
    #[must_use]
    pub const fn for_id(id: ClueId) -> Self {
        if id == BEFORE_DURING_AFTER_ID {
            Self::BeforeDuringAfter
        } else {
            Self::BeforeAndAfter
        }
    }

    /// Minimum number of words an answer of this kind must have
    #[must_use]
    pub const fn min_answer_words(self) -> usize {
        match self {
            Self::BeforeAndAfter => 3,
            Self::BeforeDuringAfter => 4,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::BeforeAndAfter => "Before & After",
            Self::BeforeDuringAfter => "Before, During & After",
        }
    }
}

/// How a clue stands, derived from its flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClueStatus {
    Pending,
    Solved,
    Hinted,
    Failed,
}

impl ClueStatus {
    /// Square used in the shareable result grid
    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Pending => "⬜",
            Self::Solved => "🟩",
            Self::Hinted => "🟨",
            Self::Failed => "🟥",
        }
    }
}

/// One riddle of a daily puzzle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Clue {
    pub id: ClueId,
    pub question: String,
    pub answer: String,
    pub solved: bool,
    /// Set only when the answer was revealed by a forfeit
    pub failed: bool,
    pub hinted: bool,
}

impl Clue {
    /// Create an unsolved clue
    ///
    /// # Examples
    /// ```
    /// use bandadle::core::{Clue, ClueKind};
    ///
    /// let clue = Clue::new(0, "Sitcom mall cop licensed to kill", "Kevin James Bond");
    /// assert_eq!(clue.kind(), ClueKind::BeforeAndAfter);
    /// assert_eq!(clue.answer_tokens(), ["kevin", "james", "bond"]);
    /// ```
    pub fn new(id: ClueId, question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            id,
            question: question.into(),
            answer: answer.into(),
            solved: false,
            failed: false,
            hinted: false,
        }
    }

    /// Lower-cased answer words in order
    #[must_use]
    pub fn answer_tokens(&self) -> Vec<String> {
        tokenize(&self.answer).collect()
    }

    /// Whether `sentence` spells this clue's answer exactly (ignoring case)
    #[must_use]
    pub fn is_answered_by(&self, sentence: &str) -> bool {
        self.answer.to_lowercase() == sentence.to_lowercase()
    }

    #[inline]
    #[must_use]
    pub const fn kind(&self) -> ClueKind {
        ClueKind::for_id(self.id)
    }

    #[must_use]
    pub const fn status(&self) -> ClueStatus {
        match (self.solved, self.failed, self.hinted) {
            (false, _, _) => ClueStatus::Pending,
            (true, true, _) => ClueStatus::Failed,
            (true, false, true) => ClueStatus::Hinted,
            (true, false, false) => ClueStatus::Solved,
        }
    }
}

impl fmt::Display for Clue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.id + 1, self.question)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clue_starts_pending() {
        let clue = Clue::new(1, "Dessert", "Big Apple Pie");
        assert!(!clue.solved);
        assert!(!clue.failed);
        assert!(!clue.hinted);
        assert_eq!(clue.status(), ClueStatus::Pending);
    }

    #[test]
    fn answer_tokens_are_lowercase() {
        let clue = Clue::new(0, "q", "Kevin  JAMES Bond");
        assert_eq!(clue.answer_tokens(), ["kevin", "james", "bond"]);
    }

    #[test]
    fn kind_follows_id() {
        assert_eq!(ClueKind::for_id(0), ClueKind::BeforeAndAfter);
        assert_eq!(ClueKind::for_id(2), ClueKind::BeforeAndAfter);
        assert_eq!(ClueKind::for_id(3), ClueKind::BeforeDuringAfter);
        assert_eq!(ClueKind::BeforeAndAfter.min_answer_words(), 3);
        assert_eq!(ClueKind::BeforeDuringAfter.min_answer_words(), 4);
    }

    #[test]
    fn answered_by_is_exact_and_case_insensitive() {
        let clue = Clue::new(0, "q", "Kevin James Bond");
        assert!(clue.is_answered_by("kevin james bond"));
        assert!(clue.is_answered_by("KEVIN JAMES BOND"));
        assert!(!clue.is_answered_by("kevin james"));
        assert!(!clue.is_answered_by("kevin james bond bond"));
    }

    #[test]
    fn status_from_flags() {
        let mut clue = Clue::new(0, "q", "a b c");
        clue.solved = true;
        assert_eq!(clue.status(), ClueStatus::Solved);

        clue.hinted = true;
        assert_eq!(clue.status(), ClueStatus::Hinted);

        clue.failed = true;
        assert_eq!(clue.status(), ClueStatus::Failed);
    }

    #[test]
    fn hinted_but_unsolved_is_pending() {
        let mut clue = Clue::new(0, "q", "a b c");
        clue.hinted = true;
        assert_eq!(clue.status(), ClueStatus::Pending);
    }

    #[test]
    fn clue_display() {
        let clue = Clue::new(2, "Sugary treat", "punk rock candy");
        assert_eq!(format!("{clue}"), "3. Sugary treat");
    }
}
