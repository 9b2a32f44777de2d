//! Persisted session record
//!
//! A versioned, strictly parsed projection of [`PuzzleSession`]. The hint
//! relation is stored as a list of `[token, clueId]` pairs. Records with the
//! wrong shape, missing fields, another version or contradictory content are
//! rejected whole; nothing is repaired.

use crate::core::{Clue, ClueId, HintTable};
use crate::engine::PuzzleSession;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Current record layout
pub const SCHEMA_VERSION: u32 = 3;

/// Reasons a stored record is discarded
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("unparsable session record: {0}")]
    Json(#[from] serde_json::Error),
    #[error("session record version {found} is not supported (expected {SCHEMA_VERSION})")]
    Version { found: u32 },
    #[error("inconsistent session record: {0}")]
    Inconsistent(&'static str),
}

/// On-disk form of a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SessionRecord {
    pub version: u32,
    pub puzzle_id: String,
    pub current_date: NaiveDate,
    pub title: String,
    pub clues: Vec<Clue>,
    pub available_words: Vec<String>,
    pub selected_words: Vec<String>,
    pub hinted_words: Vec<(String, ClueId)>,
    pub game_completed: bool,
    #[serde(deserialize_with = "required")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "required")]
    pub end_time: Option<DateTime<Utc>>,
    pub forfeited: bool,
}

/// Make an `Option` field mandatory (explicit `null` still allowed)
fn required<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer)
}

impl SessionRecord {
    /// Parse and validate a stored record into a session
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the record is rejected.
    pub fn parse(json: &str) -> Result<PuzzleSession, RecordError> {
        let record: Self = serde_json::from_str(json)?;
        PuzzleSession::try_from(record)
    }

    /// Serialize to JSON
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, RecordError> {
        Ok(serde_json::to_string(self)?)
    }
}

impl From<&PuzzleSession> for SessionRecord {
    fn from(session: &PuzzleSession) -> Self {
        Self {
            version: SCHEMA_VERSION,
            puzzle_id: session.puzzle_id.clone(),
            current_date: session.current_date,
            title: session.title.clone(),
            clues: session.clues.clone(),
            available_words: session.available_words.clone(),
            selected_words: session.selected_words.clone(),
            hinted_words: session.hinted_words.to_pairs(),
            game_completed: session.game_completed,
            start_time: session.start_time,
            end_time: session.end_time,
            forfeited: session.forfeited,
        }
    }
}

impl TryFrom<SessionRecord> for PuzzleSession {
    type Error = RecordError;

    fn try_from(record: SessionRecord) -> Result<Self, Self::Error> {
        if record.version != SCHEMA_VERSION {
            return Err(RecordError::Version {
                found: record.version,
            });
        }
        if record.clues.is_empty() {
            return Err(RecordError::Inconsistent("no clues"));
        }
        if !record.clues.windows(2).all(|pair| pair[0].id < pair[1].id) {
            return Err(RecordError::Inconsistent("clue ids not strictly ascending"));
        }
        if record.clues.iter().any(|c| c.failed && !c.solved) {
            return Err(RecordError::Inconsistent("failed clue is not solved"));
        }

        let all_solved = record.clues.iter().all(|c| c.solved);
        if record.game_completed != all_solved {
            return Err(RecordError::Inconsistent("completion flag disagrees with clues"));
        }
        if record.forfeited && !record.game_completed {
            return Err(RecordError::Inconsistent("forfeited game is not completed"));
        }
        if record
            .hinted_words
            .iter()
            .any(|(_, id)| !record.clues.iter().any(|c| c.id == *id))
        {
            return Err(RecordError::Inconsistent("hint refers to unknown clue"));
        }

        Ok(Self {
            puzzle_id: record.puzzle_id,
            current_date: record.current_date,
            title: record.title,
            clues: record.clues,
            available_words: record.available_words,
            selected_words: record.selected_words,
            hinted_words: HintTable::from_pairs(record.hinted_words),
            game_completed: record.game_completed,
            start_time: record.start_time,
            end_time: record.end_time,
            forfeited: record.forfeited,
        })
    }
}
