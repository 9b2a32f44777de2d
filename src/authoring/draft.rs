//! Puzzle drafts and their validation

use crate::core::ClueKind;
use crate::core::words::tokenize;
use crate::puzzles::{ClueSpec, DATE_FORMAT, Puzzle};
use chrono::NaiveDate;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Clues in every puzzle
pub const CLUE_COUNT: usize = 4;

/// Fewest filler words a puzzle may ship with
pub const MIN_EXTRA_WORDS: usize = 15;

/// An unvalidated puzzle submission
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PuzzleDraft {
    pub title: String,
    pub questions: [String; CLUE_COUNT],
    pub answers: [String; CLUE_COUNT],
    #[serde(default)]
    pub extra_words: Vec<String>,
}

/// Part of a draft an error is reported against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Question(usize),
    Answer(usize),
    ExtraWords,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Title => write!(f, "title"),
            Self::Question(index) => write!(f, "question {}", index + 1),
            Self::Answer(index) => write!(f, "answer {}", index + 1),
            Self::ExtraWords => write!(f, "extra words"),
        }
    }
}

/// A single rule violation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftError {
    Required,
    TooFewWords { kind: ClueKind, required: usize },
    SharedWords { with: usize },
    TooFewExtraWords { found: usize },
    ExtraWordHasSpace(String),
    DuplicateExtraWord(String),
    ExtraWordInAnswer(String),
}

impl fmt::Display for DraftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required => write!(f, "is required"),
            Self::TooFewWords { kind, required } => {
                write!(f, "{} answer must have at least {required} words", kind.label())
            }
            Self::SharedWords { with } => {
                write!(f, "answers cannot share words (shared with answer {})", with + 1)
            }
            Self::TooFewExtraWords { found } => write!(
                f,
                "at least {MIN_EXTRA_WORDS} extra words are required, got {found}"
            ),
            Self::ExtraWordHasSpace(word) => {
                write!(f, "extra word {word:?} cannot contain spaces")
            }
            Self::DuplicateExtraWord(word) => {
                write!(f, "extra word {word:?} is listed more than once")
            }
            Self::ExtraWordInAnswer(word) => {
                write!(f, "extra word {word:?} is already used in an answer")
            }
        }
    }
}

/// Every rule violation found in a draft, in field order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftErrors {
    errors: Vec<(Field, DraftError)>,
}

impl DraftErrors {
    fn push(&mut self, field: Field, error: DraftError) {
        self.errors.push((field, error));
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(Field, DraftError)> {
        self.errors.iter()
    }

    /// Errors reported against `field`
    pub fn for_field(&self, field: Field) -> impl Iterator<Item = &DraftError> {
        self.errors
            .iter()
            .filter(move |(f, _)| *f == field)
            .map(|(_, error)| error)
    }

    #[must_use]
    pub fn has_error(&self, field: Field) -> bool {
        self.for_field(field).next().is_some()
    }
}

impl fmt::Display for DraftErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, error)) in self.errors.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{field}: {error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for DraftErrors {}

/// Reasons a draft cannot be exported
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("puzzle draft is invalid:\n{0}")]
    Invalid(DraftErrors),
    #[error("failed to serialize puzzle: {0}")]
    Json(#[from] serde_json::Error),
}

/// Exported puzzle, ready to be added to a dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PuzzleExport {
    pub date: String,
    pub title: String,
    pub clues: Vec<ClueSpec>,
    pub extra_words: Vec<String>,
}

impl PuzzleExport {
    /// The dataset entry for this export
    #[must_use]
    pub fn into_entry(self) -> (String, Puzzle) {
        (
            self.date,
            Puzzle {
                title: self.title,
                clues: self.clues,
                extra_words: self.extra_words,
            },
        )
    }
}

impl PuzzleDraft {
    /// Draft mirroring an existing puzzle, for linting
    ///
    /// Clues are placed by id; ids outside `0..4` are dropped, leaving the
    /// slot empty.
    #[must_use]
    pub fn from_puzzle(puzzle: &Puzzle) -> Self {
        let mut draft = Self {
            title: puzzle.title.clone(),
            extra_words: puzzle.extra_words.clone(),
            ..Self::default()
        };
        for clue in &puzzle.clues {
            let index = usize::from(clue.id);
            if index < CLUE_COUNT {
                draft.questions[index].clone_from(&clue.question);
                draft.answers[index].clone_from(&clue.answer);
            }
        }
        draft
    }

    /// Check every authoring rule, reporting all violations
    ///
    /// # Errors
    ///
    /// Returns the full list of violations if any rule fails.
    ///
    /// # Examples
    /// ```
    /// use bandadle::authoring::{Field, PuzzleDraft};
    ///
    /// let draft = PuzzleDraft {
    ///     title: "  ".to_string(),
    ///     ..PuzzleDraft::default()
    /// };
    /// let errors = draft.validate().unwrap_err();
    ///
    /// assert!(errors.has_error(Field::Title));
    /// assert!(errors.has_error(Field::Question(0)));
    /// assert!(errors.has_error(Field::ExtraWords));
    /// ```
    pub fn validate(&self) -> Result<(), DraftErrors> {
        let mut errors = DraftErrors::default();

        if self.title.trim().is_empty() {
            errors.push(Field::Title, DraftError::Required);
        }

        for (index, question) in self.questions.iter().enumerate() {
            if question.trim().is_empty() {
                errors.push(Field::Question(index), DraftError::Required);
            }
        }

        let answer_sets: Vec<FxHashSet<String>> = self
            .answers
            .iter()
            .map(|answer| tokenize(answer).collect())
            .collect();

        for ((index, answer), id) in self.answers.iter().enumerate().zip(0..) {
            let kind = ClueKind::for_id(id);
            let required = kind.min_answer_words();
            if tokenize(answer).count() < required {
                errors.push(
                    Field::Answer(index),
                    DraftError::TooFewWords { kind, required },
                );
            }
        }

        for i in 0..answer_sets.len() {
            for j in i + 1..answer_sets.len() {
                if !answer_sets[i].is_disjoint(&answer_sets[j]) {
                    errors.push(Field::Answer(i), DraftError::SharedWords { with: j });
                    errors.push(Field::Answer(j), DraftError::SharedWords { with: i });
                }
            }
        }
        errors.errors.sort_by_key(|(field, _)| field_order(*field));

        let all_answer_words: FxHashSet<&String> = answer_sets.iter().flatten().collect();
        let filled: Vec<&str> = self
            .extra_words
            .iter()
            .map(|word| word.trim())
            .filter(|word| !word.is_empty())
            .collect();

        if filled.len() < MIN_EXTRA_WORDS {
            errors.push(
                Field::ExtraWords,
                DraftError::TooFewExtraWords {
                    found: filled.len(),
                },
            );
        }

        let mut seen = FxHashSet::default();
        for word in filled {
            let lowered = word.to_lowercase();
            if word.chars().any(char::is_whitespace) {
                errors.push(
                    Field::ExtraWords,
                    DraftError::ExtraWordHasSpace(word.to_string()),
                );
            }
            if !seen.insert(lowered.clone()) {
                errors.push(
                    Field::ExtraWords,
                    DraftError::DuplicateExtraWord(word.to_string()),
                );
            }
            if all_answer_words.contains(&lowered) {
                errors.push(
                    Field::ExtraWords,
                    DraftError::ExtraWordInAnswer(word.to_string()),
                );
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Validated, trimmed puzzle for `date`
    ///
    /// # Errors
    ///
    /// Returns `ExportError::Invalid` if the draft breaks any rule.
    pub fn to_export(&self, date: NaiveDate) -> Result<PuzzleExport, ExportError> {
        self.validate().map_err(ExportError::Invalid)?;

        let clues = self
            .questions
            .iter()
            .zip(&self.answers)
            .zip(0..)
            .map(|((question, answer), id)| ClueSpec {
                id,
                question: question.trim().to_string(),
                answer: answer.trim().to_string(),
            })
            .collect();

        Ok(PuzzleExport {
            date: date.format(DATE_FORMAT).to_string(),
            title: self.title.trim().to_string(),
            clues,
            extra_words: self
                .extra_words
                .iter()
                .map(|word| word.trim())
                .filter(|word| !word.is_empty())
                .map(str::to_string)
                .collect(),
        })
    }

    /// Pretty-printed JSON for `date`
    ///
    /// # Errors
    ///
    /// Returns an error if the draft is invalid or cannot be serialized.
    pub fn export(&self, date: NaiveDate) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(&self.to_export(date)?)?)
    }
}

const fn field_order(field: Field) -> usize {
    match field {
        Field::Title => 0,
        Field::Question(index) => 1 + index,
        Field::Answer(index) => 1 + CLUE_COUNT + index,
        Field::ExtraWords => 1 + 2 * CLUE_COUNT,
    }
}
