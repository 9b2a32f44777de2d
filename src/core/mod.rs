//! Core domain types for the puzzle
//!
//! This module contains the fundamental domain types with no I/O.
//! All types here are pure data and cheap to test in isolation.

mod clue;
mod hints;
pub mod words;

pub use clue::{Clue, ClueId, ClueKind, ClueStatus};
pub use hints::HintTable;
