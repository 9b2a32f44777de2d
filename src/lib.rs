//! Bandadle
//!
//! A daily "before & after" word puzzle. Each answer chains phrases that
//! share a word ("Kevin James" + "James Bond" = "Kevin James Bond"); players
//! build answers from a shared pool of words.
//!
//! # Quick Start
//!
//! ```rust
//! use bandadle::engine::PuzzleSession;
//! use bandadle::puzzles::Dataset;
//! use chrono::NaiveDate;
//!
//! let dataset = Dataset::embedded().unwrap();
//! let today = NaiveDate::from_ymd_opt(2026, 10, 15).unwrap();
//! let mut session = PuzzleSession::initialize(&dataset, "2026-10-15", today);
//!
//! for word in ["kevin", "james", "bond"] {
//!     session.select_word(word);
//! }
//! assert_eq!(session.solved_count(), 1);
//! assert!(!session.available_words().contains(&"bond".to_string()));
//! ```

// Core domain types
pub mod core;

// Session state and transitions
pub mod engine;

// Puzzle dataset
pub mod puzzles;

// Saved progress
pub mod storage;

// Draft validation and export
pub mod authoring;

// On-screen clock
pub mod timer;

// Runtime configuration
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
