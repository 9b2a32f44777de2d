//! Daily puzzle dataset
//!
//! Provides the bundled dataset compiled into the binary, plus loading of
//! replacement datasets from disk.

mod embedded;
pub mod loader;

pub use embedded::PUZZLES_JSON;
pub use loader::{ClueSpec, DATE_FORMAT, Dataset, DatasetError, Puzzle, parse_puzzle_date};
