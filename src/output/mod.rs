//! Terminal output formatting
//!
//! Result formatting, share text and colored printing for line mode.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_results};
pub use formatters::{format_time, result_grid, share_text, time_emoji};
