//! Command implementations

pub mod check;
pub mod dates;
pub mod reset;
pub mod simple;
pub mod submit;

pub use check::run_check;
pub use dates::{DateEntry, list_dates, print_dates};
pub use reset::run_reset;
pub use simple::{LineCommand, parse_line, run_simple};
pub use submit::{SubmitTarget, merge_into_dataset, run_submit};
