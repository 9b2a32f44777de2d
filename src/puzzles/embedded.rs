//! Embedded puzzle dataset
//!
//! Dataset compiled into the binary at build time.

// Include generated dataset from build script
include!(concat!(env!("OUT_DIR"), "/puzzles.rs"));
