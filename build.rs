//! Build script to embed the puzzle dataset
//!
//! Generates Rust source exposing the raw dataset JSON. Parsing happens at
//! runtime through `Dataset::embedded`.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let dataset_path = Path::new(&manifest_dir).join("data/puzzles.json");

    generate_dataset(
        &dataset_path,
        &Path::new(&out_dir).join("puzzles.rs"),
        "Bundled daily puzzles keyed by date",
    );

    // Rebuild if the dataset changes
    println!("cargo:rerun-if-changed=data/puzzles.json");
}

fn generate_dataset(input_path: &Path, output_path: &Path, doc_comment: &str) {
    assert!(
        input_path.is_file(),
        "Puzzle dataset not found at {}",
        input_path.display()
    );

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    let path_literal = input_path.to_string_lossy();

    writeln!(output, "// Generated puzzle dataset").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment} (raw JSON)").unwrap();
    writeln!(
        output,
        "pub const PUZZLES_JSON: &str = include_str!({path_literal:?});"
    )
    .unwrap();
}
