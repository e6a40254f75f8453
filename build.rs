//! Build script to generate embedded corpora
//!
//! Reads the transcription tables under `data/` and generates Rust source code
//! with const arrays, one entry per line.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_corpus(
        "data/common_lemmas.tsv",
        &Path::new(&out_dir).join("common_lemmas.rs"),
        "COMMON_LEMMAS",
        "Common lemmas with ARPAbet transcriptions",
    );

    generate_corpus(
        "data/common_words.tsv",
        &Path::new(&out_dir).join("common_words.rs"),
        "COMMON_WORDS",
        "Common lemmas and word forms with ARPAbet transcriptions",
    );

    generate_corpus(
        "data/all_words.tsv",
        &Path::new(&out_dir).join("all_words.rs"),
        "ALL_WORDS",
        "All dictionary words with ARPAbet transcriptions",
    );

    // Rebuild if a table changes
    println!("cargo:rerun-if-changed=data/common_lemmas.tsv");
    println!("cargo:rerun-if-changed=data/common_words.tsv");
    println!("cargo:rerun-if-changed=data/all_words.tsv");
}

fn generate_corpus(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let entries: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect();
    let count = entries.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated corpus table").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for entry in entries {
        writeln!(output, "    {entry:?},").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of entries in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
