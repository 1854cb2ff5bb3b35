//! Build script to embed the dictionaries
//!
//! Reads the per-language word lists and generates Rust source with const arrays.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_word_list(
        "data/en_words.txt",
        &Path::new(&out_dir).join("en_words.rs"),
        "EN_WORDS",
        "English five-letter words",
    );

    generate_word_list(
        "data/es_words.txt",
        &Path::new(&out_dir).join("es_words.rs"),
        "ES_WORDS",
        "Spanish five-letter words (unaccented)",
    );

    println!("cargo:rerun-if-changed=data/en_words.txt");
    println!("cargo:rerun-if-changed=data/es_words.txt");
}

fn generate_word_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    // Blank lines and '#' comments are allowed in the source lists
    let words: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_lowercase)
        .collect();

    for word in &words {
        if !word.bytes().all(|b| b.is_ascii_lowercase()) {
            println!("cargo:warning={input_path}: '{word}' is not plain ASCII letters");
        }
    }

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated from {input_path}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for word in &words {
        writeln!(output, "    \"{word}\",").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {};", words.len()).unwrap();
}
