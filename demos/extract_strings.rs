//! String Extraction
//!
//! This example drives the quoted-string machine over some text and prints
//! every completed string.
//!
//! Key concepts:
//! - One validated table, one engine per input
//! - Default transitions so the table never lists every character
//! - Actions writing into a caller-owned accumulator
//!
//! Run with: cargo run --example extract_strings -- 'text with "quoted" parts'
//! Set RUST_LOG=table_fsm=trace to see every transition.

use table_fsm::extract::{Accumulator, StringExtractor, StringState};
use tracing_subscriber::EnvFilter;

const SAMPLE: &str = r#"Not string, "but this is a string \"and escaped\" string" but again not a string"#;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let text = std::env::args().nth(1).unwrap_or_else(|| SAMPLE.to_string());

    println!("=== String Extraction ===\n");
    println!("Input: {}\n", text);

    let extractor = StringExtractor::new().unwrap();
    let mut acc = Accumulator::new();
    let state = extractor.extract_into(&text, &mut acc).unwrap();

    for value in acc.emitted() {
        println!("{}", value);
    }

    if state != StringState::LookingForString {
        println!(
            "\n(unterminated string dropped: {:?})",
            acc.pending()
        );
    }

    println!("\n=== Example Complete ===");
}
