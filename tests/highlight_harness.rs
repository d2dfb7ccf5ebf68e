#![allow(unused)]
//! Highlight pattern integration harness.
//!
//! # What this covers
//!
//! - **JSON handoff**: the per-field pattern map renders to the flat JSON
//!   object an editor highlighter consumes (insta inline snapshots).
//! - **Match counting**: compiled patterns find the expected ranges in field
//!   text, scoped to the right field.
//!
//! # What this does NOT cover
//!
//! - DOM-level highlighting inside an editor
//!
//! # Running
//!
//! ```sh
//! cargo test --test highlight_harness
//! # Update snapshots after intentional changes:
//! cargo insta review
//! ```

mod common;
use cardq_core::{parse, HighlightPatterns};
use common::*;

fn patterns(query: &str) -> HighlightPatterns {
    HighlightPatterns::from_terms(&parse(query))
}

#[test]
fn json_for_mixed_query() {
    let json = patterns(r#"dog front:*cat* w:bird "a.b" tag:x -mouse"#).to_json().unwrap();
    insta::assert_snapshot!(json, @r#"{"":"(?:dog)|(?:\\bbird\\b)|(?:a\\.b)","front":"(?:.*?cat.*?)"}"#);
}

#[test]
fn json_for_empty_query() {
    let json = patterns("-dog tag:x or").to_json().unwrap();
    insta::assert_snapshot!(json, @"{}");
}

#[test]
fn match_counts_per_field() {
    let hl = patterns("dog back:d_g");
    let text = "Dog, dig, DUG";
    assert_eq!(hl.find_matches("Front", text).unwrap().len(), 1);
    assert_eq!(hl.find_matches("Back", text).unwrap().len(), 3);
}

#[test]
fn boundary_respects_word_edges() {
    let hl = patterns("w:cat");
    assert_eq!(hl.find_matches("", "cat category bobcat cat.").unwrap(), vec![0..3, 20..23]);
}

#[test]
fn patterns_round_trip_through_json() {
    let hl = patterns("dog front:cat");
    let json = hl.to_json().unwrap();
    let back: HighlightPatterns = serde_json::from_str(&json).unwrap();
    assert_eq!(back, hl);
}
