//! cardq-core — flashcard search-query term extraction.
//!
//! This crate turns a raw search query into the flat list of terms that
//! actually search field content, discarding operators, negations and
//! structural filters along the way.
//!
//! # Architecture
//!
//! ```text
//! query ──► Tokenizer ──► nodes ──► Extractor ──► SearchTerm list ──► Highlight
//!               ▲                        │
//!               └──── group interior ────┘
//! ```
//!
//! Both stages are pure functions of their input. Malformed input is never
//! rejected: unterminated quotes and unmatched parentheses are closed at the
//! end of the string.

pub mod config;
pub mod error;
pub mod escape;
pub mod extract;
pub mod highlight;
pub mod samples;
pub mod tokenizer;
pub mod types;

pub use error::{Error, Result};
pub use extract::{parse, Extractor};
pub use highlight::HighlightPatterns;
pub use tokenizer::tokenize;
pub use types::SearchTerm;
