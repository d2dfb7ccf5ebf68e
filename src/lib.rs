//! cardq — flashcard search-query term extraction.
//!
//! Re-exports [`cardq_core`] and adds the report rendering used by the
//! `cardq` inspection binary, so integration tests can import both from one
//! place.
//!
//! # Architecture
//!
//! ```text
//! query ──► tokenize ──► nodes ──► Extractor ──► terms ──► report
//!                                                   │
//!                                                   └──► HighlightPatterns
//! ```

pub mod report;

pub use cardq_core::*;
