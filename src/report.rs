//! Report rendering — one line of output per inspected query.
//!
//! The text form mirrors the debug dump of the query pipeline: the raw nodes,
//! a tab-separated bar, then the extracted terms. The JSON form adds the
//! highlight patterns.

use cardq_core::types::TermList;
use cardq_core::{tokenize, Extractor, HighlightPatterns, Result};
use serde_json::{json, Value};

/// `["node", ...] \t | \t [term, ...]`
pub fn render_text(extractor: &Extractor, query: &str) -> String {
    let nodes = tokenize(query);
    let terms = extractor.extract(&nodes);
    format!("{:?}\t | \t{}", nodes, TermList(&terms))
}

pub fn render_json(extractor: &Extractor, query: &str) -> Result<Value> {
    let nodes = tokenize(query);
    let terms = extractor.extract(&nodes);
    let patterns = HighlightPatterns::from_terms(&terms);
    Ok(json!({
        "query": query,
        "nodes": nodes,
        "terms": serde_json::to_value(&terms)?,
        "patterns": serde_json::to_value(&patterns)?,
    }))
}
