//! Extractor — picks the content-searching terms out of tokenized nodes.
//!
//! Each node is classified in a fixed order and the first matching rule
//! wins:
//!
//! 1. empty nodes, negated nodes (`-…`) and bare `and`/`or` are dropped;
//! 2. `( … )` groups are re-tokenized and their terms spliced in place;
//! 3. quoted nodes become [`SearchTerm::Quoted`], unless they hold a field
//!    separator, or [`SearchTerm::Normal`] when they quote an operator word;
//! 4. `prefix:value` nodes are dropped (ignored prefixes), become
//!    [`SearchTerm::Boundary`] (`w:`, `nc:`) or a [`SearchTerm::Field`]
//!    whose value is extracted recursively;
//! 5. anything else is a [`SearchTerm::Normal`] with wildcards rewritten.
//!
//! Classification is case-insensitive; emitted text keeps the input's case.

use crate::config::SearchConfig;
use crate::escape::{find_field_separator, is_escaped, rewrite_wildcards};
use crate::tokenizer::tokenize;
use crate::types::SearchTerm;
use std::sync::LazyLock;
use tracing::{debug, trace, warn};

/// Field prefixes that filter on card structure rather than content. Terms
/// using them never produce a search term.
pub static IGNORED_PREFIXES: phf::Set<&'static str> = phf::phf_set! {
    "tag", "deck", "preset", "card", "is", "flag", "prop",
    "added", "edited", "rated", "introduced", "nid", "cid",
};

/// Field prefixes that request a whole-word search.
pub static BOUNDARY_PREFIXES: phf::Set<&'static str> = phf::phf_set! { "nc", "w" };

static DEFAULT_EXTRACTOR: LazyLock<Extractor> = LazyLock::new(Extractor::default);

/// Parse `query` with the default configuration.
pub fn parse(query: &str) -> Vec<SearchTerm> {
    DEFAULT_EXTRACTOR.parse(query)
}

/// Turns nodes into search terms. Holds only read-only settings, so one
/// instance can be shared freely.
#[derive(Debug, Clone)]
pub struct Extractor {
    max_depth: usize,
    /// Lower-cased.
    extra_ignored: Vec<String>,
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new(&SearchConfig::default())
    }
}

impl Extractor {
    pub fn new(config: &SearchConfig) -> Self {
        Self {
            max_depth: config.max_depth,
            extra_ignored: config
                .extra_ignored_prefixes
                .iter()
                .map(|p| p.to_lowercase())
                .collect(),
        }
    }

    /// Tokenize and extract in one step.
    pub fn parse(&self, query: &str) -> Vec<SearchTerm> {
        let nodes = tokenize(query);
        let terms = self.extract(&nodes);
        debug!(query, nodes = nodes.len(), terms = terms.len(), "parsed query");
        terms
    }

    /// Extract search terms from already tokenized nodes.
    pub fn extract(&self, nodes: &[&str]) -> Vec<SearchTerm> {
        let mut out = Vec::new();
        self.extract_into(nodes, 0, &mut out);
        out
    }

    fn extract_into(&self, nodes: &[&str], depth: usize, out: &mut Vec<SearchTerm>) {
        for node in nodes {
            self.extract_node(node, depth, out);
        }
    }

    fn extract_node(&self, node: &str, depth: usize, out: &mut Vec<SearchTerm>) {
        if node.is_empty() {
            return;
        }
        if node.starts_with('-') {
            trace!(node, "extract: negated, dropped");
            return;
        }
        if is_operator(node) {
            trace!(node, "extract: operator, dropped");
            return;
        }
        if depth > self.max_depth {
            warn!(node, depth, max_depth = self.max_depth, "nesting too deep, kept as plain term");
            out.push(SearchTerm::Normal(rewrite_wildcards(node)));
            return;
        }

        if let Some(inner) = group_interior(node) {
            trace!(node, depth, "extract: group");
            self.extract_into(&tokenize(inner), depth + 1, out);
            return;
        }

        // A quoted node holding a field separator is a quoted field search,
        // handled below with its quotes removed.
        if let Some(inner) = unquote(node) {
            if find_field_separator(node).is_none() {
                trace!(node, "extract: quoted");
                out.push(if is_operator(inner) {
                    SearchTerm::normal(inner)
                } else {
                    SearchTerm::quoted(inner)
                });
                return;
            }
        }

        let body = unquote(node).unwrap_or(node);
        if let Some(sep) = find_field_separator(body) {
            // Escaped colons before the separator belong to the field name.
            let prefix = body[..sep].replace("\\:", ":");
            let value = &body[sep + 1..];
            let key = prefix.to_lowercase();

            if IGNORED_PREFIXES.contains(key.as_str()) || self.extra_ignored.contains(&key) {
                trace!(node, prefix = %prefix, "extract: ignored prefix, dropped");
            } else if BOUNDARY_PREFIXES.contains(key.as_str()) {
                trace!(node, "extract: boundary");
                out.push(SearchTerm::boundary(unquote(value).unwrap_or(value)));
            } else {
                trace!(node, prefix = %prefix, "extract: field");
                let mut terms = Vec::new();
                self.extract_node(value, depth + 1, &mut terms);
                out.push(SearchTerm::field(prefix, terms));
            }
            return;
        }

        trace!(node, "extract: normal");
        out.push(SearchTerm::Normal(rewrite_wildcards(node)));
    }
}

/// Bare boolean operator words.
fn is_operator(text: &str) -> bool {
    text.eq_ignore_ascii_case("or") || text.eq_ignore_ascii_case("and")
}

/// Interior of a node wrapped in an outer `(` … `)` whose closer is not
/// escaped.
fn group_interior(node: &str) -> Option<&str> {
    let last = node.len().checked_sub(1)?;
    if node.len() >= 2 && node.starts_with('(') && node.ends_with(')') && !is_escaped(node, last) {
        Some(&node[1..last])
    } else {
        None
    }
}

/// Interior of a quote-delimited text of length > 1. The closing quote is
/// optional so that an unterminated quote still reads as quoted.
fn unquote(text: &str) -> Option<&str> {
    let quote = text.chars().next().filter(|&c| matches!(c, '"' | '\''))?;
    if text.len() <= 1 {
        return None;
    }
    let rest = &text[1..];
    Some(rest.strip_suffix(quote).unwrap_or(rest))
}
