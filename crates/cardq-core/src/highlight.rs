//! Highlight patterns — regular expressions for marking matches in fields.
//!
//! Extracted terms are grouped by the field they apply to and turned into one
//! regex source per field. The key `""` holds terms that apply to every
//! field. The map serializes to a flat JSON object, which is the form an
//! editor-side highlighter consumes.
//!
//! In a [`SearchTerm::Normal`] term `.` matches any one character and `.*`
//! any run (made lazy so a highlight does not swallow the rest of a line).
//! Quoted and boundary terms are matched literally.

use crate::types::SearchTerm;
use crate::Result;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ops::Range;

/// Key for terms that are not restricted to a field.
pub const ANY_FIELD: &str = "";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HighlightPatterns {
    patterns: BTreeMap<String, String>,
}

impl HighlightPatterns {
    pub fn from_terms(terms: &[SearchTerm]) -> Self {
        let mut alternatives: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for term in terms {
            collect(term, ANY_FIELD, &mut alternatives);
        }

        let patterns = alternatives
            .into_iter()
            .map(|(key, alts)| {
                let joined = alts
                    .iter()
                    .map(|alt| format!("(?:{alt})"))
                    .collect::<Vec<_>>()
                    .join("|");
                (key, joined)
            })
            .collect();
        Self { patterns }
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Regex source stored under `key` (`""` for any field).
    pub fn get(&self, key: &str) -> Option<&str> {
        self.patterns.get(key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.patterns.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Case-insensitive regex for everything that should be highlighted in
    /// `field`: the any-field patterns plus the field's own. `None` when
    /// nothing applies.
    pub fn regex_for(&self, field: &str) -> Result<Option<Regex>> {
        let own = field.to_lowercase();
        let sources: Vec<&str> = [self.get(ANY_FIELD), self.get(&own).filter(|_| !own.is_empty())]
            .into_iter()
            .flatten()
            .collect();
        if sources.is_empty() {
            return Ok(None);
        }
        let regex = RegexBuilder::new(&sources.join("|"))
            .case_insensitive(true)
            .build()?;
        Ok(Some(regex))
    }

    /// Byte ranges of every highlight in `text` for `field`.
    pub fn find_matches(&self, field: &str, text: &str) -> Result<Vec<Range<usize>>> {
        Ok(match self.regex_for(field)? {
            Some(re) => re
                .find_iter(text)
                .filter(|m| !m.is_empty())
                .map(|m| m.range())
                .collect(),
            None => Vec::new(),
        })
    }
}

fn collect(term: &SearchTerm, key: &str, out: &mut BTreeMap<String, Vec<String>>) {
    let pattern = match term {
        SearchTerm::Field { name, terms } => {
            // Nested fields stay under the outermost field name.
            let key = if key.is_empty() { name.to_lowercase() } else { key.to_string() };
            for sub in terms {
                collect(sub, &key, out);
            }
            return;
        }
        SearchTerm::Normal(text) => wildcard_pattern(text),
        SearchTerm::Quoted(text) => regex::escape(text),
        SearchTerm::Boundary(text) => format!(r"\b{}\b", regex::escape(text)),
    };
    if pattern.is_empty() {
        return;
    }
    let alts = out.entry(key.to_string()).or_default();
    if !alts.contains(&pattern) {
        alts.push(pattern);
    }
}

fn wildcard_pattern(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 4);
    let mut chars = text.chars().peekable();
    let mut buf = [0u8; 4];
    while let Some(c) = chars.next() {
        if c == '.' {
            if chars.next_if_eq(&'*').is_some() {
                out.push_str(".*?");
            } else {
                out.push('.');
            }
        } else {
            out.push_str(&regex::escape(c.encode_utf8(&mut buf)));
        }
    }
    out
}
