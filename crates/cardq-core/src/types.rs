//! Core types for cardq-core.
//!
//! [`SearchTerm`] is the single output type of the extractor. A `Field` term
//! nests its own extracted value, so the type is recursive.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One searchable term extracted from a query.
///
/// Text is kept in the case it was typed; only classification is
/// case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "tag", content = "term", rename_all = "lowercase")]
pub enum SearchTerm {
    /// Plain content term. `_` and `*` have already been rewritten into the
    /// `.` and `.*` wildcard glyphs.
    Normal(String),
    /// Term whose literal meaning was forced by quoting.
    Quoted(String),
    /// Whole-word search (`w:` and `nc:` prefixes).
    Boundary(String),
    /// Search restricted to a named field. The value is extracted recursively.
    Field { name: String, terms: Vec<SearchTerm> },
}

impl SearchTerm {
    pub fn normal(text: impl Into<String>) -> Self {
        SearchTerm::Normal(text.into())
    }

    pub fn quoted(text: impl Into<String>) -> Self {
        SearchTerm::Quoted(text.into())
    }

    pub fn boundary(text: impl Into<String>) -> Self {
        SearchTerm::Boundary(text.into())
    }

    pub fn field(name: impl Into<String>, terms: Vec<SearchTerm>) -> Self {
        SearchTerm::Field {
            name: name.into(),
            terms,
        }
    }

    /// Short lowercase name of the variant, matching the serialized tag.
    pub fn tag(&self) -> &'static str {
        match self {
            SearchTerm::Normal(_) => "normal",
            SearchTerm::Quoted(_) => "quoted",
            SearchTerm::Boundary(_) => "boundary",
            SearchTerm::Field { .. } => "field",
        }
    }
}

impl fmt::Display for SearchTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchTerm::Normal(text) | SearchTerm::Quoted(text) | SearchTerm::Boundary(text) => {
                write!(f, "{}({:?})", self.tag(), text)
            }
            SearchTerm::Field { name, terms } => {
                write!(f, "field({name:?}, ")?;
                write_list(f, terms)?;
                write!(f, ")")
            }
        }
    }
}

/// Write terms as `[a, b, c]` using their `Display` form.
pub fn write_list(f: &mut fmt::Formatter<'_>, terms: &[SearchTerm]) -> fmt::Result {
    write!(f, "[")?;
    for (i, term) in terms.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{term}")?;
    }
    write!(f, "]")
}

/// `Display` adapter for a term slice.
pub struct TermList<'a>(pub &'a [SearchTerm]);

impl fmt::Display for TermList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_list(f, self.0)
    }
}
