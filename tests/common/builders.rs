//! Term builders — one-letter constructors for readable expectations.
//!
//! ```rust
//! let expected = vec![n("dog"), f("front", vec![n(".*dog.*")])];
//! ```

use cardq_core::SearchTerm;

pub fn n(text: &str) -> SearchTerm {
    SearchTerm::normal(text)
}

pub fn q(text: &str) -> SearchTerm {
    SearchTerm::quoted(text)
}

pub fn b(text: &str) -> SearchTerm {
    SearchTerm::boundary(text)
}

pub fn f(name: &str, terms: Vec<SearchTerm>) -> SearchTerm {
    SearchTerm::field(name, terms)
}
