//! Assertion macros for cardq harnesses.
//!
//! These wrap `pretty_assertions` and put the query under test in the
//! failure message, so a failing row of a case table is easy to find.

/// Assert that parsing `$query` yields exactly `$expected`.
///
/// ```rust
/// assert_terms!("dog or cat", vec![n("dog"), n("cat")]);
/// ```
#[macro_export]
macro_rules! assert_terms {
    ($query:expr, $expected:expr) => {{
        let query: &str = $query;
        let actual = cardq_core::parse(query);
        let expected: Vec<cardq_core::SearchTerm> = $expected;
        pretty_assertions::assert_eq!(actual, expected, "query: {:?}", query);
    }};
}

/// Assert that tokenizing `$query` yields exactly the nodes `$expected`.
#[macro_export]
macro_rules! assert_nodes {
    ($query:expr, $expected:expr) => {{
        let query: &str = $query;
        let actual = cardq_core::tokenize(query);
        let expected: &[&str] = $expected;
        pretty_assertions::assert_eq!(actual, expected, "query: {:?}", query);
    }};
}

/// Byte offset of `node` inside `query`. Panics if `node` does not borrow
/// from `query`.
pub fn offset_in(query: &str, node: &str) -> usize {
    let base = query.as_ptr() as usize;
    let at = node.as_ptr() as usize;
    assert!(
        at >= base && at + node.len() <= base + query.len(),
        "node {node:?} is not a slice of {query:?}"
    );
    at - base
}
