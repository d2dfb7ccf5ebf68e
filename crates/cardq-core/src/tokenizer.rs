//! Tokenizer — splits a raw query into nodes.
//!
//! A node is a slice of the input that keeps its original delimiters: quote
//! characters, parentheses and leading `-` marks all stay in place. The
//! extractor decides what those delimiters mean.
//!
//! The scanner is a two-state machine:
//!
//! - **scanning** for the start of a term, skipping whitespace and collecting
//!   leading `-` marks;
//! - **awaiting** the closer of the current term: a matching quote, the
//!   level-zero `)`, or whitespace for bare words.
//!
//! A bare word is promoted to a quoted or grouped capture when a `"` or `(`
//! appears inside it, so `nc:"and also"` and `back:(cat or dog)` come out
//! as single nodes. The end of the string closes whatever is open.

use tracing::trace;

/// What ends the capture in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Closer {
    DoubleQuote,
    SingleQuote,
    /// Closed by the `)` that brings `level` back to zero.
    Paren { level: usize },
    Whitespace,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Scanning,
    Awaiting(Closer),
}

/// Split `query` into nodes, left to right.
///
/// Never fails: an unterminated quote or group runs to the end of the input.
pub fn tokenize(query: &str) -> Vec<&str> {
    let mut nodes = Vec::new();
    let mut state = State::Scanning;
    let mut start = 0;
    // Byte offset of the first `-` in a run of pending negation marks.
    let mut negation: Option<usize> = None;

    for (idx, c) in query.char_indices() {
        let end = idx + c.len_utf8();
        let at_end = end == query.len();

        match state {
            State::Scanning => {
                let closer = match c {
                    '"' => Closer::DoubleQuote,
                    '\'' => Closer::SingleQuote,
                    '(' => Closer::Paren { level: 1 },
                    '-' => {
                        negation.get_or_insert(idx);
                        if at_end {
                            // A lone trailing `-` is still a (negated) node.
                            let from = negation.take().unwrap_or(idx);
                            push(&mut nodes, &query[from..end]);
                        }
                        continue;
                    }
                    c if c.is_whitespace() => {
                        // `- cat` is not a negation of `cat`.
                        negation = None;
                        continue;
                    }
                    _ => Closer::Whitespace,
                };
                start = negation.take().unwrap_or(idx);
                if at_end {
                    push(&mut nodes, &query[start..end]);
                } else {
                    state = State::Awaiting(closer);
                }
            }
            State::Awaiting(closer) => {
                let (next, close_at) = advance(closer, c, idx, end);
                match close_at {
                    Some(to) => {
                        push(&mut nodes, &query[start..to]);
                        state = State::Scanning;
                    }
                    None if at_end => {
                        push(&mut nodes, &query[start..end]);
                        state = State::Scanning;
                    }
                    None => state = State::Awaiting(next),
                }
            }
        }
    }

    nodes
}

/// Feed one character to an open capture. Returns the updated closer and,
/// when the capture ends, the exclusive byte offset where it ends.
fn advance(closer: Closer, c: char, idx: usize, end: usize) -> (Closer, Option<usize>) {
    match (closer, c) {
        (Closer::Paren { level }, '(') => (Closer::Paren { level: level + 1 }, None),
        (Closer::Paren { level }, ')') if level > 1 => (Closer::Paren { level: level - 1 }, None),
        (Closer::Paren { .. }, ')') => (closer, Some(end)),
        (Closer::DoubleQuote, '"') | (Closer::SingleQuote, '\'') => (closer, Some(end)),
        (Closer::Whitespace, '"') => (Closer::DoubleQuote, None),
        (Closer::Whitespace, '(') => (Closer::Paren { level: 1 }, None),
        (Closer::Whitespace, c) if c.is_whitespace() => (closer, Some(idx)),
        _ => (closer, None),
    }
}

fn push<'a>(nodes: &mut Vec<&'a str>, node: &'a str) {
    trace!(node, "tokenizer: captured node");
    nodes.push(node);
}
