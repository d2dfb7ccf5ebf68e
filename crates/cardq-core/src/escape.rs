//! Escaping predicates.
//!
//! A character is escaped when the character immediately before it is a
//! backslash. Only three characters honour escapes: the field separator `:`
//! and the wildcards `_` and `*`. Every other backslash is kept as typed.

/// Single-character wildcard glyph produced for `_`.
pub const SINGLE_WILDCARD: &str = ".";

/// Multi-character wildcard glyph produced for `*`.
pub const MULTI_WILDCARD: &str = ".*";

/// Whether the character starting at byte `index` of `text` is preceded by a
/// backslash. `index` must lie on a char boundary.
pub fn is_escaped(text: &str, index: usize) -> bool {
    text[..index].ends_with('\\')
}

/// Byte index of the first unescaped `:` in `text`, if any.
pub fn find_field_separator(text: &str) -> Option<usize> {
    text.char_indices()
        .find(|&(i, c)| c == ':' && !is_escaped(text, i))
        .map(|(i, _)| i)
}

/// Rewrite unescaped `_` and `*` into wildcard glyphs.
///
/// `\_`, `\*` and `\:` lose their backslash and keep the literal character.
pub fn rewrite_wildcards(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 4);
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.peek() {
                Some(&next @ ('_' | '*' | ':')) => {
                    out.push(next);
                    chars.next();
                }
                _ => out.push('\\'),
            },
            '_' => out.push_str(SINGLE_WILDCARD),
            '*' => out.push_str(MULTI_WILDCARD),
            c => out.push(c),
        }
    }
    out
}
