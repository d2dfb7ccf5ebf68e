//! Fixed sample queries fed through the tokenizer and extractor by the
//! `cardq --samples` inspection command. Their outputs are pinned by the
//! integration tests.

pub const SAMPLE_QUERIES: &[&str] = &[
    "dog",
    "dog cat",
    "dog or cat",
    "dog (cat or mouse)",
    "-cat",
    "-cat -mouse",
    r#"cat "and" mouse"#,
    "-(cat or mouse)",
    "d_g",
    "d*g",
    "w:dog",
    "w:dog*",
    "w:d_g",
    "w:*dog",
    r#"w:"and also""#,
    r#"nc:"and also""#,
    "front:dog",
    "front:*dog*",
    "front:",
    "front:_*",
    "front:*",
    "fr*:text",
    "back:(cat or mouse -dog)",
    r#""animal front:a dog""#,
    r#""a dog""#,
    r#"-"a dog""#,
    r"d\g",
    "_og",
    "*og",
    "do_",
    "do*",
    r"_do\",
    r#"\"dog\""#,
    r"\dog\",
    r#""(text)""#,
    r"\(text\)",
    r#""\(text\)""#,
    "w:3:30",
    r"3\:30",
];
