//! Expected pipeline output for every query in
//! [`cardq_core::samples::SAMPLE_QUERIES`], in the same order.
//!
//! Each row is `(nodes, terms)` with terms in `Display` notation, which keeps
//! the table compact and doubles as a check of that notation.

pub const SAMPLE_EXPECTATIONS: &[(&[&str], &str)] = &[
    (&["dog"], r#"[normal("dog")]"#),
    (&["dog", "cat"], r#"[normal("dog"), normal("cat")]"#),
    (&["dog", "or", "cat"], r#"[normal("dog"), normal("cat")]"#),
    (&["dog", "(cat or mouse)"], r#"[normal("dog"), normal("cat"), normal("mouse")]"#),
    (&["-cat"], "[]"),
    (&["-cat", "-mouse"], "[]"),
    (&["cat", r#""and""#, "mouse"], r#"[normal("cat"), normal("and"), normal("mouse")]"#),
    (&["-(cat or mouse)"], "[]"),
    (&["d_g"], r#"[normal("d.g")]"#),
    (&["d*g"], r#"[normal("d.*g")]"#),
    (&["w:dog"], r#"[boundary("dog")]"#),
    (&["w:dog*"], r#"[boundary("dog*")]"#),
    (&["w:d_g"], r#"[boundary("d_g")]"#),
    (&["w:*dog"], r#"[boundary("*dog")]"#),
    (&[r#"w:"and also""#], r#"[boundary("and also")]"#),
    (&[r#"nc:"and also""#], r#"[boundary("and also")]"#),
    (&["front:dog"], r#"[field("front", [normal("dog")])]"#),
    (&["front:*dog*"], r#"[field("front", [normal(".*dog.*")])]"#),
    (&["front:"], r#"[field("front", [])]"#),
    (&["front:_*"], r#"[field("front", [normal("..*")])]"#),
    (&["front:*"], r#"[field("front", [normal(".*")])]"#),
    (&["fr*:text"], r#"[field("fr*", [normal("text")])]"#),
    (
        &["back:(cat or mouse -dog)"],
        r#"[field("back", [normal("cat"), normal("mouse")])]"#,
    ),
    (&[r#""animal front:a dog""#], r#"[field("animal front", [normal("a dog")])]"#),
    (&[r#""a dog""#], r#"[quoted("a dog")]"#),
    (&[r#"-"a dog""#], "[]"),
    (&[r"d\g"], r#"[normal("d\\g")]"#),
    (&["_og"], r#"[normal(".og")]"#),
    (&["*og"], r#"[normal(".*og")]"#),
    (&["do_"], r#"[normal("do.")]"#),
    (&["do*"], r#"[normal("do.*")]"#),
    (&[r"_do\"], r#"[normal(".do\\")]"#),
    (&[r#"\"dog\""#], r#"[normal("\\\"dog\\\"")]"#),
    (&[r"\dog\"], r#"[normal("\\dog\\")]"#),
    (&[r#""(text)""#], r#"[quoted("(text)")]"#),
    (&[r"\(text\)"], r#"[normal("\\(text\\)")]"#),
    (&[r#""\(text\)""#], r#"[quoted("\\(text\\)")]"#),
    (&["w:3:30"], r#"[boundary("3:30")]"#),
    (&[r"3\:30"], r#"[normal("3:30")]"#),
];
