//! Single-line rewrites: thematic breaks and headings.

use std::sync::LazyLock;

use regex::{Captures, Regex};

// `R` lets `$` stop before a `\r\n` line ending and leaves the `\r` in place.
static HORIZONTAL_RULE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?mR)^(?:-{3,}|\*{3,}|_{3,})$").expect("valid horizontal rule pattern")
});

static HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?mR)^(#+)[ \t](.+)$").expect("valid heading pattern"));

const MAX_HEADING_LEVEL: usize = 6;

/// Turn every line made of three or more of the same `-`, `*` or `_` into `<hr>`.
pub fn parse_horizontal_rules(text: &str) -> String {
    HORIZONTAL_RULE.replace_all(text, "<hr>").into_owned()
}

/// Turn `#`-prefixed lines into `<h1>`..`<h6>`.
///
/// Runs longer than six `#` still produce a level six heading.
pub fn parse_headings(text: &str) -> String {
    HEADING
        .replace_all(text, |caps: &Captures<'_>| {
            let level = caps[1].len().min(MAX_HEADING_LEVEL);
            heading(level, caps[2].trim())
        })
        .into_owned()
}

fn heading(level: usize, text: &str) -> String {
    format!("<h{level}>{text}</h{level}>")
}
