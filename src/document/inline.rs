//! Inline emphasis and code spans.
//!
//! The three sub-passes run over the whole text in a fixed order: bold, then
//! italic, then code spans. None of them skips markup produced earlier, so a
//! `*` or `_` inside a code span can still open emphasis.

use super::escape::escape_html;

const BOLD_DELIMITERS: &[&str] = &["**", "__"];
const ITALIC_DELIMITERS: &[&str] = &["*", "_"];
const CODE_DELIMITERS: &[&str] = &["`"];

/// Apply bold, italic and code span formatting in that order.
pub fn parse_inline_formats(text: &str) -> String {
    let text = parse_bold(text);
    let text = parse_italic(&text);
    parse_inline_code(&text)
}

/// `**text**` and `__text__` become `<strong>`.
pub fn parse_bold(text: &str) -> String {
    replace_delimited(text, BOLD_DELIMITERS, true, |body| {
        format!("<strong>{body}</strong>")
    })
}

/// `*text*` and `_text_` become `<em>`.
pub fn parse_italic(text: &str) -> String {
    replace_delimited(text, ITALIC_DELIMITERS, true, |body| format!("<em>{body}</em>"))
}

/// `` `text` `` becomes an escaped `<code>` span.
pub fn parse_inline_code(text: &str) -> String {
    replace_delimited(text, CODE_DELIMITERS, false, |body| {
        format!("<code>{}</code>", escape_html(body))
    })
}

/// Find the body of a span opened by `delimiter` at the start of `rest`.
///
/// The body is the shortest non-empty run on the same line that is followed by
/// the same delimiter. With `reject_doubled`, a body may not itself start with
/// the delimiter. Returns the body and the number of bytes the whole span covers.
fn span_at<'a>(rest: &'a str, delimiter: &str, reject_doubled: bool) -> Option<(&'a str, usize)> {
    let after_open = rest.strip_prefix(delimiter)?;
    if reject_doubled && after_open.starts_with(delimiter) {
        return None;
    }
    let first = after_open.chars().next().filter(|&c| c != '\n')?;
    // Only scan up to the nearest closer, never to the end of the line.
    let body_tail = &after_open[first.len_utf8()..];
    let close = body_tail.find(delimiter)?;
    if body_tail[..close].contains('\n') {
        return None;
    }
    let close = first.len_utf8() + close;
    Some((&after_open[..close], delimiter.len() * 2 + close))
}

/// Rewrite every delimited span, scanning left to right.
///
/// At each position the delimiters are tried in order; the first one that
/// forms a complete span wins and scanning resumes after its closing delimiter.
fn replace_delimited(
    text: &str,
    delimiters: &[&str],
    reject_doubled: bool,
    wrap: impl Fn(&str) -> String,
) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pos = 0;

    while let Some(ch) = text[pos..].chars().next() {
        let rest = &text[pos..];
        let span = delimiters
            .iter()
            .find_map(|delimiter| span_at(rest, delimiter, reject_doubled));
        if let Some((body, consumed)) = span {
            out.push_str(&wrap(body));
            pos += consumed;
        } else {
            out.push(ch);
            pos += ch.len_utf8();
        }
    }

    out
}
