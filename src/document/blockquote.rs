//! Nested blockquotes.

use std::sync::LazyLock;

use regex::Regex;

use super::lines::LineWriter;

static BLOCKQUOTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(>+)\s(.+)$").expect("valid blockquote pattern"));

/// Running quote depth while scanning lines.
#[derive(Debug, Default)]
struct QuoteDepth(usize);

impl QuoteDepth {
    /// Open or close one level at a time until the depth is `target`.
    fn step_to(&mut self, target: usize, out: &mut LineWriter) {
        while self.0 > target {
            out.markup("</blockquote>");
            self.0 -= 1;
        }
        while self.0 < target {
            out.markup("<blockquote>");
            self.0 += 1;
        }
    }
}

/// Render `>` quote lines.
///
/// The number of leading `>` is the nesting depth. Consecutive quote lines are
/// joined with `<br>`, and any line that is not a quote closes every open level.
pub fn parse_blockquotes(text: &str) -> String {
    let mut out = LineWriter::with_capacity(text.len());
    let mut depth = QuoteDepth::default();

    for line in text.split('\n') {
        if let Some(caps) = BLOCKQUOTE.captures(line) {
            depth.step_to(caps[1].len(), &mut out);
            out.markup(&caps[2]);
            out.markup("<br>");
        } else {
            depth.step_to(0, &mut out);
            out.line(line);
        }
    }
    depth.step_to(0, &mut out);

    out.finish()
}
