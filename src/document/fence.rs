//! Fenced code blocks.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::escape::escape_html;

static CODE_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```(.*?)```").expect("valid code block pattern"));

/// Replace every ```` ``` ```` fenced region with an escaped `<pre><code>` block.
///
/// Fences pair up left to right and a region ends at the first closing fence.
/// An unpaired opening fence is left as plain text.
pub fn parse_code_blocks(text: &str) -> String {
    CODE_BLOCK
        .replace_all(text, |caps: &Captures<'_>| {
            let code = trim_fence_padding(&caps[1]);
            format!("<pre><code>{}</code></pre>", escape_html(code))
        })
        .into_owned()
}

/// Drop the line break right after the opening fence and right before the closing one.
fn trim_fence_padding(code: &str) -> &str {
    let code = code
        .strip_prefix("\r\n")
        .or_else(|| code.strip_prefix('\n'))
        .unwrap_or(code);
    code.strip_suffix("\r\n")
        .or_else(|| code.strip_suffix('\n'))
        .unwrap_or(code)
}
