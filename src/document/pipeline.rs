//! The ordered rewriting passes and the entry point that runs them.

use std::fmt;

use super::blockquote::parse_blockquotes;
use super::fence::parse_code_blocks;
use super::inline::parse_inline_formats;
use super::list::parse_lists;
use super::reference::{parse_images, parse_links};
use super::rule::{parse_headings, parse_horizontal_rules};
use super::table::parse_tables;
use crate::perf;

/// One text-to-text rewriting pass.
///
/// Each pass reads the full output of the one before it, so [`Pass::ALL`] is
/// the only valid order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    CodeBlocks,
    HorizontalRules,
    Tables,
    Blockquotes,
    Lists,
    Headings,
    Images,
    InlineFormats,
    Links,
}

impl Pass {
    /// Every pass in execution order.
    ///
    /// Code blocks come first so their content is escaped before anything
    /// else looks at it. Images come before links because `![a](b)` contains
    /// the link shape, and links come last so their text is already formatted.
    pub const ALL: [Self; 9] = [
        Self::CodeBlocks,
        Self::HorizontalRules,
        Self::Tables,
        Self::Blockquotes,
        Self::Lists,
        Self::Headings,
        Self::Images,
        Self::InlineFormats,
        Self::Links,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::CodeBlocks => "code_blocks",
            Self::HorizontalRules => "horizontal_rules",
            Self::Tables => "tables",
            Self::Blockquotes => "blockquotes",
            Self::Lists => "lists",
            Self::Headings => "headings",
            Self::Images => "images",
            Self::InlineFormats => "inline_formats",
            Self::Links => "links",
        }
    }

    pub fn apply(self, text: &str) -> String {
        match self {
            Self::CodeBlocks => parse_code_blocks(text),
            Self::HorizontalRules => parse_horizontal_rules(text),
            Self::Tables => parse_tables(text),
            Self::Blockquotes => parse_blockquotes(text),
            Self::Lists => parse_lists(text),
            Self::Headings => parse_headings(text),
            Self::Images => parse_images(text),
            Self::InlineFormats => parse_inline_formats(text),
            Self::Links => parse_links(text),
        }
    }
}

impl fmt::Display for Pass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Convert markdown source into an HTML fragment.
///
/// Never fails: unmatched constructs pass through as text and unterminated
/// blocks are closed at the end of input.
///
/// # Example
///
/// ```
/// use livemark::document::parse;
///
/// assert_eq!(parse(""), "");
/// assert_eq!(parse("# Hello"), "<h1>Hello</h1>");
/// ```
pub fn parse(source: &str) -> String {
    if source.is_empty() {
        return String::new();
    }

    let _scope = perf::scope("document.parse");
    let mut html = source.to_owned();
    for pass in Pass::ALL {
        let next = pass.apply(&html);
        tracing::trace!(pass = pass.name(), input = html.len(), output = next.len(), "render pass");
        if perf::is_debug_log_enabled() {
            perf::log_event(
                "render.pass",
                format!("pass={pass} in={} out={}", html.len(), next.len()),
            );
        }
        html = next;
    }
    tracing::debug!(source = source.len(), html = html.len(), "rendered markdown");

    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty() {
        assert_eq!(parse(""), "");
    }

    #[test]
    fn test_plain_text_passes_through() {
        assert_eq!(parse("hello\n\nworld"), "hello\n\nworld");
        assert_eq!(parse("trailing\n"), "trailing\n");
    }

    #[test]
    fn test_pass_order_is_fixed() {
        let names: Vec<_> = Pass::ALL.iter().map(|p| p.name()).collect();
        assert_eq!(
            names,
            [
                "code_blocks",
                "horizontal_rules",
                "tables",
                "blockquotes",
                "lists",
                "headings",
                "images",
                "inline_formats",
                "links",
            ]
        );
    }

    #[test]
    fn test_image_is_not_mistaken_for_link() {
        let html = parse("![a](b.png)");
        assert!(html.starts_with("<img src=\"b.png\""));
        assert!(!html.contains("<a "));
    }

    #[test]
    fn test_link_text_is_formatted_first() {
        assert_eq!(
            parse("[**x**](u)"),
            "<a href=\"u\" target=\"_blank\" rel=\"noopener noreferrer\"><strong>x</strong></a>"
        );
    }

    #[test]
    fn test_fence_markers_never_become_code_spans() {
        let html = parse("```\nx < y\n```");
        assert_eq!(html, "<pre><code>x &lt; y</code></pre>");
    }

    #[test]
    fn test_later_passes_still_see_code_block_text() {
        let html = parse("```\n`x` and *y*\n```");
        assert_eq!(
            html,
            "<pre><code><code>x</code> and <em>y</em></code></pre>"
        );
    }

    #[test]
    fn test_heading_with_inline_formatting() {
        assert_eq!(parse("## *Hi*"), "<h2><em>Hi</em></h2>");
    }

    #[test]
    fn test_list_items_get_inline_formatting() {
        assert_eq!(
            parse("- **a**\n- [b](c)"),
            "<ul><li><strong>a</strong></li>\
             <li><a href=\"c\" target=\"_blank\" rel=\"noopener noreferrer\">b</a></li></ul>"
        );
    }
}
