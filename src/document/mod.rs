//! Markdown to HTML conversion.
//!
//! Rendering is a fixed sequence of text-to-text passes (see [`Pass`]).
//! No document tree is built: every pass rewrites the flat output of the one
//! before it, and nothing is kept between calls.
//!
//! - Block passes scan line by line with explicit state: fenced code,
//!   thematic breaks, tables, blockquotes, lists and headings.
//! - Inline passes rewrite spans anywhere in the text: images, emphasis,
//!   code spans and links.

mod blockquote;
mod escape;
mod fence;
mod inline;
mod lines;
mod list;
pub mod page;
mod pipeline;
mod reference;
mod rule;
mod table;
mod types;

pub use escape::escape_html;
pub use pipeline::{Pass, parse};
pub use reference::FALLBACK_IMAGE;
pub use types::{Alignment, ListFrame, ListKind};

/// Syntax guide rendered when no input is given.
pub const EXAMPLE_MARKDOWN: &str = include_str!("guide.md");

/// Markdown file extensions recognized by the preview host.
const MARKDOWN_EXTENSIONS: &[&str] = &["md", "markdown", "mdown", "mkd", "mdx"];

/// Returns true if the file extension is a recognized markdown extension.
pub fn is_markdown_file(path: &std::path::Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| MARKDOWN_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
}
