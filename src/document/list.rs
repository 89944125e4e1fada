//! Ordered and unordered lists, nested by indentation.

use std::sync::LazyLock;

use regex::Regex;

use super::lines::LineWriter;
use super::types::{ListFrame, ListKind};

static UNORDERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\s*)[*+-]\s+(.+)$").expect("valid unordered item pattern"));

static ORDERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\s*)\d+\.\s+(.+)$").expect("valid ordered item pattern"));

/// A recognized list item line.
#[derive(Debug, PartialEq, Eq)]
struct Item<'a> {
    kind: ListKind,
    indent: usize,
    content: &'a str,
}

fn match_item(line: &str) -> Option<Item<'_>> {
    let (kind, caps) = if let Some(caps) = UNORDERED_ITEM.captures(line) {
        (ListKind::Unordered, caps)
    } else {
        (ListKind::Ordered, ORDERED_ITEM.captures(line)?)
    };
    Some(Item {
        kind,
        indent: caps.get(1)?.as_str().chars().count(),
        content: caps.get(2)?.as_str().trim(),
    })
}

/// Stack of open lists, strictly increasing in indent from bottom to top.
#[derive(Debug, Default)]
struct ListStack {
    frames: Vec<ListFrame>,
}

impl ListStack {
    /// Close lists nested deeper than `item`, and a same-depth list of another kind,
    /// then open a list for `item` if nothing at its depth is left open.
    fn enter(&mut self, item: &Item<'_>, out: &mut LineWriter) {
        while let Some(top) = self.frames.last().copied() {
            let deeper = top.indent > item.indent;
            let replaced = top.indent == item.indent && top.kind != item.kind;
            if !(deeper || replaced) {
                break;
            }
            self.pop(out);
        }

        if self.frames.last().is_none_or(|top| top.indent < item.indent) {
            self.frames.push(ListFrame {
                kind: item.kind,
                indent: item.indent,
            });
            out.markup(&format!("<{}>", item.kind.tag()));
        }
    }

    fn pop(&mut self, out: &mut LineWriter) {
        if let Some(frame) = self.frames.pop() {
            out.markup(&format!("</{}>", frame.kind.tag()));
        }
    }

    fn close_all(&mut self, out: &mut LineWriter) {
        while !self.frames.is_empty() {
            self.pop(out);
        }
    }
}

/// Render `-`/`*`/`+` and `1.` item lines as nested `<ul>`/`<ol>` lists.
///
/// Indent is the raw count of leading whitespace characters. A line that is
/// not an item closes every open list.
pub fn parse_lists(text: &str) -> String {
    let mut out = LineWriter::with_capacity(text.len());
    let mut stack = ListStack::default();

    for line in text.split('\n') {
        if let Some(item) = match_item(line) {
            stack.enter(&item, &mut out);
            out.markup(&format!("<li>{}</li>", item.content));
        } else {
            stack.close_all(&mut out);
            out.line(line);
        }
    }
    stack.close_all(&mut out);

    out.finish()
}
