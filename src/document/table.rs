//! Pipe tables with a header row and an alignment row.

use std::sync::LazyLock;

use regex::Regex;

use super::lines::LineWriter;
use super::types::Alignment;

static TABLE_ROW: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\|(.+)\|$").expect("valid table row pattern"));

static TABLE_DELIMITER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\|(?:\s*:?-+:?\s*\|)+$").expect("valid table delimiter pattern")
});

/// Scanner state for one table block.
#[derive(Debug, Default)]
struct TableState {
    in_table: bool,
    alignments: Vec<Alignment>,
}

impl TableState {
    fn alignment(&self, index: usize) -> Alignment {
        self.alignments.get(index).copied().unwrap_or_default()
    }

    fn open(&mut self, out: &mut LineWriter, header: &[&str], delimiter: &[&str]) {
        self.in_table = true;
        self.alignments = delimiter
            .iter()
            .map(|cell| Alignment::from_delimiter(cell))
            .collect();

        out.markup("<table><thead><tr>");
        self.cells(out, "th", header);
        out.markup("</tr></thead><tbody>");
    }

    fn row(&self, out: &mut LineWriter, cells: &[&str]) {
        out.markup("<tr>");
        self.cells(out, "td", cells);
        out.markup("</tr>");
    }

    fn cells(&self, out: &mut LineWriter, tag: &str, cells: &[&str]) {
        for (index, cell) in cells.iter().enumerate() {
            out.markup(&format!(
                "<{tag} style=\"text-align: {}\">{cell}</{tag}>",
                self.alignment(index).as_css()
            ));
        }
    }

    fn close(&mut self, out: &mut LineWriter) {
        if self.in_table {
            out.markup("</tbody></table>");
            self.in_table = false;
            self.alignments.clear();
        }
    }
}

/// Split the inside of a `| a | b |` row into trimmed cells.
fn split_cells(line: &str) -> Option<Vec<&str>> {
    let caps = TABLE_ROW.captures(line)?;
    let inner = caps.get(1)?.as_str();
    Some(inner.split('|').map(str::trim).collect())
}

/// Render pipe tables.
///
/// A table starts only where a row is directly followed by a delimiter row,
/// and ends at the first line that is not a row.
pub fn parse_tables(text: &str) -> String {
    let lines: Vec<&str> = text.split('\n').collect();
    let mut out = LineWriter::with_capacity(text.len());
    let mut state = TableState::default();

    let mut i = 0;
    while i < lines.len() {
        let line = lines[i];
        match split_cells(line) {
            Some(cells) if state.in_table => state.row(&mut out, &cells),
            Some(cells) => {
                let delimiter = lines
                    .get(i + 1)
                    .filter(|next| TABLE_DELIMITER.is_match(next))
                    .and_then(|next| split_cells(next));
                if let Some(delimiter) = delimiter {
                    state.open(&mut out, &cells, &delimiter);
                    i += 1;
                } else {
                    out.line(line);
                }
            }
            None => {
                state.close(&mut out);
                out.line(line);
            }
        }
        i += 1;
    }
    state.close(&mut out);

    out.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_with_alignments() {
        let out = parse_tables("| a | b |\n| --- | :---: |\n| 1 | 2 |");
        assert_eq!(
            out,
            "<table><thead><tr>\
             <th style=\"text-align: left\">a</th>\
             <th style=\"text-align: center\">b</th>\
             </tr></thead><tbody>\
             <tr><td style=\"text-align: left\">1</td>\
             <td style=\"text-align: center\">2</td></tr>\
             </tbody></table>"
        );
    }

    #[test]
    fn test_right_alignment() {
        let out = parse_tables("| n |\n|---:|\n| 5 |");
        assert!(out.contains("<th style=\"text-align: right\">n</th>"));
        assert!(out.contains("<td style=\"text-align: right\">5</td>"));
    }

    #[test]
    fn test_row_without_delimiter_is_not_a_table() {
        let src = "| a | b |\n| 1 | 2 |";
        assert_eq!(parse_tables(src), src);
    }

    #[test]
    fn test_table_closes_on_first_non_row_line() {
        let out = parse_tables("before\n| a |\n|---|\n| 1 |\nafter\n| 2 |");
        assert_eq!(
            out,
            "before\n<table><thead><tr><th style=\"text-align: left\">a</th></tr></thead>\
             <tbody><tr><td style=\"text-align: left\">1</td></tr></tbody></table>\
             after\n| 2 |"
        );
    }

    #[test]
    fn test_short_and_long_rows() {
        let out = parse_tables("| a | b |\n|---|--:|\n| 1 |\n| 1 | 2 | 3 |");
        assert!(out.contains("<tr><td style=\"text-align: left\">1</td></tr>"));
        assert!(out.contains("<td style=\"text-align: right\">2</td><td style=\"text-align: left\">3</td>"));
    }

    #[test]
    fn test_header_only_table_is_closed_at_end() {
        let out = parse_tables("| a |\n|:-|");
        assert!(out.ends_with("</tr></thead><tbody></tbody></table>"));
    }

    #[test]
    fn test_delimiter_cells_need_a_dash() {
        let src = "| a |\n| :: |";
        assert_eq!(parse_tables(src), src);
    }
}
