use livemark::document::{FALLBACK_IMAGE, parse};
use proptest::prelude::*;

#[test]
fn test_empty_input_renders_nothing() {
    assert_eq!(parse(""), "");
}

#[test]
fn test_heading_level_never_exceeds_six() {
    assert_eq!(parse("####### x"), "<h6>x</h6>");
}

#[test]
fn test_nested_list_under_ordered_item() {
    let html = parse("1. outer\n    - inner\n2. back");
    assert_eq!(
        html,
        "<ol><li>outer</li><ul><li>inner</li></ul><li>back</li></ol>"
    );
}

#[test]
fn test_blockquote_dedent_closes_one_level() {
    assert_eq!(
        parse(">> a\n> b"),
        "<blockquote><blockquote>a<br></blockquote>b<br></blockquote>"
    );
}

#[test]
fn test_plain_line_after_quote_closes_everything() {
    assert_eq!(
        parse(">>> deep\nplain"),
        "<blockquote><blockquote><blockquote>deep<br>\
         </blockquote></blockquote></blockquote>plain"
    );
}

#[test]
fn test_table_needs_adjacent_delimiter_row() {
    let src = "| a | b |\n\n|---|---|";
    assert_eq!(parse(src), src);
}

#[test]
fn test_table_alignment_mapping() {
    let html = parse("| a | b | c | d |\n| :---: | ---: | :--- | --- |\n| 1 | 2 | 3 | 4 |");
    assert!(html.contains("<th style=\"text-align: center\">a</th>"));
    assert!(html.contains("<th style=\"text-align: right\">b</th>"));
    assert!(html.contains("<th style=\"text-align: left\">c</th>"));
    assert!(html.contains("<th style=\"text-align: left\">d</th>"));
    assert!(html.contains("<td style=\"text-align: center\">1</td>"));
}

#[test]
fn test_two_column_table_scenario() {
    let html = parse("| a | b |\n| --- | :---: |\n| 1 | 2 |");
    assert_eq!(html.matches("<table>").count(), 1);
    assert_eq!(html.matches("<tr>").count(), 2);
    assert_eq!(html.matches("<thead>").count(), 1);
    assert_eq!(html.matches("<th ").count(), 2);
    assert_eq!(html.matches("<td ").count(), 2);
    assert!(html.contains("<th style=\"text-align: left\">a</th><th style=\"text-align: center\">b</th>"));
    assert!(html.ends_with("</tbody></table>"));
}

#[test]
fn test_code_block_content_is_escaped_once() {
    assert_eq!(
        parse("```\n<b>&amp;</b>\n```"),
        "<pre><code>&lt;b&gt;&amp;amp;&lt;/b&gt;</code></pre>"
    );
}

#[test]
fn test_bold_containing_italic() {
    assert_eq!(
        parse("**bold _and italic_**"),
        "<strong>bold <em>and italic</em></strong>"
    );
}

#[test]
fn test_image_with_title_scenario() {
    let html = parse(r#"![alt](http://x/y.png "t")"#);
    assert!(html.starts_with("<img "));
    assert!(html.contains(r#"src="http://x/y.png""#));
    assert!(html.contains(r#"alt="alt""#));
    assert!(html.contains(r#"title="t""#));
    assert!(html.contains(&format!(
        "onerror=\"this.onerror=null;this.src='{FALLBACK_IMAGE}';\""
    )));
}

#[test]
fn test_unterminated_blocks_are_closed() {
    let html = parse("- a\n    - b");
    assert!(html.ends_with("</ul></ul>"));
    let html = parse("> a");
    assert!(html.ends_with("</blockquote>"));
    let html = parse("| a |\n|---|");
    assert!(html.ends_with("</table>"));
}

#[test]
fn test_unknown_syntax_passes_through() {
    let src = "Some ~~strike~~ and <div>raw</div> and [^note]";
    assert_eq!(parse(src), src);
}

#[test]
fn test_mixed_document() {
    let src = "# Title\n\nIntro with `code`.\n\n- one\n- two\n\n---\n\n> quote";
    assert_eq!(
        parse(src),
        "<h1>Title</h1>\n\nIntro with <code>code</code>.\n\n\
         <ul><li>one</li><li>two</li></ul>\n<hr>\n\n\
         <blockquote>quote<br></blockquote>"
    );
}

#[test]
fn test_crlf_document_keeps_rules() {
    assert_eq!(parse("text\r\n---\r\nmore"), "text\r\n<hr>\r\nmore");
}

fn list_line() -> impl Strategy<Value = String> {
    (0..4usize, any::<bool>(), "[a-z]{1,8}").prop_map(|(depth, ordered, word)| {
        let marker = if ordered { "1." } else { "-" };
        format!("{}{marker} {word}", "  ".repeat(depth))
    })
}

fn quote_line() -> impl Strategy<Value = String> {
    (0..5usize, "[a-z]{1,8}").prop_map(|(depth, word)| {
        if depth == 0 {
            word
        } else {
            format!("{} {word}", ">".repeat(depth))
        }
    })
}

proptest! {
    #[test]
    fn parse_is_deterministic(src in "\\PC{0,300}") {
        prop_assert_eq!(parse(&src), parse(&src));
    }

    #[test]
    fn parse_never_panics_on_markup_soup(src in "[#>|*_`\\-+:!\\[\\]() a1.\n]{0,200}") {
        let _ = parse(&src);
    }

    #[test]
    fn plain_text_is_unchanged(src in "[a-zA-Z ,\n]{0,200}") {
        prop_assert_eq!(parse(&src), src);
    }

    #[test]
    fn heading_levels_are_clamped(hashes in 1..20usize, word in "[a-z]{1,10}") {
        let html = parse(&format!("{} {word}", "#".repeat(hashes)));
        let level = hashes.min(6);
        prop_assert_eq!(html, format!("<h{level}>{word}</h{level}>"));
    }

    #[test]
    fn list_tags_are_balanced(lines in prop::collection::vec(list_line(), 1..30)) {
        let html = parse(&lines.join("\n"));
        prop_assert_eq!(html.matches("<ul>").count(), html.matches("</ul>").count());
        prop_assert_eq!(html.matches("<ol>").count(), html.matches("</ol>").count());
        prop_assert_eq!(html.matches("<li>").count(), lines.len());
    }

    #[test]
    fn blockquote_tags_are_balanced(lines in prop::collection::vec(quote_line(), 1..30)) {
        let html = parse(&lines.join("\n"));
        prop_assert_eq!(
            html.matches("<blockquote>").count(),
            html.matches("</blockquote>").count()
        );
    }
}
