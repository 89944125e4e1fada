//! Standalone HTML page around a rendered fragment.

use super::escape::escape_html;

/// Title used when none is configured.
pub const DEFAULT_TITLE: &str = "Preview";

/// Wrap a rendered fragment in a complete HTML5 document.
///
/// The fragment goes inside `<article class="prose">`, the display region a
/// preview host injects markup into. Only the title is escaped.
pub fn wrap(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
</head>
<body>
<article class="prose">
{body}
</article>
</body>
</html>
"#,
        title = escape_html(title),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_builds_document() {
        let page = wrap(DEFAULT_TITLE, "<h1>Hi</h1>");
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<title>Preview</title>"));
        assert!(page.contains("<article class=\"prose\">\n<h1>Hi</h1>\n</article>"));
    }

    #[test]
    fn test_wrap_escapes_title_only() {
        let page = wrap("a < b", "<em>x</em>");
        assert!(page.contains("<title>a &lt; b</title>"));
        assert!(page.contains("<em>x</em>"));
    }
}
