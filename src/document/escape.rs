//! Entity escaping for literal regions.

/// Replace the five reserved HTML characters with their entity forms.
///
/// Each character is mapped independently in a single pass, so the output of
/// one replacement is never escaped again.
///
/// # Example
///
/// ```
/// use livemark::document::escape_html;
///
/// assert_eq!(escape_html("<a href='x'>"), "&lt;a href=&#039;x&#039;&gt;");
/// ```
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(ch),
        }
    }
    out
}
