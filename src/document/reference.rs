//! Image and link references.

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Image shown by the browser when the referenced image fails to load.
pub const FALLBACK_IMAGE: &str = "/image-placeholder.jpg";

static IMAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"!\[([^\]]*)\]\(([^)]+?)(?:\s+"([^"]+)")?\)"#).expect("valid image pattern")
});

static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("valid link pattern"));

/// Turn `![alt](src "title")` into `<img>` with a load-failure fallback.
///
/// The `onerror` handler clears itself before swapping in [`FALLBACK_IMAGE`],
/// so a missing placeholder cannot retrigger it.
pub fn parse_images(text: &str) -> String {
    IMAGE
        .replace_all(text, |caps: &Captures<'_>| {
            let title = caps
                .get(3)
                .map(|title| format!(" title=\"{}\"", title.as_str()))
                .unwrap_or_default();
            format!(
                "<img src=\"{src}\" alt=\"{alt}\"{title} onerror=\"this.onerror=null;this.src='{FALLBACK_IMAGE}';\">",
                src = &caps[2],
                alt = &caps[1],
            )
        })
        .into_owned()
}

/// Turn `[text](url)` into an anchor that opens in a new tab without a referrer.
pub fn parse_links(text: &str) -> String {
    LINK.replace_all(
        text,
        r#"<a href="$2" target="_blank" rel="noopener noreferrer">$1</a>"#,
    )
    .into_owned()
}
