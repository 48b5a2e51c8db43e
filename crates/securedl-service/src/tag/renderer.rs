//! Wraps a link in an `<a>` element.

/// Renders anchor tags for generated links.
#[derive(Debug, Clone, Copy, Default)]
pub struct TagRenderer;

impl TagRenderer {
    /// Creates a new renderer.
    pub fn new() -> Self {
        Self
    }

    /// Renders `<a href="url" ...attributes>content</a>`.
    ///
    /// Attributes keep their order; an `href` among them is dropped in favour
    /// of `url`. Values are escaped, `content` is inserted as rendered markup.
    /// The closing tag is always emitted.
    pub fn render(
        &self,
        url: &str,
        attributes: &[(String, String)],
        content: Option<&str>,
    ) -> String {
        let mut tag = format!("<a href=\"{}\"", html_escape(url));
        for (name, value) in attributes {
            if name.eq_ignore_ascii_case("href") {
                continue;
            }
            tag.push_str(&format!(" {}=\"{}\"", name, html_escape(value)));
        }
        tag.push('>');
        tag.push_str(content.unwrap_or_default());
        tag.push_str("</a>");
        tag
    }
}

/// Escape HTML attribute special characters
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}
