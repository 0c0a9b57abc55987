//! HTML escaping for untrusted text.
//!
//! Escapes text before it is embedded in markup output, mirroring the
//! default conversion table of PHP's `htmlspecialchars`.

/// Escapes text for safe embedding in HTML.
pub struct HtmlEscaper;

impl HtmlEscaper {
    /// Escapes the HTML-significant characters in `text`.
    ///
    /// `&`, `<`, `>`, `"` and `'` become their entities; all other
    /// characters pass through unchanged.
    pub fn escape(text: &str) -> String {
        let mut escaped = String::with_capacity(text.len());
        for c in text.chars() {
            match c {
                '&' => escaped.push_str("&amp;"),
                '<' => escaped.push_str("&lt;"),
                '>' => escaped.push_str("&gt;"),
                '"' => escaped.push_str("&quot;"),
                '\'' => escaped.push_str("&#039;"),
                _ => escaped.push(c),
            }
        }
        escaped
    }
}
