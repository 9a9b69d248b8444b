//! HTML entity escaping.

/// Escape text for embedding in HTML content or attribute values.
///
/// Replaces `&`, `<`, `>`, `"` and `'`. Ampersands are handled first, so the
/// entities produced for the other characters are never escaped twice.
///
/// # Examples
///
/// ```
/// use modelcard_export::markup::escape_html;
///
/// assert_eq!(escape_html("<b>\"A&B\"</b>"), "&lt;b&gt;&quot;A&amp;B&quot;&lt;/b&gt;");
/// ```
pub fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len() + text.len() / 8);
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_all_five() {
        assert_eq!(escape_html(r#"&<>"'"#), "&amp;&lt;&gt;&quot;&#39;");
    }

    #[test]
    fn test_existing_entities_are_escaped_once() {
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
    }

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(escape_html("plain text, 100%"), "plain text, 100%");
        assert_eq!(escape_html(""), "");
    }

    #[test]
    fn test_script_is_inert() {
        let escaped = escape_html("<script>alert(1)</script>");
        assert!(!escaped.contains('<'));
        assert!(escaped.contains("alert(1)"));
    }
}
