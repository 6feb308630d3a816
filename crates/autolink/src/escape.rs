//! HTML escaping for text content and attribute values.

/// Escape the five reserved HTML characters.
///
/// Each character is replaced independently in a single pass, so existing
/// entities are escaped again (`&amp;` becomes `&amp;amp;`).
///
/// # Examples
///
/// ```
/// use autolink::escape_html;
///
/// assert_eq!(escape_html(r#"<a href="x">'&'</a>"#), "&lt;a href=&quot;x&quot;&gt;&#39;&amp;&#39;&lt;/a&gt;");
/// assert_eq!(escape_html("plain"), "plain");
/// ```
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
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

/// Escape an optional value. Absence stays absent.
#[must_use]
pub fn escape_html_opt(value: Option<&str>) -> Option<String> {
    value.map(escape_html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_each_reserved_char() {
        assert_eq!(escape_html("&"), "&amp;");
        assert_eq!(escape_html("<"), "&lt;");
        assert_eq!(escape_html(">"), "&gt;");
        assert_eq!(escape_html("\""), "&quot;");
        assert_eq!(escape_html("'"), "&#39;");
    }

    #[test]
    fn test_escape_plain_text_unchanged() {
        for text in ["", "hello world", "日本語のテキスト", "#tag @user http://x.com/a?b=c"] {
            assert_eq!(escape_html(text), text);
        }
    }

    #[test]
    fn test_escape_is_not_idempotent() {
        assert_eq!(escape_html("&amp;"), "&amp;amp;");
    }

    #[test]
    fn test_escape_mixed() {
        assert_eq!(
            escape_html("<script>alert('x')</script>"),
            "&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"
        );
    }

    #[test]
    fn test_escape_opt() {
        assert_eq!(escape_html_opt(None), None);
        assert_eq!(escape_html_opt(Some("a&b")), Some("a&amp;b".to_owned()));
    }
}
