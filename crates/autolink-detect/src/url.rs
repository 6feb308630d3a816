//! URL detection for `http://` and `https://` links.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

use crate::Spanned;

// Host requires at least one dot. The tail is anything up to whitespace, angle
// brackets or a double quote; trailing punctuation is trimmed afterwards.
static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?:^|[^-/"':!=A-Za-z0-9_@＠$#＃.])((?i:https?)://[\p{L}\p{N}][\p{L}\p{N}\-]*(?:\.[\p{L}\p{N}\-]+)+(?::\d{1,5})?(?:[/?#][^\s<>"]*)?)"#,
    )
    .unwrap()
});

/// A detected URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UrlMatch<'t> {
    /// Byte range covering the URL.
    pub range: Range<usize>,
    /// Raw URL text as it appears in the input.
    pub url: &'t str,
    /// Scheme without the `://` separator, e.g. `https`.
    pub protocol: &'t str,
}

impl Spanned for UrlMatch<'_> {
    fn range(&self) -> Range<usize> {
        self.range.clone()
    }
}

pub(crate) fn find_all(text: &str) -> impl Iterator<Item = UrlMatch<'_>> {
    URL_RE.captures_iter(text).filter_map(|caps| {
        let candidate = caps.get(1)?;
        let url = trim_trailing_punctuation(candidate.as_str());
        let (protocol, _) = url.split_once("://")?;
        Some(UrlMatch {
            range: candidate.start()..candidate.start() + url.len(),
            url,
            protocol,
        })
    })
}

/// Strip sentence punctuation that follows a URL rather than belonging to it.
///
/// A closing parenthesis or bracket is kept when it balances an opening one
/// inside the URL, as in Wikipedia-style links.
fn trim_trailing_punctuation(url: &str) -> &str {
    let mut end = url.len();
    while let Some(c) = url[..end].chars().next_back() {
        let strip = match c {
            '.' | ',' | ';' | ':' | '!' | '?' | '\'' => true,
            ')' => is_unbalanced(&url[..end], '(', ')'),
            ']' => is_unbalanced(&url[..end], '[', ']'),
            _ => false,
        };
        if !strip {
            break;
        }
        end -= c.len_utf8();
    }
    &url[..end]
}

fn is_unbalanced(s: &str, open: char, close: char) -> bool {
    s.matches(close).count() > s.matches(open).count()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn urls(text: &str) -> Vec<&str> {
        find_all(text).map(|m| m.url).collect()
    }

    #[test]
    fn test_simple_url() {
        let text = "visit http://example.com now";
        let found: Vec<_> = find_all(text).collect();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].url, "http://example.com");
        assert_eq!(found[0].protocol, "http");
        assert_eq!(&text[found[0].range.clone()], "http://example.com");
    }

    #[test]
    fn test_https_with_path_and_query() {
        assert_eq!(
            urls("go https://example.com/a/b?x=1&y=2 ok"),
            vec!["https://example.com/a/b?x=1&y=2"]
        );
    }

    #[test]
    fn test_trailing_period_trimmed() {
        assert_eq!(urls("See http://example.com."), vec!["http://example.com"]);
        assert_eq!(
            urls("See http://example.com/page."),
            vec!["http://example.com/page"]
        );
    }

    #[test]
    fn test_parenthesized_url() {
        assert_eq!(
            urls("(see http://example.com/page)"),
            vec!["http://example.com/page"]
        );
    }

    #[test]
    fn test_balanced_parens_kept() {
        assert_eq!(
            urls("http://en.wikipedia.org/wiki/Rust_(language)"),
            vec!["http://en.wikipedia.org/wiki/Rust_(language)"]
        );
    }

    #[test]
    fn test_port() {
        assert_eq!(
            urls("http://localhost.test:8080/x"),
            vec!["http://localhost.test:8080/x"]
        );
    }

    #[test]
    fn test_without_protocol_not_matched() {
        assert!(urls("www.example.com").is_empty());
    }

    #[test]
    fn test_url_inside_attribute_not_matched() {
        assert!(urls(r#"<a href="http://example.com">x</a>"#).is_empty());
    }

    #[test]
    fn test_host_without_dot_not_matched() {
        assert!(urls("http://intranet/").is_empty());
    }

    #[test]
    fn test_multiple_urls() {
        assert_eq!(
            urls("http://a.com, https://b.org"),
            vec!["http://a.com", "https://b.org"]
        );
    }

    #[test]
    fn test_uppercase_scheme() {
        let found: Vec<_> = find_all("HTTP://EXAMPLE.COM").collect();
        assert_eq!(found[0].protocol, "HTTP");
    }
}
