//! Username and list detection: `@user` and `@user/list-slug`.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

use crate::Spanned;

static MENTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?:^|[^a-zA-Z0-9_!#$%&*@＠])([@＠])([a-zA-Z0-9_]{1,20})(/[a-zA-Z][a-zA-Z0-9_\-]{0,24})?",
    )
    .unwrap()
});

/// A detected `@username` or `@username/list` reference.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MentionMatch<'t> {
    /// Byte range covering the at sign, username and optional list slug.
    pub range: Range<usize>,
    /// Leading at sign, `@` or `＠`.
    pub at: &'t str,
    /// Username without the at sign.
    pub username: &'t str,
    /// List slug including its leading `/`, if present.
    pub list_slug: Option<&'t str>,
}

impl MentionMatch<'_> {
    /// Username followed by the list slug, e.g. `jack/favorites`.
    #[must_use]
    pub fn identifier(&self) -> String {
        match self.list_slug {
            Some(slug) => format!("{}{slug}", self.username),
            None => self.username.to_owned(),
        }
    }
}

impl Spanned for MentionMatch<'_> {
    fn range(&self) -> Range<usize> {
        self.range.clone()
    }
}

pub(crate) fn find_all(text: &str) -> impl Iterator<Item = MentionMatch<'_>> {
    MENTION_RE.captures_iter(text).filter_map(move |caps| {
        let at = caps.get(1)?;
        let username = caps.get(2)?;
        let list_slug = caps.get(3);
        let end = list_slug.map_or(username.end(), |m| m.end());
        if is_invalid_ending(&text[end..]) {
            return None;
        }
        Some(MentionMatch {
            range: at.start()..end,
            at: at.as_str(),
            username: username.as_str(),
            list_slug: list_slug.map(|m| m.as_str()),
        })
    })
}

/// Mentions running into another at sign, an accented Latin letter or a
/// scheme separator are part of something else (an email address, a URL).
fn is_invalid_ending(after: &str) -> bool {
    if after.starts_with("://") {
        return true;
    }
    after
        .chars()
        .next()
        .is_some_and(|c| c == '@' || c == '＠' || is_latin_accent(c))
}

fn is_latin_accent(c: char) -> bool {
    matches!(c, '\u{00c0}'..='\u{00d6}' | '\u{00d8}'..='\u{00f6}' | '\u{00f8}'..='\u{00ff}')
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn identifiers(text: &str) -> Vec<String> {
        find_all(text).map(|m| m.identifier()).collect()
    }

    #[test]
    fn test_simple_username() {
        let text = "hello @jack!";
        let found: Vec<_> = find_all(text).collect();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].at, "@");
        assert_eq!(found[0].username, "jack");
        assert_eq!(found[0].list_slug, None);
        assert_eq!(&text[found[0].range.clone()], "@jack");
    }

    #[test]
    fn test_username_with_possessive() {
        assert_eq!(identifiers("@jack's tweet"), vec!["jack"]);
    }

    #[test]
    fn test_list_reference() {
        let text = "see @jack/Favorites now";
        let found: Vec<_> = find_all(text).collect();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].username, "jack");
        assert_eq!(found[0].list_slug, Some("/Favorites"));
        assert_eq!(found[0].identifier(), "jack/Favorites");
        assert_eq!(&text[found[0].range.clone()], "@jack/Favorites");
    }

    #[test]
    fn test_slash_without_letter_is_not_list() {
        let found: Vec<_> = find_all("@jack/123").collect();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].list_slug, None);
    }

    #[test]
    fn test_fullwidth_at_sign() {
        let found: Vec<_> = find_all("＠jack").collect();
        assert_eq!(found[0].at, "＠");
        assert_eq!(found[0].username, "jack");
    }

    #[test]
    fn test_email_is_not_mention() {
        assert!(identifiers("mail me at jack@example.com").is_empty());
    }

    #[test]
    fn test_double_at_is_not_mention() {
        assert!(identifiers("@@jack").is_empty());
    }

    #[test]
    fn test_followed_by_at_is_not_mention() {
        assert!(identifiers("@jack@host").is_empty());
    }

    #[test]
    fn test_followed_by_accent_is_not_mention() {
        assert!(identifiers("@jacké").is_empty());
    }

    #[test]
    fn test_multiple_mentions() {
        assert_eq!(
            identifiers("@alice, @bob and @carol/team"),
            vec!["alice", "bob", "carol/team"]
        );
    }
}
