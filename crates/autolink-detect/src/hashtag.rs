//! Hashtag detection: `#tag` and full-width `＃tag`.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

use crate::Spanned;

// A tag needs at least one letter, so `#123` is not a hashtag. The leading
// group consumes the preceding character because `regex` has no lookbehind;
// `/`, `?` and `=` keep URL fragments and query values out.
static HASHTAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?:^|[^&/?=\p{L}\p{M}\p{Nd}_])([#＃])([\p{L}\p{M}\p{Nd}_]*[\p{L}\p{M}][\p{L}\p{M}\p{Nd}_]*)",
    )
    .unwrap()
});

/// A detected hashtag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HashtagMatch<'t> {
    /// Byte range covering the marker and the tag.
    pub range: Range<usize>,
    /// Leading marker, `#` or `＃`.
    pub marker: &'t str,
    /// Tag text without the marker.
    pub tag: &'t str,
}

impl Spanned for HashtagMatch<'_> {
    fn range(&self) -> Range<usize> {
        self.range.clone()
    }
}

pub(crate) fn find_all(text: &str) -> impl Iterator<Item = HashtagMatch<'_>> {
    HASHTAG_RE.captures_iter(text).filter_map(move |caps| {
        let marker = caps.get(1)?;
        let tag = caps.get(2)?;
        if is_invalid_ending(&text[tag.end()..]) {
            return None;
        }
        Some(HashtagMatch {
            range: marker.start()..tag.end(),
            marker: marker.as_str(),
            tag: tag.as_str(),
        })
    })
}

/// A tag running straight into another marker or a scheme separator is not a tag.
fn is_invalid_ending(after: &str) -> bool {
    after.starts_with('#') || after.starts_with('＃') || after.starts_with("://")
}
