//! Entity span detection for short-message text.
//!
//! This crate locates hashtags, `@username` mentions, `@username/list`
//! references and URLs in raw text. Detection and rewriting are kept apart:
//!
//! 1. **Detection** ([`EntityDetector`]): lazily yields ordered,
//!    non-overlapping matches for one entity kind.
//! 2. **Substitution** ([`substitute`]): splices a replacement string for each
//!    match back into the text, leaving everything else untouched.
//!
//! The default [`RegexDetector`] is deliberately pragmatic. It is not a full
//! URL grammar nor a complete Unicode tokenizer; callers with stricter needs
//! implement [`EntityDetector`] themselves.
//!
//! # Example
//!
//! ```
//! use autolink_detect::{EntityDetector, RegexDetector, substitute};
//!
//! let text = "Loving #rust today";
//! let detector = RegexDetector;
//! let output = substitute(text, detector.hashtags(text), |m| {
//!     Ok::<_, std::convert::Infallible>(format!("[{}]", m.tag))
//! })
//! .unwrap();
//! assert_eq!(output, "Loving [rust] today");
//! ```

mod hashtag;
mod mention;
mod substitute;
mod url;

use std::ops::Range;

pub use hashtag::HashtagMatch;
pub use mention::MentionMatch;
pub use substitute::substitute;
pub use url::UrlMatch;

/// A detected entity occupying a byte range of the scanned text.
pub trait Spanned {
    /// Byte range replaced when the entity is substituted.
    fn range(&self) -> Range<usize>;
}

/// Span-detection collaborator, one operation per entity kind.
///
/// Every method returns a lazy iterator over matches ordered by position.
/// Matches from a single call never overlap.
pub trait EntityDetector {
    /// Find `#hashtag` occurrences.
    fn hashtags<'t>(&self, text: &'t str) -> impl Iterator<Item = HashtagMatch<'t>>;

    /// Find `@username` and `@username/list` occurrences.
    fn usernames_or_lists<'t>(&self, text: &'t str) -> impl Iterator<Item = MentionMatch<'t>>;

    /// Find URLs that carry an explicit protocol.
    fn urls<'t>(&self, text: &'t str) -> impl Iterator<Item = UrlMatch<'t>>;
}

/// Regex-backed [`EntityDetector`].
///
/// Patterns are compiled once per process and shared.
#[derive(Clone, Copy, Debug, Default)]
pub struct RegexDetector;

impl EntityDetector for RegexDetector {
    fn hashtags<'t>(&self, text: &'t str) -> impl Iterator<Item = HashtagMatch<'t>> {
        hashtag::find_all(text)
    }

    fn usernames_or_lists<'t>(&self, text: &'t str) -> impl Iterator<Item = MentionMatch<'t>> {
        mention::find_all(text)
    }

    fn urls<'t>(&self, text: &'t str) -> impl Iterator<Item = UrlMatch<'t>> {
        url::find_all(text)
    }
}
