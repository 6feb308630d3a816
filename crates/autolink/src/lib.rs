//! Autolinking for short-message text.
//!
//! Converts hashtags, `@username`s, `@username/list` references and URLs into
//! HTML anchors. All text taken from the input or the configuration is
//! escaped before it reaches the markup.
//!
//! # Architecture
//!
//! Autolinking runs three passes in a fixed order:
//!
//! 1. **Hashtags** ([`auto_link_hashtags`])
//! 2. **URLs** ([`auto_link_urls_custom`])
//! 3. **Usernames and lists** ([`auto_link_usernames_or_lists`])
//!
//! Each pass asks an [`EntityDetector`] for matches, drops the ones that fall
//! inside anchors already present in the text, renders the rest and splices
//! them back in. Anchor attributes are rendered once per pass from the caller's
//! [`HtmlAttributes`] plus `target` and `rel="nofollow"`.
//!
//! Span detection lives in the `autolink-detect` crate. [`Autolinker`] accepts
//! any [`EntityDetector`]; the free functions use [`RegexDetector`].
//!
//! # Example
//!
//! ```
//! use autolink::{HtmlAttributes, LinkOptions, auto_link};
//!
//! let html = auto_link(
//!     "Check #ruby and @jack's http://example.com",
//!     &LinkOptions::new(),
//!     &HtmlAttributes::new(),
//! )
//! .unwrap();
//!
//! assert!(html.contains(r#"<a href="http://twitter.com/search?q=%23ruby""#));
//! assert!(html.contains(r#"href="http://twitter.com/jack""#));
//! assert!(html.contains(r#"<a href="http://example.com" rel="nofollow">"#));
//! ```

mod attrs;
mod autolinker;
mod error;
mod escape;
mod markup;
mod options;
mod render;
mod rewrite;

pub use attrs::{
    AttrValue, BOOLEAN_ATTRIBUTES, HtmlAttributes, OPTIONS_NOT_ATTRIBUTES, html_attrs_for_options,
    render_html_attrs,
};
pub use autolink_detect::{
    EntityDetector, HashtagMatch, MentionMatch, RegexDetector, Spanned, UrlMatch,
};
pub use autolinker::{
    Autolinker, auto_link, auto_link_hashtags, auto_link_urls_custom, auto_link_usernames_or_lists,
};
pub use error::{AutolinkError, BoxError};
pub use escape::{escape_html, escape_html_opt};
pub use options::{
    DEFAULT_HASHTAG_CLASS, DEFAULT_HASHTAG_URL_BASE, DEFAULT_LIST_CLASS, DEFAULT_LIST_URL_BASE,
    DEFAULT_URL_CLASS, DEFAULT_USERNAME_CLASS, DEFAULT_USERNAME_URL_BASE, LinkOptions,
    LinkResolver, UrlEntity,
};
pub use render::TransformFn;
