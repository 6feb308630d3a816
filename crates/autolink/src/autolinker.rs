//! Autolink facade composing the hashtag, URL and username/list passes.

use std::ops::Range;

use autolink_detect::{EntityDetector, RegexDetector, Spanned};

use crate::attrs::HtmlAttributes;
use crate::error::AutolinkError;
use crate::options::LinkOptions;
use crate::render::{RenderContext, TransformFn, render_hashtag, render_mention, render_url};
use crate::rewrite::{EntityKind, rewrite};

/// Configured autolinker.
///
/// Holds link options, extra HTML attributes, an optional text-transform hook
/// and the span detector. Every method takes `&self` and leaves the
/// configuration untouched, so one instance can serve many calls, including
/// from several threads at once.
///
/// # Example
///
/// ```
/// use autolink::{Autolinker, HtmlAttributes, LinkOptions};
///
/// let linker = Autolinker::new()
///     .with_options(LinkOptions::new().with_target("_blank"))
///     .with_html_attrs(HtmlAttributes::new().with("data-source", "feed"));
///
/// let html = linker.auto_link("Hi @jack").unwrap();
/// assert_eq!(
///     html,
///     r#"Hi @<a class="tweet-url username" href="http://twitter.com/jack" data-source="feed" target="_blank" rel="nofollow">jack</a>"#
/// );
/// ```
pub struct Autolinker<D = RegexDetector> {
    options: LinkOptions,
    html_attrs: HtmlAttributes,
    transform: Option<Box<TransformFn>>,
    detector: D,
}

impl Default for Autolinker {
    fn default() -> Self {
        Self::new()
    }
}

impl Autolinker {
    /// Create an autolinker with default options and the regex detector.
    #[must_use]
    pub fn new() -> Self {
        Self::with_detector(RegexDetector)
    }
}

impl<D: EntityDetector> Autolinker<D> {
    /// Create an autolinker using a custom span detector.
    #[must_use]
    pub fn with_detector(detector: D) -> Self {
        Self {
            options: LinkOptions::default(),
            html_attrs: HtmlAttributes::default(),
            transform: None,
            detector,
        }
    }

    /// Set the link options.
    #[must_use]
    pub fn with_options(mut self, options: LinkOptions) -> Self {
        self.options = options;
        self
    }

    /// Set extra HTML attributes added to every anchor.
    #[must_use]
    pub fn with_html_attrs(mut self, html_attrs: HtmlAttributes) -> Self {
        self.html_attrs = html_attrs;
        self
    }

    /// Transform hashtag text and username/list identifiers before linking.
    ///
    /// The transformed text drives both the href and the link text.
    #[must_use]
    pub fn with_transform<F>(mut self, transform: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.transform = Some(Box::new(transform));
        self
    }

    /// Current link options.
    #[must_use]
    pub fn options(&self) -> &LinkOptions {
        &self.options
    }

    /// Current extra HTML attributes.
    #[must_use]
    pub fn html_attrs(&self) -> &HtmlAttributes {
        &self.html_attrs
    }

    /// Link hashtags, then URLs, then usernames and lists.
    ///
    /// Each pass runs on the output of the previous one and never touches
    /// anchors produced earlier.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by a configured [`LinkResolver`](crate::LinkResolver).
    pub fn auto_link(&self, text: &str) -> Result<String, AutolinkError> {
        self.passes().auto_link(text)
    }

    /// Link `#hashtag`s only.
    ///
    /// # Errors
    ///
    /// Returns the error raised by the hashtag resolver, if any.
    pub fn auto_link_hashtags(&self, text: &str) -> Result<String, AutolinkError> {
        self.passes().hashtags(text)
    }

    /// Link `@username`s and `@username/list`s only.
    ///
    /// # Errors
    ///
    /// Returns the error raised by the username or list resolver, if any.
    pub fn auto_link_usernames_or_lists(&self, text: &str) -> Result<String, AutolinkError> {
        self.passes().usernames_or_lists(text)
    }

    /// Link URLs only.
    ///
    /// # Errors
    ///
    /// Returns the error raised by the link resolver, if any.
    pub fn auto_link_urls_custom(&self, text: &str) -> Result<String, AutolinkError> {
        self.passes().urls(text)
    }

    fn passes(&self) -> Passes<'_, D> {
        Passes {
            detector: &self.detector,
            options: &self.options,
            html_attrs: &self.html_attrs,
            transform: self.transform.as_deref(),
        }
    }
}

/// Borrowed configuration shared by the facade methods and free functions.
struct Passes<'a, D> {
    detector: &'a D,
    options: &'a LinkOptions,
    html_attrs: &'a HtmlAttributes,
    transform: Option<&'a TransformFn>,
}

impl<'a> Passes<'a, RegexDetector> {
    fn with_defaults(options: &'a LinkOptions, html_attrs: &'a HtmlAttributes) -> Self {
        Self {
            detector: &RegexDetector,
            options,
            html_attrs,
            transform: None,
        }
    }
}

impl<D: EntityDetector> Passes<'_, D> {
    fn auto_link(&self, text: &str) -> Result<String, AutolinkError> {
        tracing::trace!(len = text.len(), "Autolinking text");
        let text = self.hashtags(text)?;
        let text = self.urls(&text)?;
        self.usernames_or_lists(&text)
    }

    /// A `#` inside a URL (a fragment or a query value) belongs to the URL,
    /// so hashtags overlapping a detected URL are left for the URL pass.
    fn hashtags(&self, text: &str) -> Result<String, AutolinkError> {
        let urls: Vec<Range<usize>> = self.detector.urls(text).map(|m| m.range()).collect();
        let ctx = RenderContext::for_entities(self.options, self.html_attrs, self.transform);
        let hashtags = self.detector.hashtags(text).filter(|m| {
            let range = m.range();
            !urls
                .iter()
                .any(|url| url.start < range.end && range.start < url.end)
        });
        rewrite(EntityKind::Hashtag, text, hashtags, |m| {
            render_hashtag(m, &ctx)
        })
    }

    fn usernames_or_lists(&self, text: &str) -> Result<String, AutolinkError> {
        let ctx = RenderContext::for_entities(self.options, self.html_attrs, self.transform);
        rewrite(
            EntityKind::UsernameOrList,
            text,
            self.detector.usernames_or_lists(text),
            |m| render_mention(m, &ctx),
        )
    }

    fn urls(&self, text: &str) -> Result<String, AutolinkError> {
        let ctx = RenderContext::for_urls(self.options, self.html_attrs);
        rewrite(EntityKind::Url, text, self.detector.urls(text), |m| {
            render_url(m, &ctx)
        })
    }
}

/// Link hashtags, URLs, usernames and lists with the default detector.
///
/// # Errors
///
/// Returns the first error raised by a resolver in `options`.
pub fn auto_link(
    text: &str,
    options: &LinkOptions,
    html_attrs: &HtmlAttributes,
) -> Result<String, AutolinkError> {
    Passes::with_defaults(options, html_attrs).auto_link(text)
}

/// Link hashtags with the default detector.
///
/// # Errors
///
/// Returns the error raised by the hashtag resolver, if any.
pub fn auto_link_hashtags(
    text: &str,
    options: &LinkOptions,
    html_attrs: &HtmlAttributes,
) -> Result<String, AutolinkError> {
    Passes::with_defaults(options, html_attrs).hashtags(text)
}

/// Link usernames and lists with the default detector.
///
/// # Errors
///
/// Returns the error raised by the username or list resolver, if any.
pub fn auto_link_usernames_or_lists(
    text: &str,
    options: &LinkOptions,
    html_attrs: &HtmlAttributes,
) -> Result<String, AutolinkError> {
    Passes::with_defaults(options, html_attrs).usernames_or_lists(text)
}

/// Link URLs with the default detector.
///
/// # Errors
///
/// Returns the error raised by the link resolver, if any.
pub fn auto_link_urls_custom(
    text: &str,
    options: &LinkOptions,
    html_attrs: &HtmlAttributes,
) -> Result<String, AutolinkError> {
    Passes::with_defaults(options, html_attrs).urls(text)
}
