//! Link options, URL resolvers and URL entity records.

use std::fmt;
use std::sync::Arc;

use crate::error::AutolinkError;

/// Default CSS class for every autolinked anchor.
pub const DEFAULT_URL_CLASS: &str = "tweet-url";
/// Default CSS class for list links (along with the URL class).
pub const DEFAULT_LIST_CLASS: &str = "list-slug";
/// Default CSS class for username links (along with the URL class).
pub const DEFAULT_USERNAME_CLASS: &str = "username";
/// Default CSS class for hashtag links (along with the URL class).
pub const DEFAULT_HASHTAG_CLASS: &str = "hashtag";
/// Default base URL for username links.
pub const DEFAULT_USERNAME_URL_BASE: &str = "http://twitter.com/";
/// Default base URL for list links.
pub const DEFAULT_LIST_URL_BASE: &str = "http://twitter.com/";
/// Default base URL for hashtag links.
pub const DEFAULT_HASHTAG_URL_BASE: &str = "http://twitter.com/search?q=%23";

/// Strategy turning an entity identifier into a link target.
///
/// Implemented for any `Fn(&str) -> Result<String, AutolinkError>`. An error
/// aborts the whole autolink call and reaches the caller unchanged.
///
/// # Example
///
/// ```
/// use autolink::{AutolinkError, LinkOptions};
///
/// let options = LinkOptions::new().with_hashtag_url_resolver(|tag: &str| {
///     Ok::<_, AutolinkError>(format!("/tags/{tag}"))
/// });
/// ```
pub trait LinkResolver: Send + Sync {
    /// Resolve an identifier (hashtag text, username, list or raw URL) to an href.
    fn resolve(&self, identifier: &str) -> Result<String, AutolinkError>;
}

impl<F> LinkResolver for F
where
    F: Fn(&str) -> Result<String, AutolinkError> + Send + Sync,
{
    fn resolve(&self, identifier: &str) -> Result<String, AutolinkError> {
        self(identifier)
    }
}

/// Caller-supplied metadata for a URL that appears in the text.
///
/// The href still targets the raw URL; only the visible text changes.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UrlEntity {
    /// Raw URL exactly as it appears in the text.
    pub url: String,
    /// Text shown in place of the raw URL.
    pub display_url: String,
    /// Fully expanded URL, rendered as the anchor title when present.
    #[cfg_attr(feature = "serde", serde(default))]
    pub expanded_url: Option<String>,
}

impl UrlEntity {
    /// Create a record overriding the display text of `url`.
    #[must_use]
    pub fn new(url: impl Into<String>, display_url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            display_url: display_url.into(),
            expanded_url: None,
        }
    }

    /// Set the expanded URL.
    #[must_use]
    pub fn with_expanded_url(mut self, expanded_url: impl Into<String>) -> Self {
        self.expanded_url = Some(expanded_url.into());
        self
    }
}

/// Options controlling how entities are linked.
///
/// Unset fields fall back to the `DEFAULT_*` constants when a pass runs. The
/// options are never modified by autolinking.
#[derive(Clone, Default)]
pub struct LinkOptions {
    /// CSS class on every anchor.
    pub url_class: Option<String>,
    /// CSS class added to list links.
    pub list_class: Option<String>,
    /// CSS class added to username links.
    pub username_class: Option<String>,
    /// CSS class added to hashtag links.
    pub hashtag_class: Option<String>,
    /// Base URL prepended to usernames.
    pub username_url_base: Option<String>,
    /// Base URL prepended to `user/list` identifiers.
    pub list_url_base: Option<String>,
    /// Base URL prepended to hashtag text.
    pub hashtag_url_base: Option<String>,
    /// Window name emitted as the `target` attribute.
    pub target: Option<String>,
    /// Link `@user/list` references as plain usernames.
    pub suppress_lists: bool,
    /// Omit `rel="nofollow"`.
    pub suppress_no_follow: bool,
    /// Overrides href construction for usernames.
    pub username_url_resolver: Option<Arc<dyn LinkResolver>>,
    /// Overrides href construction for lists.
    pub list_url_resolver: Option<Arc<dyn LinkResolver>>,
    /// Overrides href construction for hashtags.
    pub hashtag_url_resolver: Option<Arc<dyn LinkResolver>>,
    /// Overrides href construction for URLs.
    pub link_url_resolver: Option<Arc<dyn LinkResolver>>,
    /// Display overrides for URLs.
    pub url_entities: Vec<UrlEntity>,
}

impl fmt::Debug for LinkOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkOptions")
            .field("url_class", &self.url_class)
            .field("list_class", &self.list_class)
            .field("username_class", &self.username_class)
            .field("hashtag_class", &self.hashtag_class)
            .field("username_url_base", &self.username_url_base)
            .field("list_url_base", &self.list_url_base)
            .field("hashtag_url_base", &self.hashtag_url_base)
            .field("target", &self.target)
            .field("suppress_lists", &self.suppress_lists)
            .field("suppress_no_follow", &self.suppress_no_follow)
            .field("username_url_resolver", &self.username_url_resolver.is_some())
            .field("list_url_resolver", &self.list_url_resolver.is_some())
            .field("hashtag_url_resolver", &self.hashtag_url_resolver.is_some())
            .field("link_url_resolver", &self.link_url_resolver.is_some())
            .field("url_entities", &self.url_entities)
            .finish()
    }
}

impl LinkOptions {
    /// Create options with every field unset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the CSS class used on every anchor.
    #[must_use]
    pub fn with_url_class(mut self, class: impl Into<String>) -> Self {
        self.url_class = Some(class.into());
        self
    }

    /// Set the CSS class for list links.
    #[must_use]
    pub fn with_list_class(mut self, class: impl Into<String>) -> Self {
        self.list_class = Some(class.into());
        self
    }

    /// Set the CSS class for username links.
    #[must_use]
    pub fn with_username_class(mut self, class: impl Into<String>) -> Self {
        self.username_class = Some(class.into());
        self
    }

    /// Set the CSS class for hashtag links.
    #[must_use]
    pub fn with_hashtag_class(mut self, class: impl Into<String>) -> Self {
        self.hashtag_class = Some(class.into());
        self
    }

    /// Set the base URL for username links.
    #[must_use]
    pub fn with_username_url_base(mut self, base: impl Into<String>) -> Self {
        self.username_url_base = Some(base.into());
        self
    }

    /// Set the base URL for list links.
    #[must_use]
    pub fn with_list_url_base(mut self, base: impl Into<String>) -> Self {
        self.list_url_base = Some(base.into());
        self
    }

    /// Set the base URL for hashtag links.
    #[must_use]
    pub fn with_hashtag_url_base(mut self, base: impl Into<String>) -> Self {
        self.hashtag_url_base = Some(base.into());
        self
    }

    /// Set the `target` window name.
    #[must_use]
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// Link list references as plain usernames.
    #[must_use]
    pub fn with_suppress_lists(mut self, suppress: bool) -> Self {
        self.suppress_lists = suppress;
        self
    }

    /// Omit `rel="nofollow"` from every anchor.
    #[must_use]
    pub fn with_suppress_no_follow(mut self, suppress: bool) -> Self {
        self.suppress_no_follow = suppress;
        self
    }

    /// Resolve username hrefs with a custom strategy.
    #[must_use]
    pub fn with_username_url_resolver(mut self, resolver: impl LinkResolver + 'static) -> Self {
        self.username_url_resolver = Some(Arc::new(resolver));
        self
    }

    /// Resolve list hrefs with a custom strategy.
    #[must_use]
    pub fn with_list_url_resolver(mut self, resolver: impl LinkResolver + 'static) -> Self {
        self.list_url_resolver = Some(Arc::new(resolver));
        self
    }

    /// Resolve hashtag hrefs with a custom strategy.
    #[must_use]
    pub fn with_hashtag_url_resolver(mut self, resolver: impl LinkResolver + 'static) -> Self {
        self.hashtag_url_resolver = Some(Arc::new(resolver));
        self
    }

    /// Resolve URL hrefs with a custom strategy.
    #[must_use]
    pub fn with_link_url_resolver(mut self, resolver: impl LinkResolver + 'static) -> Self {
        self.link_url_resolver = Some(Arc::new(resolver));
        self
    }

    /// Add a display override for a URL.
    #[must_use]
    pub fn with_url_entity(mut self, entity: UrlEntity) -> Self {
        self.url_entities.push(entity);
        self
    }

    /// Normalize for a single pass, filling unset fields with defaults.
    pub(crate) fn for_pass(&self) -> PassOptions<'_> {
        PassOptions {
            url_class: self.url_class.as_deref().unwrap_or(DEFAULT_URL_CLASS),
            list_class: self.list_class.as_deref().unwrap_or(DEFAULT_LIST_CLASS),
            username_class: self
                .username_class
                .as_deref()
                .unwrap_or(DEFAULT_USERNAME_CLASS),
            hashtag_class: self
                .hashtag_class
                .as_deref()
                .unwrap_or(DEFAULT_HASHTAG_CLASS),
            username_url: Href::new(
                self.username_url_resolver.as_deref(),
                self.username_url_base
                    .as_deref()
                    .unwrap_or(DEFAULT_USERNAME_URL_BASE),
            ),
            list_url: Href::new(
                self.list_url_resolver.as_deref(),
                self.list_url_base.as_deref().unwrap_or(DEFAULT_LIST_URL_BASE),
            ),
            hashtag_url: Href::new(
                self.hashtag_url_resolver.as_deref(),
                self.hashtag_url_base
                    .as_deref()
                    .unwrap_or(DEFAULT_HASHTAG_URL_BASE),
            ),
            link_url: Href::new(self.link_url_resolver.as_deref(), ""),
            suppress_lists: self.suppress_lists,
            url_entities: &self.url_entities,
        }
    }
}

/// Options with defaults applied, borrowed for the duration of one pass.
pub(crate) struct PassOptions<'a> {
    pub url_class: &'a str,
    pub list_class: &'a str,
    pub username_class: &'a str,
    pub hashtag_class: &'a str,
    pub username_url: Href<'a>,
    pub list_url: Href<'a>,
    pub hashtag_url: Href<'a>,
    pub link_url: Href<'a>,
    pub suppress_lists: bool,
    pub url_entities: &'a [UrlEntity],
}

impl PassOptions<'_> {
    /// Display override registered for `url`, matched exactly.
    pub fn url_entity(&self, url: &str) -> Option<&UrlEntity> {
        self.url_entities.iter().find(|e| e.url == url)
    }
}

/// Href strategy for one entity kind: a caller resolver or base-URL concatenation.
#[derive(Clone, Copy)]
pub(crate) enum Href<'a> {
    Resolver(&'a dyn LinkResolver),
    Base(&'a str),
}

impl<'a> Href<'a> {
    fn new(resolver: Option<&'a dyn LinkResolver>, base: &'a str) -> Self {
        resolver.map_or(Self::Base(base), Self::Resolver)
    }

    /// Unescaped href for `identifier`.
    pub fn resolve(self, identifier: &str) -> Result<String, AutolinkError> {
        match self {
            Self::Resolver(resolver) => resolver.resolve(identifier),
            Self::Base(base) => Ok(format!("{base}{identifier}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static_assertions::assert_impl_all!(LinkOptions: Send, Sync, Clone);

    #[test]
    fn test_defaults_applied() {
        let options = LinkOptions::new();
        let pass = options.for_pass();
        assert_eq!(pass.url_class, "tweet-url");
        assert_eq!(pass.list_class, "list-slug");
        assert_eq!(pass.username_class, "username");
        assert_eq!(pass.hashtag_class, "hashtag");
        assert!(!pass.suppress_lists);
        assert_eq!(
            pass.hashtag_url.resolve("ruby").unwrap(),
            "http://twitter.com/search?q=%23ruby"
        );
        assert_eq!(
            pass.username_url.resolve("jack").unwrap(),
            "http://twitter.com/jack"
        );
        assert_eq!(pass.link_url.resolve("http://x.com").unwrap(), "http://x.com");
    }

    #[test]
    fn test_caller_values_win() {
        let options = LinkOptions::new()
            .with_url_class("link")
            .with_hashtag_class("tag")
            .with_hashtag_url_base("https://example.com/tags/");
        let pass = options.for_pass();
        assert_eq!(pass.url_class, "link");
        assert_eq!(pass.hashtag_class, "tag");
        assert_eq!(
            pass.hashtag_url.resolve("rust").unwrap(),
            "https://example.com/tags/rust"
        );
    }

    #[test]
    fn test_normalization_does_not_mutate() {
        let options = LinkOptions::new();
        let _ = options.for_pass();
        assert!(options.url_class.is_none());
        assert!(options.hashtag_url_base.is_none());
    }

    #[test]
    fn test_resolver_overrides_base() {
        let options = LinkOptions::new()
            .with_username_url_base("http://ignored/")
            .with_username_url_resolver(|name: &str| Ok::<_, AutolinkError>(format!("/u/{name}")));
        let pass = options.for_pass();
        assert_eq!(pass.username_url.resolve("jack").unwrap(), "/u/jack");
    }

    #[test]
    fn test_url_entity_lookup_exact() {
        let options = LinkOptions::new()
            .with_url_entity(UrlEntity::new("http://t.co/abc", "example.com/abc"));
        let pass = options.for_pass();
        assert_eq!(
            pass.url_entity("http://t.co/abc").map(|e| e.display_url.as_str()),
            Some("example.com/abc")
        );
        assert!(pass.url_entity("http://t.co/ab").is_none());
    }

    #[test]
    fn test_debug_hides_resolvers() {
        let options =
            LinkOptions::new().with_link_url_resolver(|url: &str| Ok::<_, AutolinkError>(url.to_owned()));
        let debug = format!("{options:?}");
        assert!(debug.contains("link_url_resolver: true"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_url_entity_from_json() {
        let json = r#"[{"url": "http://t.co/x", "display_url": "example.com/x", "expanded_url": "http://example.com/x"},
                       {"url": "http://t.co/y", "display_url": "y.com"}]"#;
        let entities: Vec<UrlEntity> = serde_json::from_str(json).unwrap();
        assert_eq!(
            entities[0],
            UrlEntity::new("http://t.co/x", "example.com/x").with_expanded_url("http://example.com/x")
        );
        assert_eq!(entities[1].expanded_url, None);
    }
}
