//! HTML attribute sets and their serialization.

use std::borrow::Cow;
use std::fmt::Write;

use crate::escape::escape_html;

/// Attributes rendered as bare flags: present when truthy, omitted otherwise.
pub const BOOLEAN_ATTRIBUTES: &[&str] = &["disabled", "readonly", "multiple", "checked"];

/// Option keys that configure link behaviour and never serialize to markup.
pub const OPTIONS_NOT_ATTRIBUTES: &[&str] = &[
    "url_class",
    "list_class",
    "username_class",
    "hashtag_class",
    "username_url_base",
    "list_url_base",
    "hashtag_url_base",
    "username_url_block",
    "list_url_block",
    "hashtag_url_block",
    "link_url_block",
    "suppress_lists",
    "suppress_no_follow",
    "url_entities",
];

/// Value of a single HTML attribute.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AttrValue {
    /// Plain text value.
    Text(String),
    /// Boolean value. Non-boolean attributes render it as `true`/`false`.
    Bool(bool),
    /// Space-separated list, e.g. several classes.
    List(Vec<String>),
    /// No value; the attribute is skipped.
    Absent,
}

impl AttrValue {
    fn is_truthy(&self) -> bool {
        !matches!(self, Self::Bool(false) | Self::Absent)
    }

    fn as_text(&self) -> Option<Cow<'_, str>> {
        match self {
            Self::Text(s) => Some(Cow::Borrowed(s)),
            Self::Bool(b) => Some(Cow::Borrowed(if *b { "true" } else { "false" })),
            Self::List(items) => Some(Cow::Owned(items.join(" "))),
            Self::Absent => None,
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<Vec<String>> for AttrValue {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

impl<T: Into<AttrValue>> From<Option<T>> for AttrValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}

/// Insertion-ordered mapping of attribute name to value.
///
/// Re-inserting an existing name replaces its value and keeps its position.
///
/// # Example
///
/// ```
/// use autolink::{HtmlAttributes, html_attrs_for_options};
///
/// let attrs = HtmlAttributes::new()
///     .with("disabled", false)
///     .with("target", "_blank");
/// assert_eq!(html_attrs_for_options(&attrs), r#" target="_blank""#);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HtmlAttributes {
    entries: Vec<(String, AttrValue)>,
}

impl HtmlAttributes {
    /// Create an empty attribute set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Set an attribute, returning the previous value if there was one.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl Into<AttrValue>,
    ) -> Option<AttrValue> {
        let name = name.into();
        let value = value.into();
        if let Some((_, existing)) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            return Some(std::mem::replace(existing, value));
        }
        self.entries.push((name, value));
        None
    }

    /// Get an attribute value by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// Remove an attribute, returning its value.
    pub fn remove(&mut self, name: &str) -> Option<AttrValue> {
        let pos = self.entries.iter().position(|(n, _)| n == name)?;
        Some(self.entries.remove(pos).1)
    }

    /// Number of attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over attributes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<AttrValue>> FromIterator<(K, V)> for HtmlAttributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Self::new();
        attrs.extend(iter);
        attrs
    }
}

impl<K: Into<String>, V: Into<AttrValue>> Extend<(K, V)> for HtmlAttributes {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.insert(name, value);
        }
    }
}

/// Serialize attributes as ` name="value"` pairs in insertion order.
///
/// Boolean attributes ([`BOOLEAN_ATTRIBUTES`]) render as `name="name"` when
/// truthy and are dropped when falsy. [`AttrValue::Absent`] values are dropped.
/// This does not filter behavioural option keys; use
/// [`html_attrs_for_options`] for that.
#[must_use]
pub fn render_html_attrs(attrs: &HtmlAttributes) -> String {
    render(attrs.iter())
}

/// Drop [`OPTIONS_NOT_ATTRIBUTES`] keys, then serialize the rest.
#[must_use]
pub fn html_attrs_for_options(attrs: &HtmlAttributes) -> String {
    render(
        attrs
            .iter()
            .filter(|(name, _)| !OPTIONS_NOT_ATTRIBUTES.contains(name)),
    )
}

fn render<'a>(entries: impl Iterator<Item = (&'a str, &'a AttrValue)>) -> String {
    let mut out = String::new();
    for (name, value) in entries {
        let text = if BOOLEAN_ATTRIBUTES.contains(&name) {
            value.is_truthy().then_some(Cow::Borrowed(name))
        } else {
            value.as_text()
        };
        if let Some(text) = text {
            let _ = write!(out, r#" {}="{}""#, escape_html(name), escape_html(&text));
        }
    }
    out
}
