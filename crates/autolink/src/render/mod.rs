//! Per-entity anchor rendering.
//!
//! A [`RenderContext`] is built once per pass: options are normalized and the
//! shared attribute string is rendered up front, then reused for every match.

mod hashtag;
mod mention;
mod url;

use std::borrow::Cow;

pub(crate) use hashtag::render_hashtag;
pub(crate) use mention::render_mention;
pub(crate) use url::render_url;

use crate::attrs::{HtmlAttributes, html_attrs_for_options};
use crate::options::{LinkOptions, PassOptions};

/// Caller hook applied to hashtag text and username/list identifiers.
pub type TransformFn = dyn Fn(&str) -> String + Send + Sync;

pub(crate) struct RenderContext<'a> {
    pub options: PassOptions<'a>,
    /// Pre-rendered ` name="value"` attributes shared by every anchor in the pass.
    pub attrs: String,
    transform: Option<&'a TransformFn>,
}

impl<'a> RenderContext<'a> {
    /// Context for the hashtag and username/list passes.
    ///
    /// Caller attributes plus `target` and `rel="nofollow"`.
    pub fn for_entities(
        options: &'a LinkOptions,
        html_attrs: &HtmlAttributes,
        transform: Option<&'a TransformFn>,
    ) -> Self {
        let mut attrs = html_attrs.clone();
        merge_link_behaviour(&mut attrs, options);
        Self {
            options: options.for_pass(),
            attrs: html_attrs_for_options(&attrs),
            transform,
        }
    }

    /// Context for the URL pass.
    ///
    /// Like [`for_entities`](Self::for_entities), but a caller-set `url_class`
    /// becomes the `class` attribute. No default class is applied here.
    pub fn for_urls(options: &'a LinkOptions, html_attrs: &HtmlAttributes) -> Self {
        let mut attrs = html_attrs.clone();
        if let Some(class) = &options.url_class {
            attrs.insert("class", class.as_str());
        }
        merge_link_behaviour(&mut attrs, options);
        Self {
            options: options.for_pass(),
            attrs: html_attrs_for_options(&attrs),
            transform: None,
        }
    }

    /// Apply the caller's transform hook, if any.
    pub fn transform<'s>(&self, text: &'s str) -> Cow<'s, str> {
        match self.transform {
            Some(f) => Cow::Owned(f(text)),
            None => Cow::Borrowed(text),
        }
    }
}

fn merge_link_behaviour(attrs: &mut HtmlAttributes, options: &LinkOptions) {
    if let Some(target) = &options.target {
        attrs.insert("target", target.as_str());
    }
    if !options.suppress_no_follow {
        attrs.insert("rel", "nofollow");
    }
}
