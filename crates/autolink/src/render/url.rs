use autolink_detect::UrlMatch;

use super::RenderContext;
use crate::error::AutolinkError;
use crate::escape::escape_html;

/// `<a href="…" …>display</a>`
///
/// Display text comes from a matching [`UrlEntity`](crate::UrlEntity) when one
/// is registered for the exact raw URL, otherwise it is the raw URL.
pub(crate) fn render_url(
    m: &UrlMatch<'_>,
    ctx: &RenderContext<'_>,
) -> Result<String, AutolinkError> {
    let href = ctx.options.link_url.resolve(m.url)?;
    let entity = ctx.options.url_entity(m.url);
    let display = entity.map_or(m.url, |e| e.display_url.as_str());
    let title = entity
        .and_then(|e| e.expanded_url.as_deref())
        .map(|expanded| format!(r#" title="{}""#, escape_html(expanded)))
        .unwrap_or_default();

    Ok(format!(
        r#"<a href="{}"{title}{}>{}</a>"#,
        escape_html(&href),
        ctx.attrs,
        escape_html(display),
    ))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::attrs::HtmlAttributes;
    use crate::options::{LinkOptions, UrlEntity};

    fn url(url: &str) -> UrlMatch<'_> {
        UrlMatch {
            range: 0..url.len(),
            url,
            protocol: "http",
        }
    }

    fn render(options: &LinkOptions, html_attrs: &HtmlAttributes, raw: &str) -> String {
        let ctx = RenderContext::for_urls(options, html_attrs);
        render_url(&url(raw), &ctx).unwrap()
    }

    #[test]
    fn test_plain_url() {
        let html = render(&LinkOptions::new(), &HtmlAttributes::new(), "http://example.com");
        assert_eq!(
            html,
            r#"<a href="http://example.com" rel="nofollow">http://example.com</a>"#
        );
    }

    #[test]
    fn test_url_escaped() {
        let html = render(
            &LinkOptions::new(),
            &HtmlAttributes::new(),
            "http://example.com/?a=1&b='2'",
        );
        assert_eq!(
            html,
            r#"<a href="http://example.com/?a=1&amp;b=&#39;2&#39;" rel="nofollow">http://example.com/?a=1&amp;b=&#39;2&#39;</a>"#
        );
    }

    #[test]
    fn test_display_override() {
        let options = LinkOptions::new()
            .with_url_entity(UrlEntity::new("http://t.co/abc", "example.com/<abc>"));
        let html = render(&options, &HtmlAttributes::new(), "http://t.co/abc");
        assert_eq!(
            html,
            r#"<a href="http://t.co/abc" rel="nofollow">example.com/&lt;abc&gt;</a>"#
        );
    }

    #[test]
    fn test_expanded_url_as_title() {
        let options = LinkOptions::new().with_url_entity(
            UrlEntity::new("http://t.co/abc", "example.com/abc")
                .with_expanded_url("http://example.com/abc"),
        );
        let html = render(&options, &HtmlAttributes::new(), "http://t.co/abc");
        assert_eq!(
            html,
            r#"<a href="http://t.co/abc" title="http://example.com/abc" rel="nofollow">example.com/abc</a>"#
        );
    }

    #[test]
    fn test_link_resolver_with_override() {
        let options = LinkOptions::new()
            .with_link_url_resolver(|raw: &str| {
                Ok::<_, AutolinkError>(format!("/out?u={}", raw.len()))
            })
            .with_url_entity(UrlEntity::new("http://t.co/abc", "example.com"));
        let html = render(&options, &HtmlAttributes::new(), "http://t.co/abc");
        assert_eq!(
            html,
            r#"<a href="/out?u=15" rel="nofollow">example.com</a>"#
        );
    }

    #[test]
    fn test_caller_attrs_and_class() {
        let options = LinkOptions::new()
            .with_url_class("external")
            .with_target("_blank");
        let html_attrs = HtmlAttributes::new().with("data-kind", "link");
        let html = render(&options, &html_attrs, "http://example.com");
        assert_eq!(
            html,
            r#"<a href="http://example.com" data-kind="link" class="external" target="_blank" rel="nofollow">http://example.com</a>"#
        );
    }
}
