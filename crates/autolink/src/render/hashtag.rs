use autolink_detect::HashtagMatch;

use super::RenderContext;
use crate::error::AutolinkError;
use crate::escape::escape_html;

/// `<a href="…" title="#tag" class="url hashtag" …>#tag</a>`
///
/// The title always uses an ASCII `#`, whatever marker the text used.
pub(crate) fn render_hashtag(
    m: &HashtagMatch<'_>,
    ctx: &RenderContext<'_>,
) -> Result<String, AutolinkError> {
    let tag = ctx.transform(m.tag);
    let href = ctx.options.hashtag_url.resolve(&tag)?;
    let tag = escape_html(&tag);

    Ok(format!(
        r##"<a href="{}" title="#{tag}" class="{} {}"{}>{}{tag}</a>"##,
        escape_html(&href),
        escape_html(ctx.options.url_class),
        escape_html(ctx.options.hashtag_class),
        ctx.attrs,
        escape_html(m.marker),
    ))
}
