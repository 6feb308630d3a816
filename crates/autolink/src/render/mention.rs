use autolink_detect::MentionMatch;

use super::RenderContext;
use crate::error::AutolinkError;
use crate::escape::escape_html;

/// `@<a class="url username" href="…" …>user</a>` or the list variant.
///
/// The at sign stays outside the anchor. When lists are suppressed, a
/// `user/list` reference is linked as a username but keeps the full
/// `user/list` text, both as link text and as the identifier passed to the
/// username href.
pub(crate) fn render_mention(
    m: &MentionMatch<'_>,
    ctx: &RenderContext<'_>,
) -> Result<String, AutolinkError> {
    let identifier = m.identifier();
    let chunk = ctx.transform(&identifier);
    let options = &ctx.options;

    let (href, kind_class) = if m.list_slug.is_some() && !options.suppress_lists {
        (options.list_url.resolve(&chunk.to_lowercase())?, options.list_class)
    } else {
        (options.username_url.resolve(&chunk)?, options.username_class)
    };

    Ok(format!(
        r#"{}<a class="{} {}" href="{}"{}>{}</a>"#,
        escape_html(m.at),
        escape_html(options.url_class),
        escape_html(kind_class),
        escape_html(&href),
        ctx.attrs,
        escape_html(&chunk),
    ))
}
