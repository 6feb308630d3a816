//! One autolink pass: detect, skip existing anchors, render, substitute.

use std::fmt;

use autolink_detect::{Spanned, substitute};

use crate::error::AutolinkError;
use crate::markup::Anchors;

/// Entity kind handled by a pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum EntityKind {
    Hashtag,
    UsernameOrList,
    Url,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Hashtag => "hashtag",
            Self::UsernameOrList => "username_or_list",
            Self::Url => "url",
        })
    }
}

/// Replace every match outside existing anchors with its rendered markup.
///
/// Resolver errors raised by `render` stop the pass and are returned as-is.
pub(crate) fn rewrite<M: Spanned>(
    kind: EntityKind,
    text: &str,
    matches: impl Iterator<Item = M>,
    render: impl FnMut(&M) -> Result<String, AutolinkError>,
) -> Result<String, AutolinkError> {
    let anchors = Anchors::scan(text);
    let mut detected = 0usize;
    let mut skipped = 0usize;

    let fresh = matches.filter(|m| {
        detected += 1;
        let inside = anchors.overlaps(&m.range());
        if inside {
            skipped += 1;
        }
        !inside
    });
    let output = substitute(text, fresh, render)?;

    tracing::debug!(
        kind = %kind,
        detected,
        rendered = detected - skipped,
        skipped,
        anchors = anchors.len(),
        "Autolink pass completed"
    );

    Ok(output)
}
