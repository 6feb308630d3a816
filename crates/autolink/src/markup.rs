//! Anchor elements already present in text.
//!
//! Each autolink pass runs on the output of the previous one. Entities found
//! inside an existing `<a …>…</a>` element (in its attributes or link text)
//! must be left alone, otherwise a later pass would nest anchors or corrupt
//! an href written by an earlier pass.

use std::ops::Range;

/// Byte ranges of `<a …>…</a>` elements, ordered and disjoint.
#[derive(Debug, Default)]
pub(crate) struct Anchors {
    spans: Vec<Range<usize>>,
}

impl Anchors {
    /// Locate anchor elements in `text`.
    ///
    /// Each `</a>` closes the nearest opening tag before it. An opening tag
    /// that is never closed protects nothing.
    pub fn scan(text: &str) -> Self {
        let mut spans = Vec::new();
        let mut pos = 0;

        while let Some(offset) = find_open_tag(&text[pos..]) {
            let start = pos + offset;
            let body = start + "<a".len();
            let Some(close) = text[body..].find("</a>").map(|i| body + i) else {
                break;
            };
            if let Some(next) = find_open_tag(&text[body..close]) {
                pos = body + next;
                continue;
            }
            let end = close + "</a>".len();
            spans.push(start..end);
            pos = end;
        }

        Self { spans }
    }

    /// Check whether `range` overlaps any anchor element.
    pub fn overlaps(&self, range: &Range<usize>) -> bool {
        let idx = self.spans.partition_point(|s| s.end <= range.start);
        self.spans.get(idx).is_some_and(|s| s.start < range.end)
    }

    pub fn len(&self) -> usize {
        self.spans.len()
    }
}

/// Find `<a` followed by whitespace or `>`, so `<abbr>` does not count.
fn find_open_tag(s: &str) -> Option<usize> {
    s.match_indices("<a").map(|(i, _)| i).find(|&i| {
        s[i + 2..]
            .chars()
            .next()
            .is_some_and(|c| c == '>' || c.is_ascii_whitespace())
    })
}
