//! Substitution of detected spans.

use crate::Spanned;

/// Replace every match in `text` with the string produced by `replace`.
///
/// Text between matches is copied through unchanged. Matches are expected in
/// ascending order without overlap; a match starting before the end of the
/// previous one is skipped. The first error returned by `replace` stops the
/// substitution and is handed back to the caller as-is.
///
/// # Example
///
/// ```
/// use autolink_detect::{EntityDetector, RegexDetector, substitute};
///
/// let text = "ping @jack";
/// let out = substitute(text, RegexDetector.usernames_or_lists(text), |m| {
///     Ok::<_, std::convert::Infallible>(m.username.to_uppercase())
/// })
/// .unwrap();
/// assert_eq!(out, "ping JACK");
/// ```
pub fn substitute<M, E>(
    text: &str,
    matches: impl IntoIterator<Item = M>,
    mut replace: impl FnMut(&M) -> Result<String, E>,
) -> Result<String, E>
where
    M: Spanned,
{
    let mut output = String::with_capacity(text.len());
    let mut cursor = 0;

    for m in matches {
        let range = m.range();
        if range.start < cursor || range.end > text.len() {
            continue;
        }
        output.push_str(&text[cursor..range.start]);
        output.push_str(&replace(&m)?);
        cursor = range.end;
    }

    output.push_str(&text[cursor..]);
    Ok(output)
}

#[cfg(test)]
mod tests {
    use std::convert::Infallible;
    use std::ops::Range;

    use pretty_assertions::assert_eq;

    use super::*;

    struct Span(Range<usize>);

    impl Spanned for Span {
        fn range(&self) -> Range<usize> {
            self.0.clone()
        }
    }

    fn star(_: &Span) -> Result<String, Infallible> {
        Ok("*".to_owned())
    }

    #[test]
    fn test_no_matches_returns_input() {
        let out = substitute("unchanged", Vec::<Span>::new(), star).unwrap();
        assert_eq!(out, "unchanged");
    }

    #[test]
    fn test_replaces_in_order() {
        let out = substitute("abcdef", vec![Span(0..1), Span(2..4)], star).unwrap();
        assert_eq!(out, "*b*ef");
    }

    #[test]
    fn test_match_at_end() {
        let out = substitute("abc", vec![Span(1..3)], star).unwrap();
        assert_eq!(out, "a*");
    }

    #[test]
    fn test_overlapping_match_skipped() {
        let out = substitute("abcdef", vec![Span(0..3), Span(2..4)], star).unwrap();
        assert_eq!(out, "*def");
    }

    #[test]
    fn test_error_propagates() {
        let result = substitute("abc", vec![Span(0..1), Span(1..2)], |s: &Span| {
            if s.0.start == 1 {
                Err("boom")
            } else {
                Ok("x".to_owned())
            }
        });
        assert_eq!(result, Err("boom"));
    }

    #[test]
    fn test_replacement_receives_match() {
        let text = "one two";
        let out = substitute(text, vec![Span(4..7)], |s: &Span| {
            Ok::<_, Infallible>(text[s.0.clone()].to_uppercase())
        })
        .unwrap();
        assert_eq!(out, "one TWO");
    }
}
