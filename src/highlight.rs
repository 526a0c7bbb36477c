//! Match-highlight span computation.
//!
//! The engine never rewrites displayed text; it only annotates which slices
//! of it matched the query. Consumers decide how emphasized spans look.

use crate::query::Query;

/// A slice of a displayed string, flagged as matching the query or not.
///
/// Concatenating the `text` of every span for a field reproduces the
/// original string byte-for-byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Span<'a> {
    pub text: &'a str,
    pub is_match: bool,
}

impl<'a> Span<'a> {
    #[must_use]
    pub fn matched(text: &'a str) -> Self {
        Self {
            text,
            is_match: true,
        }
    }

    #[must_use]
    pub fn plain(text: &'a str) -> Self {
        Self {
            text,
            is_match: false,
        }
    }
}

/// Split `text` into spans marking every occurrence of `query`.
///
/// An empty query, or a query with no occurrence, yields a single
/// non-matching span equal to the whole string. Matched spans never overlap
/// and adjacent matches coalesce.
#[must_use]
pub fn highlight<'a>(text: &'a str, query: &Query) -> Vec<Span<'a>> {
    let ranges = query.find_in(text);
    if ranges.is_empty() {
        return vec![Span::plain(text)];
    }

    let mut spans = Vec::with_capacity(ranges.len() * 2 + 1);
    let mut cursor = 0usize;
    for range in ranges {
        if range.start > cursor {
            spans.push(Span::plain(&text[cursor..range.start]));
        }
        spans.push(Span::matched(&text[range.start..range.end]));
        cursor = range.end;
    }
    if cursor < text.len() {
        spans.push(Span::plain(&text[cursor..]));
    }
    spans
}
