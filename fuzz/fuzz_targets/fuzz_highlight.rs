//! Fuzz target for query matching and highlight spans.
//!
//! For arbitrary (text, query) pairs: no panics, span concatenation
//! reproduces the text exactly, and spans stay consistent with `matches`.

#![no_main]

use libfuzzer_sys::fuzz_target;
use portico::{Query, highlight};

fuzz_target!(|input: (&str, &str)| {
    let (text, raw_query) = input;
    let query = Query::new(raw_query);

    let spans = highlight(text, &query);
    let joined: String = spans.iter().map(|s| s.text).collect();
    assert_eq!(joined, text, "span concatenation must be lossless");

    let any_match = spans.iter().any(|s| s.is_match);
    if any_match {
        assert!(!query.is_empty(), "empty queries must not highlight");
        assert!(query.matches(text), "highlights imply a match");
    }

    for range in query.find_in(text) {
        assert!(range.start < range.end);
        assert!(text.is_char_boundary(range.start));
        assert!(text.is_char_boundary(range.end));
    }
});
