//! Minimal stand-in for the host document pipeline.
//!
//! Marks the constructs whose URLs must never be rewritten: code spans,
//! backslash escapes, inline links and autolinks. Only the plain text between
//! them is a candidate for [`VideoEmbedder::render`](crate::VideoEmbedder::render).

use crate::constants::INLINE_CONSTRUCT;
use crate::span::Span;

pub fn classify(text: &str) -> Vec<Span<'_>> {
    let mut spans = Vec::new();
    let mut last = 0;

    for captures in INLINE_CONSTRUCT.captures_iter(text) {
        let Some(whole) = captures.get(0) else {
            continue;
        };

        if whole.start() > last {
            spans.push(Span::PlainText(&text[last..whole.start()]));
        }

        let span = if let Some(escaped) = captures.name("escaped") {
            Span::Escaped(escaped.as_str())
        } else if captures.name("code").is_some() {
            Span::Escaped(whole.as_str())
        } else {
            Span::LinkWrapped(whole.as_str())
        };
        spans.push(span);
        last = whole.end();
    }

    if last < text.len() {
        spans.push(Span::PlainText(&text[last..]));
    }

    spans
}
