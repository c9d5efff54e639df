use crate::provider::Provider;
use crate::tree::EmbedTree;

/// A replaced video URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Embed<'a> {
    pub provider: Provider,
    /// The URL text this embed replaces.
    pub source: &'a str,
    pub tree: EmbedTree,
}

/// Region of the input, in order. Concatenating all spans gives the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span<'a> {
    PlainText(&'a str),
    /// `[text](url)` or `<url>`, passed on verbatim.
    LinkWrapped(&'a str),
    /// Code span as written, or backslash escaped text without the backslash.
    Escaped(&'a str),
    Recognized(Embed<'a>),
}

impl<'a> Span<'a> {
    pub fn is_recognized(&self) -> bool {
        matches!(self, Span::Recognized(_))
    }

    pub fn embed(&self) -> Option<&Embed<'a>> {
        match self {
            Span::Recognized(embed) => Some(embed),
            _ => None,
        }
    }

    pub fn text(&self) -> Option<&'a str> {
        match self {
            Span::PlainText(text) | Span::LinkWrapped(text) | Span::Escaped(text) => Some(*text),
            Span::Recognized(_) => None,
        }
    }

    /// Append the output of this span, serializing embeds as XHTML.
    pub fn write_to(&self, out: &mut String) {
        match self {
            Span::Recognized(embed) => out.push_str(&embed.tree.to_xhtml()),
            Span::PlainText(text) | Span::LinkWrapped(text) | Span::Escaped(text) => {
                out.push_str(text)
            }
        }
    }
}

pub fn spans_to_string(spans: &[Span]) -> String {
    let mut out = String::new();
    for span in spans {
        span.write_to(&mut out);
    }
    out
}
