//! Replace bare video URLs in text with embeddable player markup.
//!
//! ```
//! use video_embed::{ProviderConfig, VideoEmbedder};
//!
//! let embedder = VideoEmbedder::new(ProviderConfig::from_args("vimeo_width=640").unwrap());
//! let html = embedder.render_to_string("watch http://vimeo.com/1496152");
//! assert!(html.starts_with("watch <div"));
//! ```

pub mod config;
mod constants;
pub mod inline;
mod matcher;
mod provider;
mod span;
pub mod templates;
mod tree;
mod util;

#[cfg(test)]
mod tests;

pub use config::{ConfigError, Dimension, Dimensions, ProviderConfig};
pub use matcher::Matcher;
pub use provider::Provider;
pub use span::{spans_to_string, Embed, Span};
pub use tree::EmbedTree;

use log::{debug, warn};
use matcher::Candidate;
use util::Util;

/// Scans text for video URLs and replaces them with embed markup.
///
/// Holds no mutable state, a single instance can be shared between threads.
#[derive(Debug, Clone)]
pub struct VideoEmbedder {
    config: ProviderConfig,
    matchers: Vec<Matcher>,
}

impl Default for VideoEmbedder {
    fn default() -> Self {
        Self::new(ProviderConfig::default())
    }
}

impl VideoEmbedder {
    pub fn new(config: ProviderConfig) -> Self {
        Self::with_matchers(config, Matcher::defaults())
    }

    /// Use `matchers` instead of the default set. Order decides which matcher
    /// wins when several match at the same position.
    pub fn with_matchers(config: ProviderConfig, matchers: Vec<Matcher>) -> Self {
        Self { config, matchers }
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    pub fn matchers(&self) -> &[Matcher] {
        &self.matchers
    }

    /// Split `text` into plain text and recognized video URLs.
    ///
    /// `text` must already be free of links, code and escaped text. A URL directly
    /// after `(` is never rewritten. The character in front of a URL is kept
    /// as plain text.
    pub fn render<'a>(&self, text: &'a str) -> Vec<Span<'a>> {
        let mut spans = Vec::new();
        let mut plain_start = 0;
        let mut pos = 0;
        let mut candidates: Vec<Option<Candidate>> = self
            .matchers
            .iter()
            .map(|matcher| matcher.find_at(text, 0))
            .collect();

        while pos < text.len() {
            for (matcher, slot) in self.matchers.iter().zip(candidates.iter_mut()) {
                if slot.as_ref().map(|c| c.start() < pos).unwrap_or(false) {
                    *slot = matcher.find_at(text, pos);
                }
            }

            let starts = candidates.iter().map(|slot| slot.as_ref().map(Candidate::start));
            let Some(index) = earliest(starts) else {
                break;
            };
            let Some(candidate) = candidates[index].as_ref() else {
                break;
            };
            let matcher = &self.matchers[index];

            match matcher.build(&candidate.captures, &self.config) {
                Some(tree) => {
                    let url = candidate.url;
                    debug!("Embedding {} video '{}'", matcher.name(), url.as_str());

                    if url.start() > plain_start {
                        spans.push(Span::PlainText(&text[plain_start..url.start()]));
                    }
                    spans.push(Span::Recognized(Embed {
                        provider: matcher.provider(),
                        source: url.as_str(),
                        tree,
                    }));

                    pos = candidate.end();
                    plain_start = pos;
                }
                None => {
                    warn!(
                        "Leaving {} url '{}' untouched",
                        matcher.name(),
                        candidate.url.as_str()
                    );
                    // other matchers keep their candidates at this position
                    let start = candidate.start();
                    candidates[index] = matcher.find_at(text, start + Util::char_len_at(text, start));
                }
            }
        }

        if plain_start < text.len() {
            spans.push(Span::PlainText(&text[plain_start..]));
        }

        spans
    }

    /// Like [`VideoEmbedder::render`], but first sets aside links, autolinks,
    /// code spans and backslash escapes so their URLs stay as they are.
    pub fn process<'a>(&self, text: &'a str) -> Vec<Span<'a>> {
        let mut spans = Vec::new();
        for span in inline::classify(text) {
            match span {
                Span::PlainText(candidate) => spans.extend(self.render(candidate)),
                other => spans.push(other),
            }
        }
        spans
    }

    pub fn render_to_string(&self, text: &str) -> String {
        spans_to_string(&self.render(text))
    }

    pub fn process_to_string(&self, text: &str) -> String {
        spans_to_string(&self.process(text))
    }
}

/// Index of the candidate with the earliest start. Among equal starts the
/// first one wins.
pub(crate) fn earliest<I>(starts: I) -> Option<usize>
where
    I: IntoIterator<Item = Option<usize>>,
{
    starts
        .into_iter()
        .enumerate()
        .filter_map(|(index, start)| start.map(|start| (start, index)))
        .min()
        .map(|(_, index)| index)
}
