use regex::{Captures, Match, Regex};

use crate::config::ProviderConfig;
use crate::provider::Provider;
use crate::tree::EmbedTree;

/// Recognition pattern plus builder of one provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Matcher {
    provider: Provider,
}

impl Matcher {
    pub fn new(provider: Provider) -> Self {
        Self { provider }
    }

    /// One matcher per provider in registration order:
    /// Blip.tv, Dailymotion, Gametrailers, Metacafe, Veoh, Vimeo, Yahoo, YouTube.
    /// If two patterns match at the same position the earlier one wins.
    pub fn defaults() -> Vec<Matcher> {
        Provider::ALL.into_iter().map(Matcher::new).collect()
    }

    pub fn provider(&self) -> Provider {
        self.provider
    }

    pub fn name(&self) -> &'static str {
        self.provider.name()
    }

    pub fn pattern(&self) -> &'static Regex {
        self.provider.pattern()
    }

    /// Leftmost match starting at or after `start`. `^` still only matches at
    /// the start of `text`.
    pub(crate) fn find_at<'t>(&self, text: &'t str, start: usize) -> Option<Candidate<'t>> {
        let captures = self.pattern().captures_at(text, start)?;
        let url = captures.name("url")?;
        Some(Candidate { captures, url })
    }

    pub fn build(&self, captures: &Captures, config: &ProviderConfig) -> Option<EmbedTree> {
        self.provider.build(captures, config)
    }
}

pub(crate) struct Candidate<'t> {
    pub captures: Captures<'t>,
    pub url: Match<'t>,
}

impl Candidate<'_> {
    /// Start of the guard character, or of the url at the start of the text.
    pub fn start(&self) -> usize {
        self.captures.get(0).map(|m| m.start()).unwrap_or(self.url.start())
    }

    pub fn end(&self) -> usize {
        self.url.end()
    }
}
