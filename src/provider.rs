use std::fmt;

use log::warn;
use regex::{Captures, Regex};

use crate::config::{Dimension, ProviderConfig};
use crate::constants;
use crate::templates;
use crate::tree::EmbedTree;

/// Video hosting sites with a known URL shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provider {
    BlipTv,
    Dailymotion,
    Gametrailers,
    Metacafe,
    Veoh,
    Vimeo,
    Yahoo,
    Youtube,
}

impl Provider {
    /// All providers in registration order.
    pub const ALL: [Provider; 8] = [
        Provider::BlipTv,
        Provider::Dailymotion,
        Provider::Gametrailers,
        Provider::Metacafe,
        Provider::Veoh,
        Provider::Vimeo,
        Provider::Yahoo,
        Provider::Youtube,
    ];

    /// Name used as prefix of the configuration keys, e.g. `bliptv_width`.
    pub fn name(self) -> &'static str {
        match self {
            Provider::BlipTv => "bliptv",
            Provider::Dailymotion => "dailymotion",
            Provider::Gametrailers => "gametrailers",
            Provider::Metacafe => "metacafe",
            Provider::Veoh => "veoh",
            Provider::Vimeo => "vimeo",
            Provider::Yahoo => "yahoo",
            Provider::Youtube => "youtube",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|provider| provider.name() == name)
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }

    /// Recognition pattern. Every pattern has a `url` group covering the
    /// link itself, preceded by a single consumed guard character.
    pub fn pattern(self) -> &'static Regex {
        match self {
            Provider::BlipTv => &*constants::BLIPTV,
            Provider::Dailymotion => &*constants::DAILYMOTION,
            Provider::Gametrailers => &*constants::GAMETRAILERS,
            Provider::Metacafe => &*constants::METACAFE,
            Provider::Veoh => &*constants::VEOH,
            Provider::Vimeo => &*constants::VIMEO,
            Provider::Yahoo => &*constants::YAHOO,
            Provider::Youtube => &*constants::YOUTUBE,
        }
    }

    /// Turn a successful match of [`Provider::pattern`] into markup.
    ///
    /// Returns `None` if a group the builder relies on came out empty.
    /// The caller is expected to treat that as "no match".
    pub fn build(self, captures: &Captures, config: &ProviderConfig) -> Option<EmbedTree> {
        let width = config.get(self, Dimension::Width);
        let height = config.get(self, Dimension::Height);

        let tree = match self {
            Provider::BlipTv => {
                let file = self.group(captures, "file")?;
                let url = format!("{}{file}", constants::BLIPTV_PLAYER);
                templates::plugin_embed(&url, width, height, &[])
            }
            Provider::Dailymotion => {
                let path = self.group(captures, "path")?;
                let Some(id) = path.rsplit('/').next().filter(|id| !id.is_empty()) else {
                    warn!("{self}: no video id at the end of '{path}'");
                    return None;
                };
                let url = format!("{}{id}", constants::DAILYMOTION_PLAYER);
                templates::plugin_embed(&url, width, height, &[])
            }
            Provider::Gametrailers => {
                let id = self.group(captures, "id")?;
                let url = format!("{}{id}", constants::GAMETRAILERS_PLAYER);
                templates::plugin_embed(&url, width, height, &[])
            }
            Provider::Metacafe => {
                let id = self.group(captures, "id")?;
                let url = format!("{}{id}.swf", constants::METACAFE_PLAYER);
                templates::iframe_embed(&url, width, height)
            }
            Provider::Veoh => {
                let id = self.group(captures, "id")?;
                let url = format!("{}{id}", constants::VEOH_PLAYER);
                templates::plugin_embed(&url, width, height, &[])
            }
            Provider::Vimeo => {
                let id = self.group(captures, "id")?;
                let url = format!("{}{id}&server=vimeo.com", constants::VIMEO_PLAYER);
                templates::iframe_embed(&url, width, height)
            }
            Provider::Yahoo => {
                let vid = self.group(captures, "vid")?;
                let id = self.group(captures, "id")?;
                let flash_vars = format!("id={id}&vid={vid}");
                templates::plugin_embed(
                    constants::YAHOO_PLAYER,
                    width,
                    height,
                    &[("flashVars", flash_vars.as_str())],
                )
            }
            Provider::Youtube => {
                let args = self.group(captures, "args")?;
                let url = format!("{}{args}", constants::YOUTUBE_PLAYER);
                templates::iframe_embed(&url, width, height)
            }
        };

        Some(tree)
    }

    fn group<'t>(self, captures: &Captures<'t>, name: &str) -> Option<&'t str> {
        let value = captures
            .name(name)
            .map(|m| m.as_str())
            .filter(|value| !value.is_empty());
        if value.is_none() {
            warn!("{self}: capture group '{name}' is missing");
        }
        value
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
