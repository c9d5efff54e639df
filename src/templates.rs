//! The two shapes of embed markup.

use crate::constants::{FLASH_MIME_TYPE, RESPONSIVE_CLASS, RESPONSIVE_ITEM_CLASS};
use crate::tree::EmbedTree;

/// Knobs of [`iframe_embed_with`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IframeOptions<'a> {
    pub frame_border: &'a str,
    pub allow_full_screen: &'a str,
    /// Suffix of the `embed-responsive-*` container class, e.g. `16by9` or `4by3`.
    pub aspect_class: &'a str,
}

impl Default for IframeOptions<'_> {
    fn default() -> Self {
        Self {
            frame_border: "0",
            allow_full_screen: "true",
            aspect_class: "16by9",
        }
    }
}

/// Legacy `<object>` embed for flash players.
///
/// `extra_params` are appended as `<param>` children after `movie` and `allowFullScreen`.
pub fn plugin_embed(url: &str, width: &str, height: &str, extra_params: &[(&str, &str)]) -> EmbedTree {
    let mut object = EmbedTree::new("object")
        .with_attribute("type", FLASH_MIME_TYPE)
        .with_attribute("width", width)
        .with_attribute("height", height)
        .with_attribute("data", url);

    let params = [("movie", url), ("allowFullScreen", "true")];
    for (name, value) in params.iter().chain(extra_params) {
        object.append(
            EmbedTree::new("param")
                .with_attribute("name", *name)
                .with_attribute("value", *value),
        );
    }

    object
}

pub fn iframe_embed(url: &str, width: &str, height: &str) -> EmbedTree {
    iframe_embed_with(url, width, height, &IframeOptions::default())
}

/// `<iframe>` wrapped in a responsive container `<div>`.
/// Width and height are always set, even when empty.
pub fn iframe_embed_with(url: &str, width: &str, height: &str, options: &IframeOptions) -> EmbedTree {
    let iframe = EmbedTree::new("iframe")
        .with_attribute("width", width)
        .with_attribute("height", height)
        .with_attribute("src", url)
        .with_attribute("allowfullscreen", options.allow_full_screen)
        .with_attribute("frameborder", options.frame_border)
        .with_attribute("class", RESPONSIVE_ITEM_CLASS);

    EmbedTree::new("div")
        .with_attribute(
            "class",
            format!("{RESPONSIVE_CLASS} {RESPONSIVE_CLASS}-{}", options.aspect_class),
        )
        .with_child(iframe)
}
