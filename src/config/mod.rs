mod error;
mod options;


pub use self::error::ConfigError;
pub use self::options::{read_options, read_options_path, split_args};

use crate::constants::DEFAULT_DIMENSIONS;
use crate::provider::Provider;
use std::fmt;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Width,
    Height,
}

impl Dimension {
    pub fn name(self) -> &'static str {
        match self {
            Dimension::Width => "width",
            Dimension::Height => "height",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "width" => Some(Dimension::Width),
            "height" => Some(Dimension::Height),
            _ => None,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dimensions {
    pub width: String,
    pub height: String,
}

/// Width and height of the embedded player for every provider.
///
/// Built once, either from the defaults or with a list of `<provider>_<dimension>`
/// overrides, and read-only afterwards. Empty values are legal and passed to the
/// markup as is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    entries: [Dimensions; 8],
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            entries: DEFAULT_DIMENSIONS.map(|(width, height)| Dimensions {
                width: width.into(),
                height: height.into(),
            }),
        }
    }
}

impl ProviderConfig {
    /// Defaults with `overrides` applied in order. Later keys win.
    pub fn new<I, K, V>(overrides: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut config = Self::default();

        for (key, value) in overrides {
            let key = key.as_ref();
            let (provider, dimension) = Self::parse_key(key).ok_or_else(|| {
                log::error!("Unknown video option '{key}'");
                ConfigError::UnknownKey(key.into())
            })?;

            let value = value.into();
            log::debug!("{provider} {dimension} set to '{value}'");
            let entry = &mut config.entries[provider.index()];
            match dimension {
                Dimension::Width => entry.width = value,
                Dimension::Height => entry.height = value,
            }
        }

        Ok(config)
    }

    /// Parse the option string of the markdown extension, either
    /// `video(youtube_width=640,youtube_height=360)` or just the list inside the parentheses.
    pub fn from_args(args: &str) -> Result<Self, ConfigError> {
        Self::new(split_args(args)?)
    }

    pub fn parse_path(path: &Path) -> Result<Self, ConfigError> {
        Self::new(read_options_path(path)?)
    }

    pub fn parse_data(data: &[u8]) -> Result<Self, ConfigError> {
        Self::new(read_options(data)?)
    }

    pub fn get(&self, provider: Provider, dimension: Dimension) -> &str {
        let entry = &self.entries[provider.index()];
        match dimension {
            Dimension::Width => &entry.width,
            Dimension::Height => &entry.height,
        }
    }

    pub fn dimensions(&self, provider: Provider) -> &Dimensions {
        &self.entries[provider.index()]
    }

    /// Look up a value by its option name, e.g. `vimeo_height`.
    pub fn get_key(&self, key: &str) -> Option<&str> {
        Self::parse_key(key).map(|(provider, dimension)| self.get(provider, dimension))
    }

    /// All 16 recognized option names.
    pub fn keys() -> impl Iterator<Item = String> {
        Provider::ALL.into_iter().flat_map(|provider| {
            [Dimension::Width, Dimension::Height]
                .into_iter()
                .map(move |dimension| format!("{provider}_{dimension}"))
        })
    }

    fn parse_key(key: &str) -> Option<(Provider, Dimension)> {
        let (provider, dimension) = key.rsplit_once('_')?;
        Some((Provider::from_name(provider)?, Dimension::from_name(dimension)?))
    }
}
