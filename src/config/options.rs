use super::error::ConfigError;
use crate::util::Util;
use std::fs;
use std::path::Path;

/// Split `video(key=value,key=value)` or `key=value,key=value` into pairs.
/// Keys are not validated here.
pub fn split_args(args: &str) -> Result<Vec<(String, String)>, ConfigError> {
    let args = args.trim();
    let args = args
        .strip_prefix("video(")
        .and_then(|inner| inner.strip_suffix(')'))
        .unwrap_or(args);

    args.split(',')
        .map(str::trim)
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((key, value)) => Ok((key.trim().to_owned(), value.trim().to_owned())),
            None => Err(ConfigError::MalformedOption(pair.into())),
        })
        .collect()
}

pub fn read_options_path(path: &Path) -> Result<Vec<(String, String)>, ConfigError> {
    let data = fs::read(path).map_err(|error| {
        log::error!("Failed to read video options {:?}: {}", path, error);
        error
    })?;
    read_options(&data)
}

/// One option per line, `key: value` or `key=value`.
/// Empty lines and `#` comments are ignored.
pub fn read_options(data: &[u8]) -> Result<Vec<(String, String)>, ConfigError> {
    let text = std::str::from_utf8(data)?;
    let mut options = Vec::new();

    for line in text.lines() {
        let line = Util::strip_comment(line).trim();
        if line.is_empty() {
            continue;
        }

        let Some((key, value)) = Util::split_option(line) else {
            log::error!("Malformed video option line '{line}'");
            return Err(ConfigError::MalformedOption(line.into()));
        };
        options.push((key.to_owned(), value.to_owned()));
    }

    Ok(options)
}
