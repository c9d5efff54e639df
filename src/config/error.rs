use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unknown option '{0}'")]
    UnknownKey(String),
    #[error("Malformed option '{0}', expected key=value")]
    MalformedOption(String),
    #[error("IO error")]
    IO(#[from] std::io::Error),
    #[error("Invalid UTF8 Text")]
    Utf8(#[from] std::str::Utf8Error),
}
