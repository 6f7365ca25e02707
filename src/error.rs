use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("service returned HTTP {status}")]
    Status { status: u16 },

    #[error("could not read response: {0}")]
    Decode(#[source] reqwest::Error),
}

#[derive(Debug, Error)]
#[error("clipboard unavailable: {0}")]
pub struct ClipboardError(#[from] pub arboard::Error);

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}
