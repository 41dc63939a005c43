//! Error types for the Web-Hack scanner

use thiserror::Error;

/// Main error type for scanner operations
#[derive(Debug, Error)]
pub enum WebHackError {
    /// Transport-level failure (DNS, connect, timeout). Non-fatal during a
    /// scan: callers treat it as absence of evidence for that one attempt.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("configuration error: {0}")]
    ConfigError(String),

    #[error("module '{0}' not found")]
    ModuleNotFound(String),

    /// The target host could not be resolved or reached. Fatal: surfaced
    /// before any crawling begins.
    #[error("target unreachable: {0}")]
    TargetUnreachable(String),

    #[error("scan deadline reached after {0} seconds")]
    ScanTimeout(u64),
}

/// Result type alias for scanner operations
pub type Result<T> = std::result::Result<T, WebHackError>;
