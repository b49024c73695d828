// Typed errors for configuration and controller construction.
// Event-time misses are not errors; these only surface at startup.
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("selector for `{0}` is empty")]
    EmptySelector(&'static str),
    #[error("scroll threshold must be a finite, non-negative number (got {0})")]
    InvalidThreshold(f64),
    #[error("unknown toggle variant `{0}` (expected `basic` or `translucent`)")]
    UnknownVariant(String),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum NavError {
    #[error("no global window")]
    NoWindow,
    #[error("no document on window")]
    NoDocument,
    #[error("invalid selector `{selector}`: {message}")]
    InvalidSelector { selector: String, message: String },
    #[error("no element matches `{selector}` for {role}")]
    MissingElement { role: &'static str, selector: String },
    #[error(transparent)]
    Config(#[from] ConfigError),
}
