use thiserror::Error;

/// Top-level error type for BookPro.
#[derive(Debug, Error)]
pub enum BookProError {
    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// A locale tag other than `pt` or `en`.
    #[error("unsupported locale: {0} (expected \"pt\" or \"en\")")]
    UnsupportedLocale(String),

    /// I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
