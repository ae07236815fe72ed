//! Error types for tantu-route.

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Routing pipeline error types.
///
/// An unreachable goal is NOT an error: route queries report it with an
/// empty path so callers can retry with another style.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Input image has a zero dimension
    #[error("empty image ({width}x{height})")]
    EmptyImage {
        /// Input width in pixels
        width: u32,
        /// Input height in pixels
        height: u32,
    },

    /// Routing was requested before any circuit analysis
    #[error("circuit not analyzed; call analyze_circuit first")]
    NotAnalyzed,

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration load or parse error
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<serde_yaml::Error> for Error {
    fn from(e: serde_yaml::Error) -> Self {
        Error::Config(e.to_string())
    }
}
