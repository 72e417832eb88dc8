use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all jaruid operations.
#[derive(Debug, Error, Diagnostic)]
pub enum JarUidError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A jar could not be read (corrupt or truncated zip archive).
    #[error("Failed to read jar {jar}: {message}")]
    MalformedJar { jar: String, message: String },

    /// Invalid or malformed configuration (e.g. `~/.jaruid/config.toml`).
    #[error("Configuration error: {message}")]
    #[diagnostic(help("Check ~/.jaruid/config.toml for syntax errors"))]
    Config { message: String },

    /// Network request or download failed.
    #[error("Network error: {message}")]
    Network { message: String },

    /// Report serialization or write failed.
    #[error("Report error: {message}")]
    Report { message: String },

    /// User supplied an invalid manual selection.
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}

/// Convenience alias for `miette::Result<T>`.
pub type JarUidResult<T> = miette::Result<T>;
