//! Error types for the analyzer library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all analyzer operations.
#[derive(Error, Debug)]
pub enum AnalyzerError {
    /// The execution log text is not syntactically valid JSON.
    ///
    /// This is the one hard failure of step extraction and must stay
    /// distinguishable from an empty result ("no findings").
    #[error("Malformed execution log: {source}")]
    MalformedInput {
        #[source]
        source: serde_json::Error,
    },
    /// A screenshot filename does not match the required
    /// `<action>_<start|end>_<digits>.png` pattern.
    #[error("Invalid screenshot filename: {filename}")]
    InvalidFilename { filename: String },
    /// No execution log file found for a test run
    #[error("No execution log found under '{dir}'")]
    NoLogFile { dir: PathBuf },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
    /// The model API returned a non-success status.
    #[error("Model API error (status {status}): {message}")]
    Api { status: u16, message: String },
    /// HTTP transport errors when calling the model API
    #[error("HTTP error: {source}")]
    Http {
        #[from]
        source: reqwest::Error,
    },
}

impl AnalyzerError {
    /// Creates a file system error for a path.
    pub fn file_system(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileSystem {
            path: path.into(),
            source,
        }
    }

    /// Creates a configuration error with a message.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Whether this error is a transient rate-limit rejection.
    ///
    /// The retry policy only retries this class; everything else
    /// propagates immediately.
    pub fn is_rate_limited(&self) -> bool {
        match self {
            Self::Api { status, message } => {
                *status == 429 || message.contains("rate_limit_exceeded")
            }
            _ => false,
        }
    }
}

/// Result type alias for analyzer operations
pub type Result<T> = std::result::Result<T, AnalyzerError>;
