//! Error types for Axie Sales
//!
//! Centralized error handling using snafu for ergonomic error definitions.

use snafu::Snafu;

/// Main error type for the crate
#[derive(Debug, Snafu)]
pub enum Error {
    /// Invalid user input (rejected at parse time, never sent to the service)
    #[snafu(display("Invalid: {message}"))]
    Invalid { message: String },

    /// A normal collection was toggled while a sentinel collection is active
    #[snafu(display("Collection '{collection}' is locked while '{sentinel}' is selected"))]
    CollectionLocked { collection: String, sentinel: String },

    /// Transport failure talking to the data service
    #[snafu(display("Request to {url} failed: {source}"))]
    Transport { url: String, source: reqwest::Error },

    /// Data service answered with a non-success status
    #[snafu(display("Request to {url} returned HTTP {status}"))]
    Status { url: String, status: u16 },

    /// Response body was empty or could not be decoded
    #[snafu(display("Malformed response from {url}: {message}"))]
    MalformedResponse { url: String, message: String },

    /// IO error (config file, log directory)
    #[snafu(display("IO error: {source}"))]
    Io { source: std::io::Error },

    /// TOML deserialization error
    #[snafu(display("TOML parse error: {source}"))]
    TomlDe { source: toml::de::Error },

    /// TOML serialization error
    #[snafu(display("TOML serialize error: {source}"))]
    TomlSe { source: toml::ser::Error },

    /// Configuration could not be resolved
    #[snafu(display("Config error: {message}"))]
    Config { message: String },
}

impl Error {
    /// Whether this error came from talking to the data service
    pub fn is_fetch_error(&self) -> bool {
        matches!(
            self,
            Error::Transport { .. } | Error::Status { .. } | Error::MalformedResponse { .. }
        )
    }
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io { source }
    }
}

impl From<toml::de::Error> for Error {
    fn from(source: toml::de::Error) -> Self {
        Error::TomlDe { source }
    }
}

impl From<toml::ser::Error> for Error {
    fn from(source: toml::ser::Error) -> Self {
        Error::TomlSe { source }
    }
}

/// Result type alias for convenience
pub type Result<T, E = Error> = std::result::Result<T, E>;
