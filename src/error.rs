// SPDX-License-Identifier: MPL-2.0
//! Error types shared across the application.
//!
//! Payloads are stored as strings so errors stay `Clone` and can travel
//! inside Iced messages.

use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),
    #[error("Config Error: {0}")]
    Config(String),
    #[error("Fetch Error: {0}")]
    Fetch(#[from] FetchError),
}

/// Failure of a remote JSON or image fetch.
///
/// Every variant is surfaced to the user the same way (a fixed message);
/// the distinction only matters for logs and tests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Connection, TLS or transport failure before a response arrived.
    #[error("request failed: {0}")]
    Request(String),
    /// The server answered with a non-success status code.
    #[error("unexpected HTTP status: {0}")]
    Status(u16),
    /// The body could not be read or decoded into the expected shape.
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn fetch_error_wraps_into_error() {
        let err: Error = FetchError::Status(503).into();
        assert!(matches!(err, Error::Fetch(FetchError::Status(503))));
        assert_eq!(format!("{}", err), "Fetch Error: unexpected HTTP status: 503");
    }

    #[test]
    fn fetch_error_variants_describe_cause() {
        assert!(FetchError::Request("refused".into())
            .to_string()
            .contains("refused"));
        assert!(FetchError::Decode("expected `[`".into())
            .to_string()
            .starts_with("invalid response body"));
    }
}
