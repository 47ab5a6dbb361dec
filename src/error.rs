// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Config(String),
    Io(String),
}

/// Specific error types for scrape and download failures.
/// Used to provide user-friendly, localized error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Could not reach the scraping endpoint at all.
    Connection(String),

    /// The request or response timed out at the socket layer.
    Timeout,

    /// The endpoint answered with a non-success HTTP status.
    Status(u16),

    /// The response body was not the expected JSON shape.
    MalformedResponse(String),

    /// The fetched data was not a decodable image.
    InvalidImage(String),

    /// Generic error with raw message.
    Other(String),
}

impl FetchError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            FetchError::Connection(_) => "notification-fetch-error-connection",
            FetchError::Timeout => "notification-fetch-error-timeout",
            FetchError::Status(_) => "notification-fetch-error-status",
            FetchError::MalformedResponse(_) => "notification-fetch-error-malformed",
            FetchError::InvalidImage(_) => "notification-fetch-error-invalid-image",
            FetchError::Other(_) => "notification-fetch-error-general",
        }
    }

    /// Categorizes a reqwest error into a specific `FetchError`.
    ///
    /// reqwest errors are not `Clone`, so they are converted at the earliest
    /// boundary and only the category plus message travel through messages.
    pub fn from_reqwest(err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            return FetchError::Timeout;
        }
        if let Some(status) = err.status() {
            return FetchError::Status(status.as_u16());
        }
        if err.is_connect() || err.is_request() {
            return FetchError::Connection(err.to_string());
        }
        if err.is_decode() || err.is_body() {
            return FetchError::MalformedResponse(err.to_string());
        }
        FetchError::Other(err.to_string())
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Connection(msg) => write!(f, "Connection failed: {}", msg),
            FetchError::Timeout => write!(f, "Request timed out"),
            FetchError::Status(code) => write!(f, "Server returned HTTP {}", code),
            FetchError::MalformedResponse(msg) => write!(f, "Malformed response: {}", msg),
            FetchError::InvalidImage(msg) => write!(f, "Invalid image data: {}", msg),
            FetchError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Io(e) => write!(f, "I/O Error: {}", e),
        }
    }
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
    fn fetch_error_i18n_keys() {
        assert_eq!(
            FetchError::Timeout.i18n_key(),
            "notification-fetch-error-timeout"
        );
        assert_eq!(
            FetchError::Status(500).i18n_key(),
            "notification-fetch-error-status"
        );
        assert_eq!(
            FetchError::MalformedResponse(String::new()).i18n_key(),
            "notification-fetch-error-malformed"
        );
    }

    #[test]
    fn fetch_error_display_includes_status_code() {
        let err = FetchError::Status(502);
        assert!(format!("{}", err).contains("502"));
    }
}
