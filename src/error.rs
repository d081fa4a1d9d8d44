//! Error types for the LotsEye site.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Form validation failures are not errors: they are reported as rejection values
//! (see [`crate::domain`]) and rendered inline next to the offending field.

use thiserror::Error;

/// Errors that can occur when delivering a contact submission.
#[derive(Error, Debug)]
pub enum SubmissionError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Endpoint returned an error status code
    #[error("Endpoint error (status {status}): {message}")]
    EndpointError { status: u16, message: String },

    /// Failed to encode the submission
    #[error("JSON encode error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Network timeout
    #[error("Request timeout")]
    Timeout,

    /// Authentication failed
    #[error("Authentication failed")]
    Unauthorized,

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors that can occur during site search.
#[derive(Error, Debug)]
pub enum SearchError {
    /// Invalid search query
    #[error("Invalid search query: {0}")]
    InvalidQuery(String),
}

/// Errors raised by routing and the mounted views.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SiteError {
    /// No page is registered for the path
    #[error("No page found for path: {0}")]
    UnknownRoute(String),

    /// The operation needs a different page to be mounted
    #[error("The {expected} page is not active (current page: {active})")]
    ViewNotActive {
        expected: &'static str,
        active: &'static str,
    },

    /// Unknown contact form field name
    #[error("Unknown form field: {0}")]
    UnknownField(String),

    /// Typewriter playlist has no entries
    #[error("Typewriter playlist cannot be empty")]
    EmptyPlaylist,
}

/// Convenience type alias for Results with SubmissionError
pub type SubmissionResult<T> = Result<T, SubmissionError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with SearchError
pub type SearchResult<T> = Result<T, SearchError>;

/// Convenience type alias for Results with SiteError
pub type SiteResult<T> = Result<T, SiteError>;
