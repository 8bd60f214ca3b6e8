/*!
 * Error types for the subrelay application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur when talking to the video-hosting service API
#[derive(Error, Debug)]
pub enum HostingError {
    /// Error when making an API request fails
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing an API response fails
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Error returned by the API itself
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String,
    },

    /// Error related to quota or rate limiting
    #[error("Quota exceeded: {0}")]
    QuotaExceeded(String),

    /// Error with authentication
    #[error("Authentication error: {0}")]
    AuthenticationError(String),
}

/// Errors that can occur when talking to the translation service API
#[derive(Error, Debug)]
pub enum TranslatorError {
    /// Error when making an API request fails
    #[error("Translation request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing a translation response fails
    #[error("Failed to parse translation response: {0}")]
    ParseError(String),

    /// Error returned by the translation API itself
    #[error("Translation API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String,
    },

    /// Error related to rate limiting
    #[error("Rate limit exceeded: {0}")]
    RateLimitExceeded(String),

    /// Error with authentication
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// Response did not line up with the submitted items
    #[error("Translation response mismatch: sent {sent} items, received {received}")]
    ItemCountMismatch {
        /// Number of text items submitted
        sent: usize,
        /// Number of translations received
        received: usize,
    },
}

/// Errors that can occur during subtitle processing
#[derive(Error, Debug)]
pub enum SubtitleError {
    /// Error parsing SRT content
    #[error("Failed to parse SRT content: {0}")]
    ParseError(String),

    /// A subtitle entry failed validation
    #[error("Invalid subtitle entry {seq_num}: {reason}")]
    InvalidEntry {
        /// Sequence number of the offending entry
        seq_num: usize,
        /// Why the entry was rejected
        reason: String,
    },
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from the hosting service
    #[error("Hosting service error: {0}")]
    Hosting(#[from] HostingError),

    /// Error from the translation service
    #[error("Translator error: {0}")]
    Translator(#[from] TranslatorError),

    /// Error from subtitle processing
    #[error("Subtitle error: {0}")]
    Subtitle(#[from] SubtitleError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
