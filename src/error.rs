//! Unified error types for slackdown.
//!
//! This module provides a single [`SlackdownError`] enum that covers all
//! error cases in the library. This design follows the pattern used by
//! popular crates like `reqwest`, `serde_json`, and `csv`.
//!
//! # Error Handling Philosophy
//!
//! - **Library users** get typed errors they can match on
//! - **Application users** get clear, actionable error messages
//! - **Developers** get source error chains for debugging
//!
//! There is no retry logic anywhere in the library: every operation hands
//! its error straight to the caller, and the CLI aborts on the first one.
//! Output written before the failure stays on disk.

use std::io;

use thiserror::Error;

/// A specialized [`Result`] type for slackdown operations.
///
/// # Example
///
/// ```rust
/// use slackdown::error::Result;
///
/// fn my_function() -> Result<Vec<String>> {
///     // ... operations that may fail
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, SlackdownError>;

/// The error type for all slackdown operations.
///
/// Each variant contains context about what went wrong and, where
/// applicable, the underlying source error.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SlackdownError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The output file cannot be created
    /// - Permission denied
    /// - Disk is full while writing
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The HTTP transport failed before Slack could answer.
    ///
    /// Connection refused, DNS failure, TLS trouble, or a body that could
    /// not be read.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Slack answered with `ok: false`.
    ///
    /// Contains the Web API method that failed and the error code Slack
    /// reported (e.g. `invalid_auth`, `channel_not_found`, `ratelimited`).
    #[error("Slack API call {method} failed: {message}")]
    Api {
        /// The Web API method (e.g. `conversations.history`)
        method: &'static str,
        /// Slack's error code, or a description of the failure
        message: String,
    },

    /// A rich-text element's payload did not parse into the expected shape.
    ///
    /// Raised by the Markdown converters when a `rich_text_list`,
    /// `rich_text_quote`, or `rich_text_preformatted` payload is malformed.
    #[error("Failed to decode {element} payload: {source}")]
    Decode {
        /// The element kind being decoded (e.g. `rich_text_list`)
        element: &'static str,
        /// The underlying deserialization error
        #[source]
        source: serde_json::Error,
    },

    /// JSON parsing error.
    ///
    /// This can occur when decoding a Web API response body.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing error.
    ///
    /// This can occur when reading the configuration file.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The configuration is missing a required value or holds an invalid one.
    #[error("Invalid configuration: {message}")]
    Config {
        /// Description of what's wrong
        message: String,
    },
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl SlackdownError {
    /// Creates an API error for a Web API method.
    pub fn api(method: &'static str, message: impl Into<String>) -> Self {
        SlackdownError::Api {
            method,
            message: message.into(),
        }
    }

    /// Creates a decode error for a rich-text element payload.
    pub fn decode(element: &'static str, source: serde_json::Error) -> Self {
        SlackdownError::Decode { element, source }
    }

    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        SlackdownError::Config {
            message: message.into(),
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, SlackdownError::Io(_))
    }

    /// Returns `true` if this error came from fetching data from Slack,
    /// either at the transport level or as an `ok: false` reply.
    pub fn is_fetch(&self) -> bool {
        matches!(self, SlackdownError::Http(_) | SlackdownError::Api { .. })
    }

    /// Returns `true` if this is a rich-text payload decode error.
    pub fn is_decode(&self) -> bool {
        matches!(self, SlackdownError::Decode { .. })
    }

    /// Returns `true` if this is a configuration error.
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            SlackdownError::Config { .. } | SlackdownError::Yaml(_)
        )
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // Display tests
    // =========================================================================

    #[test]
    fn test_io_error_display() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err = SlackdownError::from(io_err);
        let display = err.to_string();
        assert!(display.contains("IO error"));
        assert!(display.contains("file not found"));
    }

    #[test]
    fn test_api_error_display() {
        let err = SlackdownError::api("conversations.history", "invalid_auth");
        let display = err.to_string();
        assert!(display.contains("conversations.history"));
        assert!(display.contains("invalid_auth"));
    }

    #[test]
    fn test_decode_error_display() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid").unwrap_err();
        let err = SlackdownError::decode("rich_text_list", json_err);
        let display = err.to_string();
        assert!(display.contains("rich_text_list"));
    }

    #[test]
    fn test_config_error_display() {
        let err = SlackdownError::config("missing field: output");
        let display = err.to_string();
        assert!(display.contains("Invalid configuration"));
        assert!(display.contains("missing field: output"));
    }

    #[test]
    fn test_yaml_error_display() {
        let yaml_err = serde_yaml::from_str::<serde_yaml::Value>("{unbalanced").unwrap_err();
        let err = SlackdownError::from(yaml_err);
        assert!(err.to_string().contains("YAML error"));
    }

    // =========================================================================
    // Error source chain tests
    // =========================================================================

    #[test]
    fn test_error_source_chain() {
        use std::error::Error;
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let err = SlackdownError::from(io_err);
        assert!(err.source().is_some());
    }

    #[test]
    fn test_decode_error_source() {
        use std::error::Error;
        let json_err = serde_json::from_str::<serde_json::Value>("nope").unwrap_err();
        let err = SlackdownError::decode("rich_text_quote", json_err);
        assert!(err.source().is_some());
    }

    // =========================================================================
    // is_* methods tests
    // =========================================================================

    #[test]
    fn test_is_methods() {
        let io_err = SlackdownError::Io(io::Error::new(io::ErrorKind::NotFound, ""));
        assert!(io_err.is_io());
        assert!(!io_err.is_fetch());
        assert!(!io_err.is_decode());
        assert!(!io_err.is_config());

        let api_err = SlackdownError::api("conversations.list", "ratelimited");
        assert!(api_err.is_fetch());
        assert!(!api_err.is_io());

        let config_err = SlackdownError::config("bad");
        assert!(config_err.is_config());
        assert!(!config_err.is_fetch());
    }

    #[test]
    fn test_is_decode() {
        let json_err = serde_json::from_str::<serde_json::Value>("x").unwrap_err();
        let err = SlackdownError::decode("rich_text_preformatted", json_err);
        assert!(err.is_decode());
        assert!(!err.is_fetch());
    }

    // =========================================================================
    // Debug trait test
    // =========================================================================

    #[test]
    fn test_error_debug() {
        let err = SlackdownError::config("bad");
        let debug = format!("{:?}", err);
        assert!(debug.contains("Config"));
    }
}
