//! Error types for envelope parsing and validation
//!
//! Every variant is a structural wire-format violation: the message can be
//! rejected before any asymmetric crypto work is spent on it.

use thiserror::Error;

/// Result alias for envelope operations.
pub type Result<T> = std::result::Result<T, ProtocolError>;

/// Errors from envelope serialization and validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProtocolError {
    /// The message is not a valid envelope JSON object (missing field,
    /// wrong type, syntax error)
    #[error("invalid message structure: {reason}")]
    Json {
        /// Underlying parse failure
        reason: String,
    },

    /// Envelope carries a version this implementation does not speak
    #[error("unsupported envelope version: {0}")]
    UnsupportedVersion(u8),

    /// A binary-as-text field does not decode as base64
    #[error("invalid base64 in {field} field: {reason}")]
    InvalidEncoding {
        /// Which envelope field was rejected
        field: &'static str,
        /// Underlying decode failure
        reason: String,
    },

    /// Payload exceeds the maximum size
    #[error("payload too large: {size} bytes exceeds {max}")]
    PayloadTooLarge {
        /// Actual payload size
        size: usize,
        /// Maximum allowed size
        max: usize,
    },

    /// Decoded payload blob is too short to hold a nonce and tag
    #[error("sealed payload truncated: {len} bytes, minimum {min}")]
    TruncatedPayload {
        /// Actual blob length
        len: usize,
        /// Minimum valid length
        min: usize,
    },
}

impl From<serde_json::Error> for ProtocolError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json { reason: err.to_string() }
    }
}
