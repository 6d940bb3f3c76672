//! Error types for the sealframe codec
//!
//! Every failure is terminal for that message: the codec never retries
//! internally, because a cryptographic failure is not transient. Retries
//! belong to the transport or the caller.

use sealframe_proto::ProtocolError;
use thiserror::Error;

/// Errors that can occur while encoding a message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// The OS random source could not produce key or nonce material
    #[error("key generation failed: {reason}")]
    KeyGeneration {
        /// Failure reported by the random source
        reason: String,
    },

    /// The recipient public key rejected the wrap (malformed key or
    /// undersized modulus)
    #[error("key wrap failed: {reason}")]
    KeyWrap {
        /// Why the wrap was rejected
        reason: String,
    },

    /// The sealed payload could not be framed (oversized payload)
    #[error("framing failed: {0}")]
    Frame(#[from] ProtocolError),
}

/// Errors that can occur while decoding a message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Wire format violation: bad JSON, missing field, unknown version,
    /// invalid base64, or truncated payload blob
    #[error("malformed message: {0}")]
    Malformed(#[from] ProtocolError),

    /// RSA unwrap failed: wrong private key, padding rejection, or
    /// corrupted key material
    ///
    /// Carries no detail on purpose; see [`DecodeError::is_decrypt_failure`].
    #[error("key unwrap failed")]
    KeyUnwrap,

    /// Symmetric decryption failed (authentication tag mismatch or
    /// corrupted ciphertext)
    #[error("payload decryption failed")]
    PayloadDecrypt,

    /// Message is older than the configured freshness window
    #[error("stale message: {age_secs}s old exceeds freshness window of {window_secs}s")]
    Stale {
        /// Message age at decode time, in seconds
        age_secs: i64,
        /// Configured freshness window, in seconds
        window_secs: i64,
    },

    /// Message timestamp runs ahead of the local clock beyond the
    /// configured skew tolerance
    #[error("future-dated message: {ahead_secs}s ahead of local clock (tolerance {tolerance_secs}s)")]
    FutureDated {
        /// How far ahead of the local clock the timestamp is, in seconds
        ahead_secs: i64,
        /// Configured skew tolerance, in seconds
        tolerance_secs: i64,
    },
}

impl DecodeError {
    /// Returns true if this failure must be reported generically to peers.
    ///
    /// `KeyUnwrap` and `PayloadDecrypt` are kept indistinguishable from a
    /// peer's perspective: revealing which stage rejected a message is
    /// oracle exposure. Callers should log the precise kind internally and
    /// tell the peer only that decryption failed.
    pub fn is_decrypt_failure(&self) -> bool {
        matches!(self, Self::KeyUnwrap | Self::PayloadDecrypt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decrypt_failures_are_generic() {
        assert!(DecodeError::KeyUnwrap.is_decrypt_failure());
        assert!(DecodeError::PayloadDecrypt.is_decrypt_failure());
    }

    #[test]
    fn structural_and_freshness_failures_are_not() {
        assert!(
            !DecodeError::Malformed(ProtocolError::UnsupportedVersion(9)).is_decrypt_failure()
        );
        assert!(!DecodeError::Stale { age_secs: 61, window_secs: 60 }.is_decrypt_failure());
        assert!(
            !DecodeError::FutureDated { ahead_secs: 45, tolerance_secs: 30 }.is_decrypt_failure()
        );
    }
}
