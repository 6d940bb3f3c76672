//! Error types for sealframe cryptographic operations

use thiserror::Error;

/// Errors from sealframe cryptographic primitives.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CryptoError {
    /// The platform's secure random source failed or is unavailable
    #[error("random source unavailable: {reason}")]
    RandomSource {
        /// Failure reported by the random source
        reason: String,
    },

    /// RSA key generation failed
    #[error("key generation failed: {reason}")]
    KeyGeneration {
        /// Failure reported by the RSA backend
        reason: String,
    },

    /// Key wrapping rejected the public key or key material
    #[error("key wrap failed: {reason}")]
    KeyWrap {
        /// Why the wrap was rejected
        reason: String,
    },

    /// Key unwrap failed (wrong private key, padding rejection, or
    /// corrupted material)
    ///
    /// Carries no detail on purpose: distinguishable unwrap failures are a
    /// padding-oracle vector.
    #[error("key unwrap failed")]
    KeyUnwrap,

    /// Payload decryption failed (authentication tag mismatch or corrupted
    /// ciphertext)
    #[error("payload decryption failed")]
    PayloadDecrypt,

    /// Sealed payload blob is shorter than nonce + tag
    #[error("sealed payload truncated: {len} bytes, minimum {min}")]
    TruncatedPayload {
        /// Actual blob length
        len: usize,
        /// Minimum valid length
        min: usize,
    },

    /// Key material has the wrong length
    #[error("invalid key length: expected {expected}, got {actual}")]
    InvalidKeyLength {
        /// Expected key length in bytes
        expected: usize,
        /// Actual key length in bytes
        actual: usize,
    },

    /// PEM key encoding could not be parsed
    #[error("invalid key encoding: {reason}")]
    KeyEncoding {
        /// Underlying parse failure
        reason: String,
    },
}
