//! Payload sealing with AES-128-GCM
//!
//! Pure functions - the per-message nonce must be provided by the caller.
//! This keeps encoding deterministic given the random draw and enables
//! deterministic testing.

use aes_gcm::{
    Aes128Gcm, Nonce,
    aead::{Aead, KeyInit},
};
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

use crate::error::CryptoError;

/// Payload key length in bytes (128-bit)
pub const PAYLOAD_KEY_LEN: usize = 16;

/// AES-GCM nonce length in bytes (96-bit)
pub const NONCE_LEN: usize = 12;

/// AES-GCM authentication tag length in bytes
pub const TAG_LEN: usize = 16;

/// A fresh symmetric key protecting exactly one payload.
///
/// Generated from a CSPRNG at encode time, wrapped under the recipient's
/// RSA key for transport, and discarded once the call completes. Key
/// material is zeroized on drop, so it is cleared on every exit path
/// including error paths.
#[derive(Clone, PartialEq, Eq)]
pub struct PayloadKey {
    /// The 16-byte symmetric key for AES-128-GCM
    key: [u8; PAYLOAD_KEY_LEN],
}

impl core::fmt::Debug for PayloadKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PayloadKey").field("key", &"<redacted>").finish()
    }
}

impl PayloadKey {
    /// Generate a fresh key from the provided CSPRNG.
    ///
    /// # Errors
    ///
    /// - `RandomSource` if the random source cannot produce bytes
    pub fn generate<R: CryptoRng + RngCore>(rng: &mut R) -> Result<Self, CryptoError> {
        let mut key = [0u8; PAYLOAD_KEY_LEN];
        rng.try_fill_bytes(&mut key)
            .map_err(|err| CryptoError::RandomSource { reason: err.to_string() })?;
        Ok(Self { key })
    }

    /// Reconstruct a key from raw bytes (e.g. after unwrapping).
    ///
    /// # Errors
    ///
    /// - `InvalidKeyLength` if `bytes` is not exactly 16 bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CryptoError> {
        let key: [u8; PAYLOAD_KEY_LEN] =
            bytes.try_into().map_err(|_| CryptoError::InvalidKeyLength {
                expected: PAYLOAD_KEY_LEN,
                actual: bytes.len(),
            })?;
        Ok(Self { key })
    }

    /// Raw key bytes.
    pub fn as_bytes(&self) -> &[u8; PAYLOAD_KEY_LEN] {
        &self.key
    }
}

// Implement Drop to zeroize key material
impl Drop for PayloadKey {
    fn drop(&mut self) {
        self.key.zeroize();
    }
}

/// An encrypted payload with the nonce needed to open it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SealedPayload {
    /// The 12-byte AES-GCM nonce, fresh per message
    pub nonce: [u8; NONCE_LEN],
    /// The ciphertext including the 16-byte authentication tag
    pub ciphertext: Vec<u8>,
}

impl SealedPayload {
    /// Minimum valid blob length (nonce + tag, empty plaintext).
    pub const MIN_LEN: usize = NONCE_LEN + TAG_LEN;

    /// Plaintext length (ciphertext length minus authentication tag).
    pub fn plaintext_len(&self) -> usize {
        self.ciphertext.len().saturating_sub(TAG_LEN)
    }

    /// Serialize as `[nonce:12][ciphertext][tag:16]`.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(NONCE_LEN + self.ciphertext.len());
        out.extend_from_slice(&self.nonce);
        out.extend_from_slice(&self.ciphertext);
        out
    }

    /// Parse a `[nonce:12][ciphertext][tag:16]` blob.
    ///
    /// # Errors
    ///
    /// - `TruncatedPayload` if the blob is shorter than nonce + tag
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CryptoError> {
        if bytes.len() < Self::MIN_LEN {
            return Err(CryptoError::TruncatedPayload { len: bytes.len(), min: Self::MIN_LEN });
        }

        let mut nonce = [0u8; NONCE_LEN];
        nonce.copy_from_slice(&bytes[..NONCE_LEN]);

        Ok(Self { nonce, ciphertext: bytes[NONCE_LEN..].to_vec() })
    }
}

/// Encrypt a payload using AES-128-GCM.
///
/// The nonce MUST be freshly drawn from a CSPRNG for every message:
/// sealing identical plaintexts under the same key must never produce
/// identical ciphertexts.
pub fn seal_payload(
    plaintext: &[u8],
    key: &PayloadKey,
    nonce: [u8; NONCE_LEN],
) -> SealedPayload {
    let cipher = Aes128Gcm::new(key.as_bytes().into());

    let Ok(ciphertext) = cipher.encrypt(Nonce::from_slice(&nonce), plaintext) else {
        unreachable!("AES-128-GCM encryption cannot fail with valid inputs");
    };

    SealedPayload { nonce, ciphertext }
}

/// Decrypt a sealed payload.
///
/// # Errors
///
/// - `PayloadDecrypt` if the authentication tag or key is incorrect
///   (tamper)
pub fn open_payload(sealed: &SealedPayload, key: &PayloadKey) -> Result<Vec<u8>, CryptoError> {
    let cipher = Aes128Gcm::new(key.as_bytes().into());

    cipher
        .decrypt(Nonce::from_slice(&sealed.nonce), sealed.ciphertext.as_slice())
        .map_err(|_| CryptoError::PayloadDecrypt)
}
