//! Envelope type carrying one sealed message.
//!
//! An `Envelope` is the wire entity: a canonical JSON object with the
//! sealed payload, the RSA-wrapped payload key, and the encode-time
//! timestamp. Binary fields travel as base64 text.
//!
//! This is a pure data holder plus structural validation. It never touches
//! key material; sealing and unwrapping happen in `sealframe-crypto`.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{ProtocolError, Result};

/// Complete wire envelope for one message.
///
/// Layout on the wire (canonical JSON, field order fixed by declaration
/// order):
///
/// ```json
/// {
///   "version": 1,
///   "kid": "optional key identifier",
///   "data": "<base64 [nonce:12][ciphertext][tag:16]>",
///   "key": "<base64 RSA-wrapped payload key>",
///   "timestamp": "2026-08-06T12:00:00Z"
/// }
/// ```
///
/// # Invariants
///
/// - Version Gate: [`Envelope::from_json`] rejects any version other than
///   [`Envelope::VERSION`], so future algorithm upgrades can change the
///   frame without ambiguity.
///
/// - Size Limit: the decoded `data` blob MUST NOT exceed
///   [`Envelope::MAX_PAYLOAD_LEN`]. Violations are rejected at
///   construction and again when decoding untrusted input.
///
/// - Mandatory Fields: `data`, `key`, and `timestamp` are required;
///   a missing field fails deserialization.
///
/// # Security
///
/// Provides structural validity only. Guarantees parseable base64 and a
/// valid RFC 3339 timestamp, NOT authenticity: the timestamp and `kid`
/// travel cleartext and are not covered by the authentication tag. An
/// envelope is meaningful only relative to one RSA keypair; `kid` is
/// advisory routing metadata for callers holding several private keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    /// Envelope format version. Currently always [`Envelope::VERSION`].
    pub version: u8,

    /// Optional identifier of the wrapping public key.
    ///
    /// Lets a receiver holding several private keys pick the right one
    /// without trial decryption. Omitted from the JSON when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kid: Option<String>,

    /// Base64 of the sealed payload blob `[nonce:12][ciphertext][tag:16]`.
    pub data: String,

    /// Base64 of the RSA-OAEP-wrapped payload key.
    pub key: String,

    /// Encode-time UTC timestamp (RFC 3339).
    pub timestamp: DateTime<Utc>,
}

impl Envelope {
    /// Current envelope format version.
    pub const VERSION: u8 = 1;

    /// Maximum sealed payload size (16 MB).
    pub const MAX_PAYLOAD_LEN: usize = 16 * 1024 * 1024;

    /// Assemble an envelope from a sealed payload blob and a wrapped key.
    ///
    /// # Errors
    ///
    /// - `PayloadTooLarge` if the blob exceeds [`Self::MAX_PAYLOAD_LEN`]
    pub fn new(
        data: &[u8],
        wrapped_key: &[u8],
        timestamp: DateTime<Utc>,
        kid: Option<String>,
    ) -> Result<Self> {
        if data.len() > Self::MAX_PAYLOAD_LEN {
            return Err(ProtocolError::PayloadTooLarge {
                size: data.len(),
                max: Self::MAX_PAYLOAD_LEN,
            });
        }

        Ok(Self {
            version: Self::VERSION,
            kid,
            data: STANDARD.encode(data),
            key: STANDARD.encode(wrapped_key),
            timestamp,
        })
    }

    /// Serialize to the canonical JSON wire form.
    #[must_use]
    pub fn to_json(&self) -> String {
        match serde_json::to_string(self) {
            Ok(json) => json,
            // Strings, an u8, and a DateTime cannot fail to serialize
            Err(_) => unreachable!("envelope serialization cannot fail"),
        }
    }

    /// Parse and validate an envelope from its JSON wire form.
    ///
    /// Validation is structural only: JSON shape, mandatory fields, and
    /// the version gate. Base64 payloads are decoded lazily by
    /// [`Self::data_bytes`] / [`Self::key_bytes`] so garbage can be
    /// rejected without allocating for its payload.
    ///
    /// # Errors
    ///
    /// - `Json` if the input is not a valid envelope object
    /// - `UnsupportedVersion` if the version tag is not
    ///   [`Self::VERSION`]
    pub fn from_json(json: &str) -> Result<Self> {
        let envelope: Self = serde_json::from_str(json)?;

        if envelope.version != Self::VERSION {
            return Err(ProtocolError::UnsupportedVersion(envelope.version));
        }

        Ok(envelope)
    }

    /// Decode the sealed payload blob.
    ///
    /// # Errors
    ///
    /// - `InvalidEncoding` if `data` is not valid base64
    /// - `PayloadTooLarge` if the decoded blob exceeds
    ///   [`Self::MAX_PAYLOAD_LEN`]
    pub fn data_bytes(&self) -> Result<Vec<u8>> {
        let bytes = STANDARD.decode(&self.data).map_err(|err| ProtocolError::InvalidEncoding {
            field: "data",
            reason: err.to_string(),
        })?;

        if bytes.len() > Self::MAX_PAYLOAD_LEN {
            return Err(ProtocolError::PayloadTooLarge {
                size: bytes.len(),
                max: Self::MAX_PAYLOAD_LEN,
            });
        }

        Ok(bytes)
    }

    /// Decode the wrapped payload key.
    ///
    /// # Errors
    ///
    /// - `InvalidEncoding` if `key` is not valid base64
    pub fn key_bytes(&self) -> Result<Vec<u8>> {
        STANDARD.decode(&self.key).map_err(|err| ProtocolError::InvalidEncoding {
            field: "key",
            reason: err.to_string(),
        })
    }
}
