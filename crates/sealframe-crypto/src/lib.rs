//! Sealframe Cryptographic Primitives
//!
//! Cryptographic building blocks for the sealframe hybrid codec. Pure
//! functions with deterministic outputs. Callers provide random bytes for
//! deterministic testing.
//!
//! # Key Lifecycle
//!
//! Every message gets its own symmetric key. The key exists only for the
//! duration of one encode call: it seals the payload, is wrapped under the
//! recipient's RSA public key for transport, and is then discarded.
//!
//! ```text
//! CSPRNG
//!    │
//!    ▼
//! PayloadKey (128-bit, per message)
//!    │                      │
//!    ▼                      ▼
//! AES-128-GCM seal    RSA-OAEP-SHA256 wrap
//!    │                      │
//!    ▼                      ▼
//! SealedPayload        wrapped key bytes
//! ```
//!
//! The decoder runs the mirror image: unwrap with the RSA private key,
//! open the payload, discard the key.
//!
//! # Security
//!
//! Confidentiality:
//! - Fresh payload key per message: compromise of one message key exposes
//!   exactly one message
//! - Fresh random nonce per message: identical plaintexts never produce
//!   identical ciphertexts
//!
//! Authenticity:
//! - AES-128-GCM AEAD makes any ciphertext modification fail decryption
//!   structurally instead of yielding garbled plaintext
//!
//! Oracle resistance:
//! - All RSA unwrap failures map to one opaque error kind; padding
//!   rejections are not distinguishable from wrong-key failures
//!
//! Key hygiene:
//! - `PayloadKey` zeroizes on drop, covering success and error paths
//! - Unwrapped key material is held in `Zeroizing` buffers

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod error;
pub mod keys;
pub mod payload;
pub mod wrap;

pub use error::CryptoError;
pub use payload::{
    NONCE_LEN, PAYLOAD_KEY_LEN, PayloadKey, SealedPayload, TAG_LEN, open_payload, seal_payload,
};
pub use rsa::{RsaPrivateKey, RsaPublicKey};
pub use wrap::{MIN_MODULUS_LEN, unwrap_key, wrap_key};
