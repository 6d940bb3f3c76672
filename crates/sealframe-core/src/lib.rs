//! Sealframe Hybrid Codec
//!
//! Packages an asymmetric key-exchange step (RSA-OAEP) with a symmetric
//! payload cipher (AES-128-GCM) and a freshness check, so two endpoints
//! that share only an RSA keypair can exchange confidential,
//! tamper-evident, replay-bounded messages over an untrusted channel.
//!
//! # Message Lifecycle
//!
//! ```text
//! Encoder (sender side)                Decoder (receiver side)
//!
//! plaintext                            JSON envelope
//!    │                                    │
//!    ▼                                    ▼
//! fresh 128-bit PayloadKey             parse + validate (version, base64)
//!    │                                    │
//!    ▼                                    ▼
//! AES-128-GCM seal (fresh nonce)       RSA-OAEP unwrap payload key
//!    │                                    │
//!    ▼                                    ▼
//! RSA-OAEP wrap under recipient key    AES-128-GCM open payload
//!    │                                    │
//!    ▼                                    ▼
//! timestamp + JSON envelope            freshness window check
//!                                         │
//!                                         ▼
//!                                      plaintext
//! ```
//!
//! Both halves are stateless transformations over their inputs plus a
//! CSPRNG and a clock; no call blocks, suspends, or holds a lock, so
//! encodes and decodes may run fully in parallel, including against the
//! same keypair.
//!
//! # Security
//!
//! - Fresh payload key and nonce per message: identical plaintexts never
//!   produce identical ciphertexts, and compromising one message key
//!   exposes exactly one message.
//! - AEAD integrity: any bit flip in the ciphertext fails decoding with
//!   [`DecodeError::PayloadDecrypt`] instead of yielding garbled
//!   plaintext.
//! - Oracle resistance: all key-unwrap failures surface as one opaque
//!   [`DecodeError::KeyUnwrap`]; use
//!   [`DecodeError::is_decrypt_failure`] to report decrypt failures
//!   generically to peers.
//! - Freshness bounds replay, it does not prevent it: within the window,
//!   deduplication needs an external message-id store.
//! - Key hygiene: per-message key material is zeroized on every exit
//!   path.
//!
//! The codec assumes the transport provides channel security (TLS) as
//! defense in depth, not as a substitute for these guarantees.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod clock;
pub mod config;
pub mod decoder;
pub mod encoder;
pub mod error;

pub use clock::{Clock, SystemClock};
pub use config::CodecConfig;
pub use decoder::Decoder;
pub use encoder::Encoder;
pub use error::{DecodeError, EncodeError};
pub use sealframe_crypto::{RsaPrivateKey, RsaPublicKey, keys};
pub use sealframe_proto::{Envelope, ProtocolError};
