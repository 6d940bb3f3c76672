//! Sealframe wire format
//!
//! The envelope layer of the sealframe codec. Sealed messages travel as a
//! canonical JSON object with base64 binary fields and an RFC 3339
//! timestamp, plus a version tag so cipher or padding upgrades can coexist
//! on one channel.
//!
//! We chose JSON over a binary frame because envelopes ride inside
//! HTTP-style transports where text-safe payloads are the norm; base64
//! keeps the ciphertext and wrapped key opaque. Parsing is
//! validation-first: version gate and field structure are checked before
//! any payload bytes are decoded, so malformed input is rejected before
//! asymmetric crypto work is spent on it.
//!
//! # Invariants
//!
//! - `data`, `key`, and `timestamp` are mandatory; `version` must match
//!   the supported version; `kid` is optional routing metadata.
//! - Round-trip encoding must produce identical envelopes.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod envelope;
pub mod errors;

pub use envelope::Envelope;
pub use errors::{ProtocolError, Result};
