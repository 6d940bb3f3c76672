//! Message encoding: seal, wrap, stamp, frame.

use rand::{RngCore, rngs::OsRng};
use sealframe_crypto::{NONCE_LEN, PayloadKey, RsaPublicKey, seal_payload, wrap_key};
use sealframe_proto::Envelope;
use tracing::debug;

use crate::{
    clock::{Clock, SystemClock},
    config::CodecConfig,
    error::EncodeError,
};

/// Sender-side encoder producing self-contained framed messages.
///
/// Holds the recipient's RSA public key and configuration; nothing else.
/// Each [`encode`](Self::encode) call is an independent transformation of
/// its inputs plus CSPRNG reads and one clock read, so concurrent encodes
/// (including against the same keypair) need no synchronization.
#[derive(Debug, Clone)]
pub struct Encoder<C: Clock = SystemClock> {
    /// Public key the per-message payload key is wrapped under
    recipient: RsaPublicKey,
    /// Codec configuration (key id is stamped into envelopes)
    config: CodecConfig,
    /// Timestamp source
    clock: C,
}

impl Encoder<SystemClock> {
    /// Create an encoder for the given recipient using the system clock.
    #[must_use]
    pub fn new(recipient: RsaPublicKey, config: CodecConfig) -> Self {
        Self::with_clock(recipient, config, SystemClock)
    }
}

impl<C: Clock> Encoder<C> {
    /// Create an encoder with an explicit clock.
    ///
    /// Production callers want [`Encoder::new`]; this constructor exists
    /// so tests can pin the timestamp.
    #[must_use]
    pub fn with_clock(recipient: RsaPublicKey, config: CodecConfig, clock: C) -> Self {
        Self { recipient, config, clock }
    }

    /// Encode a plaintext into the JSON wire form.
    ///
    /// # Errors
    ///
    /// - `KeyGeneration` if the OS random source fails
    /// - `KeyWrap` if the recipient key rejects the wrap
    /// - `Frame` if the sealed payload exceeds the envelope size cap
    pub fn encode(&self, plaintext: &[u8]) -> Result<String, EncodeError> {
        Ok(self.encode_envelope(plaintext)?.to_json())
    }

    /// Encode a plaintext into an [`Envelope`].
    ///
    /// Single-shot: one fresh payload key and one fresh nonce per call,
    /// no retries, no side effects beyond consuming randomness. The
    /// payload key is zeroized when this call returns, on success and
    /// error paths alike.
    pub fn encode_envelope(&self, plaintext: &[u8]) -> Result<Envelope, EncodeError> {
        let mut rng = OsRng;

        let key = PayloadKey::generate(&mut rng).map_err(|err| {
            debug!(%err, "payload key generation failed");
            EncodeError::KeyGeneration { reason: err.to_string() }
        })?;

        let mut nonce = [0u8; NONCE_LEN];
        rng.try_fill_bytes(&mut nonce).map_err(|err| {
            debug!(%err, "nonce generation failed");
            EncodeError::KeyGeneration { reason: err.to_string() }
        })?;

        let sealed = seal_payload(plaintext, &key, nonce);

        let wrapped = wrap_key(&key, &self.recipient, &mut rng).map_err(|err| {
            debug!(%err, "key wrap rejected");
            EncodeError::KeyWrap { reason: err.to_string() }
        })?;

        let timestamp = self.clock.now();

        Ok(Envelope::new(&sealed.to_bytes(), &wrapped, timestamp, self.config.key_id.clone())?)
    }
}
