//! Message decoding: parse, unwrap, open, freshness.
//!
//! The pipeline is linear with no backtracking: parsing before key unwrap
//! before payload decrypt before the freshness check. Each stage's output
//! is required input for the next, and failing fast keeps asymmetric
//! crypto work off malformed input.

use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use sealframe_crypto::{RsaPrivateKey, SealedPayload, open_payload, unwrap_key};
use sealframe_proto::{Envelope, ProtocolError};
use tracing::debug;

use crate::{
    clock::{Clock, SystemClock},
    config::CodecConfig,
    error::DecodeError,
};

/// Receiver-side decoder recovering plaintext from framed messages.
///
/// An envelope carries no binding to a specific keypair beyond the
/// advisory `kid` field, so the caller must already hold the matching
/// private key; a mismatch surfaces as [`DecodeError::KeyUnwrap`].
///
/// Like the encoder, the decoder is immutable after construction: every
/// [`decode`](Self::decode) call is independent and may run concurrently
/// with any other call on the same keypair.
// No Debug impl: the private key must not reach logs.
#[derive(Clone)]
pub struct Decoder<C: Clock = SystemClock> {
    /// Private key matching the public key messages were encoded for
    private_key: RsaPrivateKey,
    /// Codec configuration (freshness window, skew tolerance)
    config: CodecConfig,
    /// Time source for the freshness check
    clock: C,
}

impl Decoder<SystemClock> {
    /// Create a decoder using the system clock.
    #[must_use]
    pub fn new(private_key: RsaPrivateKey, config: CodecConfig) -> Self {
        Self::with_clock(private_key, config, SystemClock)
    }
}

impl<C: Clock> Decoder<C> {
    /// Create a decoder with an explicit clock.
    ///
    /// Production callers want [`Decoder::new`]; this constructor exists
    /// so tests can pin the freshness comparison instant.
    #[must_use]
    pub fn with_clock(private_key: RsaPrivateKey, config: CodecConfig, clock: C) -> Self {
        Self { private_key, config, clock }
    }

    /// Decode a JSON wire message into plaintext.
    ///
    /// # Errors
    ///
    /// - `Malformed` on any wire format violation
    /// - `KeyUnwrap` if the private key does not match or the wrapped key
    ///   is corrupted
    /// - `PayloadDecrypt` if the ciphertext fails authentication
    /// - `Stale` / `FutureDated` if a freshness window is configured and
    ///   the timestamp falls outside it
    pub fn decode(&self, json: &str) -> Result<Vec<u8>, DecodeError> {
        let envelope = Envelope::from_json(json)?;
        self.decode_envelope(&envelope)
    }

    /// Decode an already-parsed envelope into plaintext.
    pub fn decode_envelope(&self, envelope: &Envelope) -> Result<Vec<u8>, DecodeError> {
        // Structural validation first: reject garbage before spending RSA
        // work on it.
        let wrapped = envelope.key_bytes()?;
        let blob = envelope.data_bytes()?;

        let sealed = SealedPayload::from_bytes(&blob).map_err(|_| {
            DecodeError::Malformed(ProtocolError::TruncatedPayload {
                len: blob.len(),
                min: SealedPayload::MIN_LEN,
            })
        })?;

        // All unwrap failures are reported identically; the precise kind
        // goes to the log only.
        let key = unwrap_key(&wrapped, &self.private_key).map_err(|err| {
            debug!(%err, "key unwrap rejected");
            DecodeError::KeyUnwrap
        })?;

        let plaintext = open_payload(&sealed, &key).map_err(|err| {
            debug!(%err, "payload rejected");
            DecodeError::PayloadDecrypt
        })?;

        self.check_freshness(envelope.timestamp)?;

        Ok(plaintext)
    }

    /// Enforce the freshness window, when one is configured.
    ///
    /// Age equal to the window passes; only an age that *exceeds* it is
    /// stale. Timestamps ahead of the local clock are tolerated up to the
    /// configured skew and rejected beyond it.
    fn check_freshness(&self, timestamp: DateTime<Utc>) -> Result<(), DecodeError> {
        let Some(window) = self.config.freshness_window else {
            return Ok(());
        };

        let age = self.clock.now().signed_duration_since(timestamp);

        if age > to_delta(window) {
            return Err(DecodeError::Stale {
                age_secs: age.num_seconds(),
                window_secs: window.as_secs() as i64,
            });
        }

        let tolerance = self.config.clock_skew_tolerance;
        if age < -to_delta(tolerance) {
            return Err(DecodeError::FutureDated {
                ahead_secs: (-age).num_seconds(),
                tolerance_secs: tolerance.as_secs() as i64,
            });
        }

        Ok(())
    }
}

/// Convert a std duration to a chrono delta, saturating at the maximum
/// representable value.
fn to_delta(duration: Duration) -> TimeDelta {
    TimeDelta::from_std(duration).unwrap_or(TimeDelta::MAX)
}

#[cfg(test)]
mod tests {
    use std::sync::OnceLock;

    use chrono::TimeZone;
    use rand::rngs::OsRng;
    use sealframe_crypto::keys;

    use super::*;

    #[derive(Clone)]
    struct FixedClock(DateTime<Utc>);

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    fn test_private_key() -> &'static RsaPrivateKey {
        static KEY: OnceLock<RsaPrivateKey> = OnceLock::new();
        KEY.get_or_init(|| keys::generate_keypair(&mut OsRng, 1024).unwrap().0)
    }

    fn decoder_at(now: DateTime<Utc>, window_secs: u64) -> Decoder<FixedClock> {
        Decoder::with_clock(
            test_private_key().clone(),
            CodecConfig::with_freshness_window(Duration::from_secs(window_secs)),
            FixedClock(now),
        )
    }

    fn base_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 6, 12, 0, 0).unwrap()
    }

    #[test]
    fn no_window_accepts_any_age() {
        let decoder = Decoder::with_clock(
            test_private_key().clone(),
            CodecConfig::default(),
            FixedClock(base_time()),
        );

        let ancient = base_time() - TimeDelta::days(365);
        assert_eq!(decoder.check_freshness(ancient), Ok(()));
    }

    #[test]
    fn age_within_window_accepted() {
        let decoder = decoder_at(base_time(), 60);
        let timestamp = base_time() - TimeDelta::seconds(59);

        assert_eq!(decoder.check_freshness(timestamp), Ok(()));
    }

    #[test]
    fn age_exactly_at_window_accepted() {
        let decoder = decoder_at(base_time(), 60);
        let timestamp = base_time() - TimeDelta::seconds(60);

        assert_eq!(decoder.check_freshness(timestamp), Ok(()));
    }

    #[test]
    fn age_beyond_window_is_stale() {
        let decoder = decoder_at(base_time(), 60);
        let timestamp = base_time() - TimeDelta::seconds(61);

        assert_eq!(
            decoder.check_freshness(timestamp),
            Err(DecodeError::Stale { age_secs: 61, window_secs: 60 })
        );
    }

    #[test]
    fn small_future_skew_tolerated() {
        let decoder = decoder_at(base_time(), 60);
        let timestamp = base_time() + TimeDelta::seconds(10);

        assert_eq!(decoder.check_freshness(timestamp), Ok(()));
    }

    #[test]
    fn far_future_timestamp_rejected() {
        let decoder = decoder_at(base_time(), 60);
        let timestamp = base_time() + TimeDelta::seconds(31);

        assert_eq!(
            decoder.check_freshness(timestamp),
            Err(DecodeError::FutureDated { ahead_secs: 31, tolerance_secs: 30 })
        );
    }
}
