//! RSA-OAEP key wrapping
//!
//! The payload key is encrypted under the recipient's RSA public key with
//! OAEP-SHA256 padding. Unwrap failures collapse into a single opaque
//! error kind: reporting why an RSA decrypt was rejected is a
//! padding-oracle vector.

use rand::{CryptoRng, RngCore};
use rsa::{Oaep, RsaPrivateKey, RsaPublicKey, traits::PublicKeyParts};
use sha2::Sha256;
use zeroize::Zeroizing;

use crate::{
    error::CryptoError,
    payload::{PAYLOAD_KEY_LEN, PayloadKey},
};

/// OAEP-SHA256 padding overhead in bytes (2 * hash length + 2).
const OAEP_OVERHEAD: usize = 2 * 32 + 2;

/// Smallest RSA modulus (in bytes) able to wrap a payload key under
/// OAEP-SHA256.
pub const MIN_MODULUS_LEN: usize = PAYLOAD_KEY_LEN + OAEP_OVERHEAD;

/// Wrap a payload key under the recipient's RSA public key.
///
/// The wrapped key is exactly one RSA block (the modulus size). OAEP is
/// randomized, so wrapping the same key twice produces different output.
///
/// # Errors
///
/// - `KeyWrap` if the modulus is too small for OAEP-SHA256 or the RSA
///   backend rejects the operation
pub fn wrap_key<R: CryptoRng + RngCore>(
    key: &PayloadKey,
    recipient: &RsaPublicKey,
    rng: &mut R,
) -> Result<Vec<u8>, CryptoError> {
    if recipient.size() < MIN_MODULUS_LEN {
        return Err(CryptoError::KeyWrap {
            reason: format!(
                "modulus of {} bytes cannot carry a {PAYLOAD_KEY_LEN}-byte key under \
                 OAEP-SHA256 (minimum {MIN_MODULUS_LEN})",
                recipient.size()
            ),
        });
    }

    recipient
        .encrypt(rng, Oaep::new::<Sha256>(), key.as_bytes())
        .map_err(|err| CryptoError::KeyWrap { reason: err.to_string() })
}

/// Unwrap a payload key with the recipient's RSA private key.
///
/// The intermediate plaintext is zeroized before this function returns.
///
/// # Errors
///
/// - `KeyUnwrap` on any failure: wrong private key, padding rejection, or
///   unwrapped material of the wrong length. The causes are deliberately
///   indistinguishable to the caller.
pub fn unwrap_key(wrapped: &[u8], private_key: &RsaPrivateKey) -> Result<PayloadKey, CryptoError> {
    let unwrapped = Zeroizing::new(
        private_key.decrypt(Oaep::new::<Sha256>(), wrapped).map_err(|_| CryptoError::KeyUnwrap)?,
    );

    PayloadKey::from_bytes(&unwrapped).map_err(|_| CryptoError::KeyUnwrap)
}

#[cfg(test)]
mod tests {
    use std::sync::OnceLock;

    use rand::rngs::OsRng;

    use super::*;

    fn test_keypair() -> &'static (RsaPrivateKey, RsaPublicKey) {
        static KEYPAIR: OnceLock<(RsaPrivateKey, RsaPublicKey)> = OnceLock::new();
        KEYPAIR.get_or_init(|| {
            let private = RsaPrivateKey::new(&mut OsRng, 2048).unwrap();
            let public = RsaPublicKey::from(&private);
            (private, public)
        })
    }

    fn other_keypair() -> &'static (RsaPrivateKey, RsaPublicKey) {
        static KEYPAIR: OnceLock<(RsaPrivateKey, RsaPublicKey)> = OnceLock::new();
        KEYPAIR.get_or_init(|| {
            let private = RsaPrivateKey::new(&mut OsRng, 2048).unwrap();
            let public = RsaPublicKey::from(&private);
            (private, public)
        })
    }

    #[test]
    fn wrap_unwrap_roundtrip() {
        let (private, public) = test_keypair();
        let key = PayloadKey::generate(&mut OsRng).unwrap();

        let wrapped = wrap_key(&key, public, &mut OsRng).unwrap();
        let unwrapped = unwrap_key(&wrapped, private).unwrap();

        assert_eq!(unwrapped.as_bytes(), key.as_bytes());
    }

    #[test]
    fn wrapped_key_is_one_rsa_block() {
        let (_, public) = test_keypair();
        let key = PayloadKey::generate(&mut OsRng).unwrap();

        let wrapped = wrap_key(&key, public, &mut OsRng).unwrap();

        assert_eq!(wrapped.len(), public.size());
    }

    #[test]
    fn wrap_is_randomized() {
        let (_, public) = test_keypair();
        let key = PayloadKey::generate(&mut OsRng).unwrap();

        let wrapped1 = wrap_key(&key, public, &mut OsRng).unwrap();
        let wrapped2 = wrap_key(&key, public, &mut OsRng).unwrap();

        // OAEP draws fresh padding randomness per wrap
        assert_ne!(wrapped1, wrapped2);
    }

    #[test]
    fn wrong_private_key_fails_unwrap() {
        let (_, public) = test_keypair();
        let (wrong_private, _) = other_keypair();
        let key = PayloadKey::generate(&mut OsRng).unwrap();

        let wrapped = wrap_key(&key, public, &mut OsRng).unwrap();
        let result = unwrap_key(&wrapped, wrong_private);

        assert_eq!(result.err(), Some(CryptoError::KeyUnwrap));
    }

    #[test]
    fn tampered_wrapped_key_fails_unwrap() {
        let (private, public) = test_keypair();
        let key = PayloadKey::generate(&mut OsRng).unwrap();

        let mut wrapped = wrap_key(&key, public, &mut OsRng).unwrap();
        wrapped[0] ^= 0xFF;

        let result = unwrap_key(&wrapped, private);
        assert_eq!(result.err(), Some(CryptoError::KeyUnwrap));
    }

    #[test]
    fn unwrap_failures_are_indistinguishable() {
        let (private, public) = test_keypair();
        let (wrong_private, _) = other_keypair();
        let key = PayloadKey::generate(&mut OsRng).unwrap();

        let wrapped = wrap_key(&key, public, &mut OsRng).unwrap();

        let mut tampered = wrapped.clone();
        tampered[10] ^= 0x01;

        let wrong_key_err = unwrap_key(&wrapped, wrong_private).err();
        let tampered_err = unwrap_key(&tampered, private).err();

        assert_eq!(wrong_key_err, tampered_err);
        assert_eq!(wrong_key_err, Some(CryptoError::KeyUnwrap));
    }

    #[test]
    fn undersized_modulus_rejected() {
        // 512-bit modulus is 64 bytes, below the 82-byte OAEP-SHA256 floor
        let private = RsaPrivateKey::new(&mut OsRng, 512).unwrap();
        let public = RsaPublicKey::from(&private);
        let key = PayloadKey::generate(&mut OsRng).unwrap();

        let result = wrap_key(&key, &public, &mut OsRng);
        assert!(matches!(result, Err(CryptoError::KeyWrap { .. })));
    }
}
