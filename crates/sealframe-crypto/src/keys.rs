//! RSA keypair helpers for codec collaborators
//!
//! The codec never stores keys; generation, storage, and rotation belong
//! to the caller. These helpers cover the exchangeable encoding the codec
//! expects at its boundary: PKCS#8 PEM.

use rand::{CryptoRng, RngCore};
use rsa::{
    RsaPrivateKey, RsaPublicKey,
    pkcs8::{DecodePrivateKey, DecodePublicKey, EncodePrivateKey, EncodePublicKey, LineEnding},
};
use zeroize::Zeroizing;

use crate::error::CryptoError;

/// Default RSA modulus size in bits.
pub const DEFAULT_RSA_BITS: usize = 2048;

/// Generate an RSA keypair.
///
/// # Errors
///
/// - `KeyGeneration` if the RSA backend rejects the requested size or the
///   random source fails
pub fn generate_keypair<R: CryptoRng + RngCore>(
    rng: &mut R,
    bits: usize,
) -> Result<(RsaPrivateKey, RsaPublicKey), CryptoError> {
    let private = RsaPrivateKey::new(rng, bits)
        .map_err(|err| CryptoError::KeyGeneration { reason: err.to_string() })?;
    let public = RsaPublicKey::from(&private);
    Ok((private, public))
}

/// Parse an RSA public key from PKCS#8 PEM.
///
/// # Errors
///
/// - `KeyEncoding` if the PEM document is not a valid RSA public key
pub fn public_key_from_pem(pem: &str) -> Result<RsaPublicKey, CryptoError> {
    RsaPublicKey::from_public_key_pem(pem)
        .map_err(|err| CryptoError::KeyEncoding { reason: err.to_string() })
}

/// Encode an RSA public key as PKCS#8 PEM.
///
/// # Errors
///
/// - `KeyEncoding` if the key cannot be serialized
pub fn public_key_to_pem(key: &RsaPublicKey) -> Result<String, CryptoError> {
    key.to_public_key_pem(LineEnding::LF)
        .map_err(|err| CryptoError::KeyEncoding { reason: err.to_string() })
}

/// Parse an RSA private key from PKCS#8 PEM.
///
/// # Errors
///
/// - `KeyEncoding` if the PEM document is not a valid RSA private key
pub fn private_key_from_pem(pem: &str) -> Result<RsaPrivateKey, CryptoError> {
    RsaPrivateKey::from_pkcs8_pem(pem)
        .map_err(|err| CryptoError::KeyEncoding { reason: err.to_string() })
}

/// Encode an RSA private key as PKCS#8 PEM.
///
/// The returned string is zeroized on drop.
///
/// # Errors
///
/// - `KeyEncoding` if the key cannot be serialized
pub fn private_key_to_pem(key: &RsaPrivateKey) -> Result<Zeroizing<String>, CryptoError> {
    key.to_pkcs8_pem(LineEnding::LF)
        .map_err(|err| CryptoError::KeyEncoding { reason: err.to_string() })
}

#[cfg(test)]
mod tests {
    use std::sync::OnceLock;

    use rand::rngs::OsRng;

    use super::*;

    fn test_keypair() -> &'static (RsaPrivateKey, RsaPublicKey) {
        static KEYPAIR: OnceLock<(RsaPrivateKey, RsaPublicKey)> = OnceLock::new();
        KEYPAIR.get_or_init(|| generate_keypair(&mut OsRng, 1024).unwrap())
    }

    #[test]
    fn public_key_pem_roundtrip() {
        let (_, public) = test_keypair();

        let pem = public_key_to_pem(public).unwrap();
        let parsed = public_key_from_pem(&pem).unwrap();

        assert_eq!(&parsed, public);
    }

    #[test]
    fn private_key_pem_roundtrip() {
        let (private, _) = test_keypair();

        let pem = private_key_to_pem(private).unwrap();
        let parsed = private_key_from_pem(&pem).unwrap();

        assert_eq!(&parsed, private);
    }

    #[test]
    fn reject_garbage_public_pem() {
        let result = public_key_from_pem("-----BEGIN PUBLIC KEY-----\ngarbage\n-----END PUBLIC KEY-----\n");
        assert!(matches!(result, Err(CryptoError::KeyEncoding { .. })));
    }

    #[test]
    fn reject_garbage_private_pem() {
        let result = private_key_from_pem("not a pem document");
        assert!(matches!(result, Err(CryptoError::KeyEncoding { .. })));
    }
}
