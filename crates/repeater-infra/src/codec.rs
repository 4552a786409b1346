//! AES-256-GCM reference codec.
//!
//! Implements the `ReferenceCodec` port with symmetric encryption and
//! random nonces. The master key can come from:
//! - A raw 32-byte key
//! - A password (Argon2id key derivation)
//! - An ephemeral random key (tokens valid for the process lifetime only)
//!
//! Token format: URL-safe base64 of `nonce (12 bytes) || ciphertext`.
//!
//! SECURITY: Error types never contain plaintext or key material.

use aes_gcm::aead::{Aead, KeyInit, OsRng};
use aes_gcm::{AeadCore, Aes256Gcm, Nonce};
use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use repeater_core::codec::ReferenceCodec;
use repeater_types::error::CodecError;

/// Nonce size for AES-256-GCM (96 bits / 12 bytes).
const NONCE_SIZE: usize = 12;

/// Keyed encoding for layout references.
///
/// Each encode call generates a random 12-byte nonce, so encoding the same
/// reference twice produces different tokens. GCM authentication makes any
/// tampering with a token detectable on decode.
pub struct KeyedCodec {
    cipher: Aes256Gcm,
}

impl KeyedCodec {
    /// Create a codec from a raw 32-byte key.
    pub fn new(key: &[u8; 32]) -> Self {
        Self {
            cipher: Aes256Gcm::new(key.into()),
        }
    }

    /// Create a codec with a random per-process key.
    ///
    /// Suitable for hosts that never persist descriptors across restarts:
    /// tokens minted by one process are rejected by the next.
    pub fn ephemeral() -> Self {
        Self::new(&rand_bytes())
    }

    /// Derive a 32-byte key from a password using Argon2id.
    ///
    /// Uses OWASP recommended parameters (19 MiB memory, 2 iterations, 1
    /// parallelism degree). The salt is deterministic ("repeater-codec-v1")
    /// so the same password always produces the same key; the password
    /// itself provides the entropy, and the hash is used as a KDF, not
    /// stored for verification.
    pub fn from_password(password: &str) -> Result<Self, CodecError> {
        use argon2::{Algorithm, Argon2, Params, Version};

        let params =
            Params::new(19456, 2, 1, Some(32)).map_err(|_| CodecError::KeyDerivationFailed)?;
        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

        let salt = b"repeater-codec-v1";
        let mut key = [0u8; 32];
        argon2
            .hash_password_into(password.as_bytes(), salt, &mut key)
            .map_err(|_| CodecError::KeyDerivationFailed)?;

        Ok(Self::new(&key))
    }

    /// Encrypt plaintext, returning `nonce || ciphertext`.
    fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>, CodecError> {
        let nonce = Aes256Gcm::generate_nonce(&mut OsRng);
        let ciphertext = self
            .cipher
            .encrypt(&nonce, plaintext)
            .map_err(|_| CodecError::EncryptionFailed)?;

        let mut result = Vec::with_capacity(NONCE_SIZE + ciphertext.len());
        result.extend_from_slice(&nonce);
        result.extend_from_slice(&ciphertext);
        Ok(result)
    }

    /// Decrypt data produced by `encrypt()`.
    fn decrypt(&self, data: &[u8]) -> Result<Vec<u8>, CodecError> {
        if data.len() < NONCE_SIZE {
            return Err(CodecError::TokenTooShort);
        }

        let (nonce_bytes, ciphertext) = data.split_at(NONCE_SIZE);
        let nonce = Nonce::from_slice(nonce_bytes);

        self.cipher
            .decrypt(nonce, ciphertext)
            .map_err(|_| CodecError::DecryptionFailed)
    }
}

impl ReferenceCodec for KeyedCodec {
    fn encode(&self, plaintext: &str) -> Result<String, CodecError> {
        Ok(URL_SAFE_NO_PAD.encode(self.encrypt(plaintext.as_bytes())?))
    }

    fn decode(&self, token: &str) -> Result<String, CodecError> {
        let data = URL_SAFE_NO_PAD
            .decode(token)
            .map_err(|_| CodecError::InvalidToken)?;
        let plaintext = self.decrypt(&data)?;
        String::from_utf8(plaintext).map_err(|_| CodecError::InvalidToken)
    }
}

/// Generate 32 random bytes using the OS CSPRNG.
pub(crate) fn rand_bytes() -> [u8; 32] {
    use aes_gcm::aead::rand_core::RngCore;
    let mut key = [0u8; 32];
    OsRng.fill_bytes(&mut key);
    key
}
