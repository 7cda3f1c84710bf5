//! AES-256-GCM authenticated encryption with no associated data.

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Key, Nonce};

use crate::error::{GcmboxError, Result};
use crate::kdf::KEY_LEN;

/// Length of nonce in bytes
pub const NONCE_LEN: usize = 12;

/// Length of the authentication tag appended to every ciphertext
pub const TAG_LEN: usize = 16;

/// Encrypt `plaintext`, returning ciphertext with the tag appended.
///
/// The caller must never reuse a (key, nonce) pair for two different
/// plaintexts.
pub fn seal(key: &[u8; KEY_LEN], nonce: &[u8; NONCE_LEN], plaintext: &[u8]) -> Result<Vec<u8>> {
    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key));
    cipher
        .encrypt(Nonce::from_slice(nonce), plaintext)
        .map_err(|_| {
            GcmboxError::ResourceExhaustion(format!(
                "plaintext of {} bytes exceeds the AES-GCM message limit",
                plaintext.len()
            ))
        })
}

/// Verify and decrypt `sealed` (ciphertext with tag appended).
///
/// Any mismatch, including input too short to hold a tag, is reported as
/// `AuthenticationFailure` without further detail.
pub fn open(key: &[u8; KEY_LEN], nonce: &[u8; NONCE_LEN], sealed: &[u8]) -> Result<Vec<u8>> {
    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key));
    cipher
        .decrypt(Nonce::from_slice(nonce), sealed)
        .map_err(|_| GcmboxError::AuthenticationFailure)
}
