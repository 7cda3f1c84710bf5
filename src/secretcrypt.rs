//! Encryption/decryption using PBKDF2-HMAC-SHA256 + AES-256-GCM
//!
//! This module ties key derivation, the cipher and container framing
//! together. Every call to `encrypt` draws a fresh salt and nonce from the
//! operating system, so the key is re-derived and the (key, nonce) pair is
//! new for every container.

use rand::TryRngCore;
use rand::rngs::OsRng;
use tracing::debug;

use crate::cipher::{self, NONCE_LEN};
use crate::container;
use crate::error::{GcmboxError, Result};
use crate::kdf::{self, KdfParams, SALT_LEN};

/// Encrypt plaintext with a password using random salt and nonce
///
/// Returns the container: salt(16) + nonce(12) + ciphertext(n) + tag(16)
pub fn encrypt(password: &[u8], plaintext: &[u8], params: &KdfParams) -> Result<Vec<u8>> {
    let mut salt = [0u8; SALT_LEN];
    fill_random(&mut salt)?;

    let mut nonce = [0u8; NONCE_LEN];
    fill_random(&mut nonce)?;

    encrypt_deterministic(password, plaintext, &salt, &nonce, params)
}

/// Encrypt plaintext with a password using provided salt and nonce
///
/// This function is ONLY for testing purposes to generate deterministic output.
/// NEVER use this in production - always use `encrypt()` which generates random salt/nonce.
pub fn encrypt_deterministic(
    password: &[u8],
    plaintext: &[u8],
    salt: &[u8; SALT_LEN],
    nonce: &[u8; NONCE_LEN],
    params: &KdfParams,
) -> Result<Vec<u8>> {
    let key = kdf::derive_key(password, salt, params);
    let sealed = cipher::seal(&key, nonce, plaintext)?;
    let output = container::serialize(salt, nonce, &sealed);

    debug!(
        plaintext_len = plaintext.len(),
        container_len = output.len(),
        "sealed container"
    );
    Ok(output)
}

/// Decrypt a container with a password
///
/// The container is parsed before any key derivation happens, so malformed
/// input is rejected without paying for the KDF.
pub fn decrypt(password: &[u8], container: &[u8], params: &KdfParams) -> Result<Vec<u8>> {
    let parts = container::parse(container)?;
    let key = kdf::derive_key(password, parts.salt, params);
    let plaintext = cipher::open(&key, parts.nonce, parts.sealed)?;

    debug!(plaintext_len = plaintext.len(), "opened container");
    Ok(plaintext)
}

fn fill_random(buf: &mut [u8]) -> Result<()> {
    OsRng.try_fill_bytes(buf).map_err(|e| {
        GcmboxError::ResourceExhaustion(format!("operating system RNG unavailable: {}", e))
    })
}
