//! Container framing
//!
//! A container is the only persisted artifact. Its layout is a plain
//! concatenation of fixed-width fields with no separators, length prefixes
//! or padding:
//! - salt: 16 bytes
//! - nonce: 12 bytes
//! - ciphertext: N bytes (N = plaintext length)
//! - tag: 16 bytes
//!
//! Parsing is purely structural; nothing here touches keys.

use crate::cipher::{NONCE_LEN, TAG_LEN};
use crate::error::{GcmboxError, Result};
use crate::kdf::SALT_LEN;

/// Smallest possible container: salt, nonce and the tag of an empty plaintext.
pub const MIN_CONTAINER_LEN: usize = SALT_LEN + NONCE_LEN + TAG_LEN;

/// Borrowed view of a parsed container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerParts<'a> {
    pub salt: &'a [u8; SALT_LEN],
    pub nonce: &'a [u8; NONCE_LEN],
    /// Ciphertext with the authentication tag appended.
    pub sealed: &'a [u8],
}

/// Total container length for a plaintext of `plaintext_len` bytes.
pub fn container_len(plaintext_len: usize) -> usize {
    MIN_CONTAINER_LEN + plaintext_len
}

pub fn serialize(salt: &[u8; SALT_LEN], nonce: &[u8; NONCE_LEN], sealed: &[u8]) -> Vec<u8> {
    let mut output = Vec::with_capacity(SALT_LEN + NONCE_LEN + sealed.len());
    output.extend_from_slice(salt);
    output.extend_from_slice(nonce);
    output.extend_from_slice(sealed);
    output
}

pub fn parse(container: &[u8]) -> Result<ContainerParts<'_>> {
    if container.len() < MIN_CONTAINER_LEN {
        return Err(GcmboxError::MalformedContainer {
            len: container.len(),
        });
    }

    let (salt, rest) = container.split_at(SALT_LEN);
    let (nonce, sealed) = rest.split_at(NONCE_LEN);

    // The length check above guarantees both conversions.
    let salt = salt
        .try_into()
        .map_err(|_| GcmboxError::MalformedContainer { len: container.len() })?;
    let nonce = nonce
        .try_into()
        .map_err(|_| GcmboxError::MalformedContainer { len: container.len() })?;

    Ok(ContainerParts {
        salt,
        nonce,
        sealed,
    })
}
