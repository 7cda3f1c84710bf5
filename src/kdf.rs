//! Password-based key derivation using PBKDF2-HMAC-SHA256.

use std::num::NonZeroU32;

use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use tracing::debug;
use zeroize::Zeroizing;

/// Length of salt in bytes
pub const SALT_LEN: usize = 16;

/// Length of derived key in bytes (AES-256)
pub const KEY_LEN: usize = 32;

/// Default PBKDF2 iteration count.
pub const DEFAULT_ITERATIONS: NonZeroU32 = NonZeroU32::new(1_200_000).unwrap();

/// Tunable key derivation parameters.
///
/// The iteration count is not recorded in the container, so the same
/// parameters must be supplied when decrypting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KdfParams {
    pub iterations: NonZeroU32,
}

impl KdfParams {
    pub fn new(iterations: NonZeroU32) -> Self {
        Self { iterations }
    }
}

impl Default for KdfParams {
    fn default() -> Self {
        Self::new(DEFAULT_ITERATIONS)
    }
}

/// Derive a 32-byte key from a password and salt.
///
/// Deterministic in (password, salt, params). The returned key is wiped from
/// memory when dropped.
pub fn derive_key(
    password: &[u8],
    salt: &[u8; SALT_LEN],
    params: &KdfParams,
) -> Zeroizing<[u8; KEY_LEN]> {
    debug!(iterations = params.iterations.get(), "deriving key");

    let mut key = Zeroizing::new([0u8; KEY_LEN]);
    pbkdf2_hmac::<Sha256>(password, salt, params.iterations.get(), &mut key[..]);
    key
}
