//! File encryption/decryption operations
//!
//! This module provides high-level file operations on top of `secretcrypt`.
//! Output is always staged in a temporary file next to the destination and
//! renamed into place, so a failure at any point (including a failed
//! decryption) never leaves a partial destination file behind.

use crate::config::{Action, JobConfig};
use crate::error::{GcmboxError, Result};
use crate::kdf::KdfParams;
use crate::passphrase::PassphraseReader;
use crate::secretcrypt;
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Run the job described by `job`, reading the password from `passphrase_reader`.
pub fn run(job: &JobConfig, passphrase_reader: &mut dyn PassphraseReader) -> Result<()> {
    match job.action {
        Action::Encrypt => {
            encrypt_file(&job.source, &job.destination, &job.kdf, passphrase_reader)
        }
        Action::Decrypt => {
            decrypt_file(&job.source, &job.destination, &job.kdf, passphrase_reader)
        }
    }
}

/// Encrypt a file with a password
///
/// Reads plaintext from `input_path`, encrypts it using a password from
/// `passphrase_reader`, and writes the container to `output_path`.
///
/// The output file is created with mode 0o600 (read/write for owner only) on Unix systems.
pub fn encrypt_file(
    input_path: &Path,
    output_path: &Path,
    params: &KdfParams,
    passphrase_reader: &mut dyn PassphraseReader,
) -> Result<()> {
    let plaintext = fs::read(input_path).map_err(|e| read_error(input_path, e))?;
    let passphrase = passphrase_reader.read_passphrase()?;
    let container = secretcrypt::encrypt(&passphrase, &plaintext, params)?;
    write_file_atomic(output_path, &container)?;

    info!(
        input = %input_path.display(),
        output = %output_path.display(),
        bytes = container.len(),
        "encrypted file"
    );
    Ok(())
}

/// Decrypt a file with a password
///
/// Reads a container from `input_path`, decrypts it using a password from
/// `passphrase_reader`, and writes the plaintext to `output_path`. Nothing is
/// written unless authentication succeeds.
///
/// The output file is created with mode 0o600 (read/write for owner only) on Unix systems.
pub fn decrypt_file(
    input_path: &Path,
    output_path: &Path,
    params: &KdfParams,
    passphrase_reader: &mut dyn PassphraseReader,
) -> Result<()> {
    let container = fs::read(input_path).map_err(|e| read_error(input_path, e))?;
    let passphrase = passphrase_reader.read_passphrase()?;
    let plaintext = secretcrypt::decrypt(&passphrase, &container, params)?;
    write_file_atomic(output_path, &plaintext)?;

    info!(
        input = %input_path.display(),
        output = %output_path.display(),
        bytes = plaintext.len(),
        "decrypted file"
    );
    Ok(())
}

/// Atomically replace `path` with `contents` (tempfile + fsync + rename).
///
/// Either the old file (or no file) or the complete new file exists at
/// `path`, never a partial one.
fn write_file_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut temp_file = tempfile::Builder::new()
        .prefix(".gcmbox-tmp")
        .tempfile_in(dir)
        .map_err(|e| {
            GcmboxError::io(
                format!("failed to create temporary file in {}", dir.display()),
                e,
            )
        })?;

    // Restrict permissions before any content lands in the file.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        temp_file
            .as_file()
            .set_permissions(fs::Permissions::from_mode(0o600))
            .map_err(|e| GcmboxError::io("failed to set temporary file permissions", e))?;
    }

    temp_file
        .write_all(contents)
        .map_err(|e| GcmboxError::io("failed to write to temporary file", e))?;
    // Flush and fsync() such that the rename later, if it succeeds, will
    // always point to a valid file.
    temp_file
        .flush()
        .map_err(|e| GcmboxError::io("failed to flush temporary file", e))?;
    temp_file
        .as_file()
        .sync_all()
        .map_err(|e| GcmboxError::io("failed to sync file prior to rename", e))?;

    temp_file.persist(path).map_err(|e| {
        GcmboxError::io(format!("failed to write to {}", path.display()), e.error)
    })?;
    Ok(())
}

fn read_error(path: &Path, err: std::io::Error) -> GcmboxError {
    GcmboxError::io(format!("failed to read from {}", path.display()), err)
}
