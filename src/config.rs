//! Explicit configuration for a single file job.

use std::fmt;
use std::path::PathBuf;

use crate::kdf::KdfParams;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Encrypt,
    Decrypt,
}

impl Action {
    /// Past tense, for status messages.
    pub fn past_tense(self) -> &'static str {
        match self {
            Action::Encrypt => "encrypted",
            Action::Decrypt => "decrypted",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Action::Encrypt => "encrypt",
            Action::Decrypt => "decrypt",
        })
    }
}

/// Everything `file_ops::run` needs besides the password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobConfig {
    pub action: Action,
    pub source: PathBuf,
    pub destination: PathBuf,
    pub kdf: KdfParams,
}

impl JobConfig {
    pub fn new(action: Action, source: impl Into<PathBuf>, destination: impl Into<PathBuf>) -> Self {
        Self {
            action,
            source: source.into(),
            destination: destination.into(),
            kdf: KdfParams::default(),
        }
    }

    pub fn with_kdf(mut self, kdf: KdfParams) -> Self {
        self.kdf = kdf;
        self
    }
}
