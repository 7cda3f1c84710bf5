use std::io;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Any failure that cannot be confidently attributed to the user.
    ///
    /// Use of Internal is never a guarantee the error is not, for example,
    /// due to a user error - merely that it cannot be confidently determined
    /// by the code.
    Internal,

    /// The user provided invalid input (wrong password, a file that is not a
    /// gcmbox container, a path that does not exist) or performed an action
    /// that is impossible to complete.
    User,
}

/// Coarse classification of filesystem failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoFailureKind {
    NotFound,
    PermissionDenied,
    Other,
}

impl From<io::ErrorKind> for IoFailureKind {
    fn from(kind: io::ErrorKind) -> Self {
        match kind {
            io::ErrorKind::NotFound => IoFailureKind::NotFound,
            io::ErrorKind::PermissionDenied => IoFailureKind::PermissionDenied,
            _ => IoFailureKind::Other,
        }
    }
}

#[derive(Debug, Error)]
pub enum GcmboxError {
    /// Tag verification failed. Either the password is wrong or the
    /// container was corrupted or tampered with; the two are deliberately
    /// not distinguished.
    #[error("wrong password or corrupted file")]
    AuthenticationFailure,

    /// The input cannot be a container (too short to hold salt, nonce and tag).
    #[error("input is not a valid container ({len} bytes, need at least {min})", min = crate::container::MIN_CONTAINER_LEN)]
    MalformedContainer { len: usize },

    #[error("{context}: {}", describe_io(.kind))]
    Io {
        kind: IoFailureKind,
        context: String,
        #[source]
        source: io::Error,
    },

    /// Randomness or memory could not be obtained, or the payload exceeds
    /// what the cipher can process in one message.
    #[error("resource exhaustion: {0}")]
    ResourceExhaustion(String),

    /// The password source could not produce a password.
    #[error("password unavailable: {0}")]
    PassphraseUnavailable(String),
}

fn describe_io(kind: &IoFailureKind) -> &'static str {
    match kind {
        IoFailureKind::NotFound => "file not found",
        IoFailureKind::PermissionDenied => "insufficient permissions for file",
        IoFailureKind::Other => "I/O error",
    }
}

impl GcmboxError {
    /// Wraps an I/O error with a human-readable context (typically naming the path).
    pub fn io(context: impl Into<String>, source: io::Error) -> Self {
        GcmboxError::Io {
            kind: source.kind().into(),
            context: context.into(),
            source,
        }
    }

    /// Broad error category, always available.
    pub fn category(&self) -> ErrorCategory {
        match self {
            GcmboxError::AuthenticationFailure
            | GcmboxError::MalformedContainer { .. }
            | GcmboxError::PassphraseUnavailable(_) => ErrorCategory::User,
            GcmboxError::Io { kind, .. } => match kind {
                IoFailureKind::NotFound | IoFailureKind::PermissionDenied => ErrorCategory::User,
                IoFailureKind::Other => ErrorCategory::Internal,
            },
            GcmboxError::ResourceExhaustion(_) => ErrorCategory::Internal,
        }
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, GcmboxError>;
