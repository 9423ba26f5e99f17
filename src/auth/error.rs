use thiserror::Error;

use crate::store::StorageError;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Login attempted before any admin password was set. The UI routes
    /// this to first-time setup rather than showing a failure.
    #[error("No admin password has been set")]
    NoCredential,

    #[error("Invalid password")]
    InvalidPassword,

    #[error("Password hashing failed: {0}")]
    Hash(String),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Caller-side password policy violations. The authenticator itself
/// never raises these; see `validate_new_password`.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum PasswordPolicyError {
    #[error("Password must be at least {min} characters")]
    TooShort { min: usize },

    #[error("Passwords do not match")]
    ConfirmationMismatch,
}
