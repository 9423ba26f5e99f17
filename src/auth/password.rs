use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use tracing::debug;

use crate::auth::error::PasswordPolicyError;

/// Minimum admin password length enforced by the UI before setup or
/// password change.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Hash a password with a fresh random salt, producing a PHC string.
///
/// Default Argon2id parameters cost tens of milliseconds per hash, which
/// is the point: the stored hash is the only barrier between a visitor
/// and the admin panel. Callers run this through `spawn_blocking`.
pub(crate) fn hash_password(plaintext: &str) -> Result<String, String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(plaintext.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| e.to_string())
}

/// Verify a password against a stored PHC string.
///
/// An unparseable stored hash verifies as false rather than erroring;
/// the admin can recover by setting a new password. Comparison happens
/// inside argon2 and does not leak timing on matching prefixes.
pub(crate) fn verify_hash(plaintext: &str, stored: &str) -> bool {
    match PasswordHash::new(stored) {
        Ok(parsed) => Argon2::default()
            .verify_password(plaintext.as_bytes(), &parsed)
            .is_ok(),
        Err(e) => {
            debug!(error = %e, "Stored password hash did not parse");
            false
        }
    }
}

/// Validate a new password and its confirmation before storing it.
///
/// This is the admin UI's pre-flight check; `Authenticator::set_password`
/// deliberately performs no validation of its own.
pub fn validate_new_password(password: &str, confirm: &str) -> Result<(), PasswordPolicyError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(PasswordPolicyError::TooShort {
            min: MIN_PASSWORD_LENGTH,
        });
    }
    if password != confirm {
        return Err(PasswordPolicyError::ConfirmationMismatch);
    }
    Ok(())
}
