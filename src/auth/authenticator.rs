use chrono::Duration;
use tokio::task;
use tracing::{debug, warn};

use crate::auth::error::AuthError;
use crate::auth::password::{hash_password, verify_hash};
use crate::auth::session::SessionToken;
use crate::store::{KeyValueStore, StorageError};

/// Store key holding the hashed admin password
const CREDENTIAL_KEY: &str = "linkInBio_adminPasswordHash";

/// Store key holding the session token JSON
const SESSION_KEY: &str = "linkInBio_authToken";

/// Password-gated session management over a key-value store.
///
/// There is a single admin credential and at most one live session.
/// Expiry is computed lazily from the stored timestamp on every query;
/// nothing runs in the background. A stored session value that fails to
/// parse is treated as absent - losing a session is always safe, while
/// silently granting one never is.
pub struct Authenticator<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> Authenticator<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Whether an admin password has ever been set.
    pub fn has_credential(&self) -> bool {
        match self.store.get(CREDENTIAL_KEY) {
            Ok(stored) => stored.is_some(),
            Err(e) => {
                warn!(error = %e, "Failed to read credential");
                false
            }
        }
    }

    /// Hash `plaintext` and store it as the admin credential, replacing
    /// any existing one.
    ///
    /// No session is issued here; the caller logs in explicitly after
    /// first-time setup. Length and confirmation checks are the caller's
    /// job (`validate_new_password`).
    pub async fn set_password(&self, plaintext: &str) -> Result<(), AuthError> {
        let plaintext = plaintext.to_string();
        // Argon2 is CPU-bound and deliberately slow; keep it off the
        // async runtime threads.
        let hash = task::spawn_blocking(move || hash_password(&plaintext))
            .await
            .map_err(|e| AuthError::Hash(e.to_string()))?
            .map_err(AuthError::Hash)?;

        self.store.set(CREDENTIAL_KEY, &hash)?;
        Ok(())
    }

    /// Check `plaintext` against the stored credential.
    ///
    /// Returns false when no credential exists or the stored hash does
    /// not parse; never errors.
    pub async fn verify(&self, plaintext: &str) -> bool {
        let stored = match self.store.get(CREDENTIAL_KEY) {
            Ok(Some(hash)) => hash,
            Ok(None) => return false,
            Err(e) => {
                warn!(error = %e, "Failed to read credential for verification");
                return false;
            }
        };

        let plaintext = plaintext.to_string();
        match task::spawn_blocking(move || verify_hash(&plaintext, &stored)).await {
            Ok(valid) => valid,
            Err(e) => {
                warn!(error = %e, "Password verification task panicked");
                false
            }
        }
    }

    /// Verify the password and establish a fresh 30-minute session.
    ///
    /// This is the sole entry point that creates a session token.
    pub async fn login(&self, plaintext: &str) -> Result<(), AuthError> {
        if !self.has_credential() {
            return Err(AuthError::NoCredential);
        }
        if !self.verify(plaintext).await {
            return Err(AuthError::InvalidPassword);
        }

        self.write_token(&SessionToken::new())?;
        debug!("Admin session established");
        Ok(())
    }

    /// Whether a well-formed, unexpired session token is present.
    pub fn is_authenticated(&self) -> bool {
        self.read_token().map(|t| !t.is_expired()).unwrap_or(false)
    }

    /// Remove the session token. Idempotent.
    pub fn logout(&self) -> Result<(), StorageError> {
        self.store.remove(SESSION_KEY)
    }

    /// Time until the session expires; zero when there is no session or
    /// the stored token is malformed.
    pub fn remaining_session_time(&self) -> Duration {
        self.read_token()
            .map(|t| t.remaining())
            .unwrap_or_else(Duration::zero)
    }

    /// Push the session expiry back to a full 30 minutes from now.
    ///
    /// No-op when no parseable token exists; extension never fabricates
    /// a session.
    pub fn extend_session(&self) -> Result<(), StorageError> {
        if let Some(mut token) = self.read_token() {
            token.extend();
            self.write_token(&token)?;
        }
        Ok(())
    }

    fn read_token(&self) -> Option<SessionToken> {
        let raw = match self.store.get(SESSION_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!(error = %e, "Failed to read session token");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(token) => Some(token),
            Err(e) => {
                debug!(error = %e, "Stored session token did not parse, treating as logged out");
                None
            }
        }
    }

    fn write_token(&self, token: &SessionToken) -> Result<(), StorageError> {
        // SessionToken serialization cannot fail: a single integer field
        let json = serde_json::to_string(token).unwrap_or_default();
        self.store.set(SESSION_KEY, &json)
    }
}
