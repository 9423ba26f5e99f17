//! Admin authentication for the link-in-bio site.
//!
//! This module provides:
//! - `Authenticator`: password-gated session management over a key-value
//!   store
//! - `SessionToken`: the stored expiry timestamp representing an active
//!   session
//! - `validate_new_password`: the caller-side password policy the admin
//!   UI enforces before calling `set_password`
//!
//! Sessions are persisted under a fixed store key and expire 30 minutes
//! after login or the last extension. There is no push mechanism - the
//! UI shell polls `remaining_session_time` to drive expiry warnings and
//! forced logout.

pub mod authenticator;
pub mod error;
pub mod password;
pub mod session;

pub use authenticator::Authenticator;
pub use error::{AuthError, PasswordPolicyError};
pub use password::{validate_new_password, MIN_PASSWORD_LENGTH};
pub use session::SessionToken;
