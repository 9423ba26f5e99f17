use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

/// Session length in minutes.
/// Admin sessions last 30 minutes from login or the last extension.
const SESSION_DURATION_MINUTES: i64 = 30;

/// The stored session token: a bare absolute expiry timestamp.
///
/// Serialized as `{"expiresAt": <ms since epoch>}` to stay compatible
/// with data written by the original browser deployment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionToken {
    pub expires_at: i64,
}

impl SessionToken {
    /// Create a token expiring one full session from now.
    pub fn new() -> Self {
        Self {
            expires_at: Utc::now().timestamp_millis() + Self::session_duration_ms(),
        }
    }

    /// Reset the expiry to one full session from now.
    pub fn extend(&mut self) {
        self.expires_at = Utc::now().timestamp_millis() + Self::session_duration_ms();
    }

    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp_millis() >= self.expires_at
    }

    /// Time until expiry, clamped to zero.
    pub fn remaining(&self) -> Duration {
        let ms = self.expires_at - Utc::now().timestamp_millis();
        Duration::milliseconds(ms.max(0))
    }

    fn session_duration_ms() -> i64 {
        Duration::minutes(SESSION_DURATION_MINUTES).num_milliseconds()
    }
}

impl Default for SessionToken {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_token_is_unexpired() {
        let token = SessionToken::new();
        assert!(!token.is_expired());
        assert!(token.remaining() > Duration::minutes(29));
        assert!(token.remaining() <= Duration::minutes(30));
    }

    #[test]
    fn test_past_token_is_expired_with_zero_remaining() {
        let token = SessionToken {
            expires_at: Utc::now().timestamp_millis() - 1000,
        };
        assert!(token.is_expired());
        assert_eq!(token.remaining(), Duration::zero());
    }

    #[test]
    fn test_extend_resets_expiry() {
        let mut token = SessionToken {
            expires_at: Utc::now().timestamp_millis() + 1000,
        };
        token.extend();
        assert!(token.remaining() > Duration::minutes(29));
    }

    #[test]
    fn test_serializes_with_camel_case_key() {
        let token = SessionToken { expires_at: 12345 };
        let json = serde_json::to_string(&token).unwrap();
        assert_eq!(json, r#"{"expiresAt":12345}"#);
    }
}
