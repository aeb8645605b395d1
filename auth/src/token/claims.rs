use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Claim set carried by an access token.
///
/// `sub` holds the subject the token speaks for (an email address) and
/// `exp` the absolute expiration as a Unix timestamp in seconds. Fields are
/// private: builder methods consume the value and return a new one, so a
/// constructed claim set is never mutated in place.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (missing in a payload decodes as empty)
    #[serde(default)]
    sub: String,

    /// Expiration time (Unix timestamp)
    exp: i64,

    /// Issued at (Unix timestamp)
    #[serde(default)]
    iat: i64,
}

impl Claims {
    /// Create claims for a subject, issued and expiring now.
    ///
    /// Use [`Claims::expiring_in`] or [`TokenCodec::encode`](crate::TokenCodec::encode)
    /// to give the claims a lifetime.
    pub fn new(subject: impl Into<String>) -> Self {
        let now = Utc::now().timestamp();

        Self {
            sub: subject.into(),
            exp: now,
            iat: now,
        }
    }

    /// Re-issue the claims now with a lifetime of `ttl`.
    pub fn expiring_in(self, ttl: Duration) -> Self {
        let now = Utc::now();

        Self {
            exp: (now + ttl).timestamp(),
            iat: now.timestamp(),
            ..self
        }
    }

    /// Set expiration (Unix timestamp).
    pub fn with_expiration(self, exp: i64) -> Self {
        Self { exp, ..self }
    }

    /// Set issued at (Unix timestamp).
    pub fn with_issued_at(self, iat: i64) -> Self {
        Self { iat, ..self }
    }

    pub fn subject(&self) -> &str {
        &self.sub
    }

    pub fn expires_at(&self) -> i64 {
        self.exp
    }

    pub fn issued_at(&self) -> i64 {
        self.iat
    }

    /// Check if the claims are expired at `current_timestamp`.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp < current_timestamp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_claims() {
        let claims = Claims::new("a@x.com");

        assert_eq!(claims.subject(), "a@x.com");
        assert_eq!(claims.expires_at(), claims.issued_at());
    }

    #[test]
    fn test_expiring_in() {
        let claims = Claims::new("a@x.com").expiring_in(Duration::minutes(15));

        assert_eq!(claims.subject(), "a@x.com");
        assert_eq!(claims.expires_at() - claims.issued_at(), 15 * 60);
    }

    #[test]
    fn test_builder_returns_new_value() {
        let original = Claims::new("a@x.com").with_issued_at(1_000);
        let extended = original.clone().with_expiration(2_000);

        assert_eq!(original.issued_at(), 1_000);
        assert_ne!(original.expires_at(), 2_000);
        assert_eq!(extended.expires_at(), 2_000);
        assert_eq!(extended.issued_at(), 1_000);
        assert_eq!(extended.subject(), original.subject());
    }

    #[test]
    fn test_is_expired() {
        let claims = Claims::new("a@x.com").with_expiration(1000);

        assert!(!claims.is_expired(999));
        assert!(!claims.is_expired(1000)); // exactly at expiration
        assert!(claims.is_expired(1001));
    }
}
