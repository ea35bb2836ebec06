use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Claims carried by every issued token.
///
/// `exp` is computed as an absolute Unix timestamp at issuance time, so the
/// claim is self-contained and verifiable without shared clock state. Both
/// issuance and validation read the clock in UTC.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (the user's stable identifier)
    pub sub: String,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Issued at (Unix timestamp)
    pub iat: i64,
}

impl Claims {
    /// Build claims for a subject expiring `ttl` from now.
    ///
    /// # Arguments
    /// * `subject` - Stable identifier of the authenticated entity
    /// * `ttl` - Validity duration of the token
    ///
    /// # Returns
    /// Claims with sub, exp, and iat set
    pub fn new(subject: impl Into<String>, ttl: Duration) -> Self {
        let now = Utc::now();
        Self {
            sub: subject.into(),
            exp: (now + ttl).timestamp(),
            iat: now.timestamp(),
        }
    }

    /// Check whether the claims are expired at the given instant.
    ///
    /// A token is valid while `now <= exp`.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp < current_timestamp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expiration_is_absolute() {
        let claims = Claims::new("alice@example.com", Duration::seconds(3600));

        assert_eq!(claims.sub, "alice@example.com");
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_is_expired_boundary() {
        let claims = Claims {
            sub: "alice@example.com".to_string(),
            exp: 1000,
            iat: 0,
        };

        assert!(!claims.is_expired(999));
        assert!(!claims.is_expired(1000)); // Valid exactly at expiration
        assert!(claims.is_expired(1001));
    }
}
