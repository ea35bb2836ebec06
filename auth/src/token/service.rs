use chrono::Duration;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;
use serde::Deserialize;

use super::claims::Claims;
use super::errors::TokenError;

/// Token service configuration.
///
/// Built explicitly from process configuration and passed into the service at
/// construction; there is no ambient secret state.
///
/// # Security Notes
/// - The secret should be at least 256 bits (32 bytes) for HS256
/// - Store secrets in environment variables or secure vaults, never in code
/// - Rotating the secret invalidates every outstanding token
pub struct TokenConfig {
    pub secret: Vec<u8>,
    pub default_ttl: Duration,
}

impl TokenConfig {
    /// Create a token configuration.
    ///
    /// # Arguments
    /// * `secret` - High-entropy signing key bytes
    /// * `default_ttl` - Validity duration used when callers do not pass one
    pub fn new(secret: impl Into<Vec<u8>>, default_ttl: Duration) -> Self {
        Self {
            secret: secret.into(),
            default_ttl,
        }
    }
}

/// Stateless token issuance and validation.
///
/// Signs with HMAC-SHA256 (HS256); the same algorithm and secret are used for
/// both directions. No server-side record is kept per token: validity is fully
/// determined by the signature and the expiration claim.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    default_ttl: Duration,
}

/// Decode target tolerant of absent claims, so a structurally valid token with
/// a missing subject can be classified instead of failing deserialization.
#[derive(Debug, Deserialize)]
struct RawClaims {
    sub: Option<String>,
}

impl TokenService {
    /// Create a new token service from configuration.
    ///
    /// # Arguments
    /// * `config` - Secret key and default TTL
    ///
    /// # Returns
    /// TokenService instance fixed to the HS256 algorithm
    pub fn new(config: &TokenConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(&config.secret),
            decoding_key: DecodingKey::from_secret(&config.secret),
            algorithm: Algorithm::HS256,
            default_ttl: config.default_ttl,
        }
    }

    /// Issue a signed token for a subject.
    ///
    /// The expiration is resolved to an absolute UTC timestamp here, at
    /// issuance time. Stateless: nothing is recorded server-side.
    ///
    /// # Arguments
    /// * `subject` - Stable identifier to embed in the `sub` claim
    /// * `ttl` - Validity duration
    ///
    /// # Returns
    /// Compact signed token string
    ///
    /// # Errors
    /// * `EncodingFailed` - Claims serialization or signing failed
    pub fn issue(&self, subject: &str, ttl: Duration) -> Result<String, TokenError> {
        let claims = Claims::new(subject, ttl);
        let header = Header::new(self.algorithm);

        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    /// Issue a signed token using the configured default TTL.
    ///
    /// # Arguments
    /// * `subject` - Stable identifier to embed in the `sub` claim
    ///
    /// # Returns
    /// Compact signed token string
    ///
    /// # Errors
    /// * `EncodingFailed` - Claims serialization or signing failed
    pub fn issue_default(&self, subject: &str) -> Result<String, TokenError> {
        self.issue(subject, self.default_ttl)
    }

    /// Validate a presented token and resolve its subject.
    ///
    /// Signature is checked first, then expiration (zero leeway, UTC), then
    /// claim presence.
    ///
    /// # Arguments
    /// * `token` - Compact signed token string
    ///
    /// # Returns
    /// The `sub` claim of a valid token
    ///
    /// # Errors
    /// * `InvalidSignature` - Tampered token, or signed under a different secret
    /// * `Expired` - Current time is past the expiration instant
    /// * `MalformedClaims` - Valid signature but a required claim is missing
    pub fn validate(&self, token: &str) -> Result<String, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        // Expiration is exact: a token is valid while now <= exp
        validation.leeway = 0;

        let token_data =
            decode::<RawClaims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => TokenError::Expired,
                    ErrorKind::MissingRequiredClaim(claim) => {
                        TokenError::MalformedClaims(format!("missing claim: {}", claim))
                    }
                    ErrorKind::Json(err) => {
                        TokenError::MalformedClaims(format!("invalid claims payload: {}", err))
                    }
                    _ => TokenError::InvalidSignature(e.to_string()),
                }
            })?;

        token_data
            .claims
            .sub
            .ok_or_else(|| TokenError::MalformedClaims("missing claim: sub".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";

    fn service_with_secret(secret: &[u8]) -> TokenService {
        TokenService::new(&TokenConfig::new(secret, Duration::hours(1)))
    }

    #[test]
    fn test_issue_and_validate() {
        let service = service_with_secret(SECRET);

        let token = service
            .issue("alice@example.com", Duration::seconds(3600))
            .expect("Failed to issue token");
        assert!(!token.is_empty());

        let subject = service.validate(&token).expect("Failed to validate token");
        assert_eq!(subject, "alice@example.com");
    }

    #[test]
    fn test_issue_default_ttl() {
        let service = service_with_secret(SECRET);

        let token = service
            .issue_default("alice@example.com")
            .expect("Failed to issue token");

        let subject = service.validate(&token).expect("Failed to validate token");
        assert_eq!(subject, "alice@example.com");
    }

    #[test]
    fn test_validate_expired_token() {
        let service = service_with_secret(SECRET);

        // Already past its expiration instant at issuance
        let token = service
            .issue("alice@example.com", Duration::seconds(-10))
            .expect("Failed to issue token");

        let result = service.validate(&token);
        assert!(matches!(result, Err(TokenError::Expired)));
    }

    #[test]
    fn test_validate_tampered_token() {
        let service = service_with_secret(SECRET);

        let token = service
            .issue("alice@example.com", Duration::seconds(3600))
            .expect("Failed to issue token");

        // Flip the first character of the payload segment
        let parts: Vec<&str> = token.split('.').collect();
        let flipped = if parts[1].starts_with('e') { "f" } else { "e" };
        let tampered = format!("{}.{}{}.{}", parts[0], flipped, &parts[1][1..], parts[2]);

        let result = service.validate(&tampered);
        assert!(matches!(result, Err(TokenError::InvalidSignature(_))));
    }

    #[test]
    fn test_validate_wrong_secret() {
        let issuing = service_with_secret(b"secret1_at_least_32_bytes_long_key!");
        let validating = service_with_secret(b"secret2_at_least_32_bytes_long_key!");

        let token = issuing
            .issue("alice@example.com", Duration::seconds(3600))
            .expect("Failed to issue token");

        let result = validating.validate(&token);
        assert!(matches!(result, Err(TokenError::InvalidSignature(_))));
    }

    #[test]
    fn test_validate_garbage_token() {
        let service = service_with_secret(SECRET);

        let result = service.validate("invalid.token.here");
        assert!(matches!(result, Err(TokenError::InvalidSignature(_))));
    }

    #[test]
    fn test_validate_missing_subject() {
        let service = service_with_secret(SECRET);

        // Valid signature, valid expiration, no sub claim
        let exp = chrono::Utc::now().timestamp() + 3600;
        let token = encode(
            &Header::new(Algorithm::HS256),
            &serde_json::json!({ "exp": exp }),
            &EncodingKey::from_secret(SECRET),
        )
        .expect("Failed to encode token");

        let result = service.validate(&token);
        assert!(matches!(result, Err(TokenError::MalformedClaims(_))));
    }

    #[test]
    fn test_validate_missing_expiration() {
        let service = service_with_secret(SECRET);

        // Valid signature, no exp claim
        let token = encode(
            &Header::new(Algorithm::HS256),
            &serde_json::json!({ "sub": "alice@example.com" }),
            &EncodingKey::from_secret(SECRET),
        )
        .expect("Failed to encode token");

        let result = service.validate(&token);
        assert!(matches!(result, Err(TokenError::MalformedClaims(_))));
    }
}
