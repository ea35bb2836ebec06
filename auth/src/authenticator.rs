use chrono::Duration;

use crate::password::PasswordError;
use crate::password::PasswordHasher;
use crate::token::TokenConfig;
use crate::token::TokenError;
use crate::token::TokenService;

/// Authentication coordinator combining password verification and token
/// issuance.
///
/// Registration hashes through it, login verifies then issues, and every
/// protected request resolves its subject through it. Holds no mutable state;
/// safe to share behind an `Arc` across request handlers.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    token_service: TokenService,
}

/// Result of successful authentication.
pub struct AuthenticationResult {
    /// Signed access token
    pub access_token: String,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),

    #[error("Token error: {0}")]
    TokenError(#[from] TokenError),
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `config` - Token secret and default TTL
    ///
    /// # Returns
    /// Configured Authenticator instance
    pub fn new(config: &TokenConfig) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            token_service: TokenService::new(config),
        }
    }

    /// Hash a password for storage.
    ///
    /// # Arguments
    /// * `password` - Plaintext password
    ///
    /// # Returns
    /// Hashed password string
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify credentials and issue an access token for the subject.
    ///
    /// Uses the configured default TTL. A wrong password and an unparseable
    /// stored hash both collapse into `InvalidCredentials`; callers must not
    /// leak which it was.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored password hash
    /// * `subject` - Stable identifier to embed in the token
    ///
    /// # Returns
    /// AuthenticationResult with access token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `TokenError` - Token issuance failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        subject: &str,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        if !self.password_hasher.verify(password, stored_hash) {
            return Err(AuthenticationError::InvalidCredentials);
        }

        let access_token = self.token_service.issue_default(subject)?;

        Ok(AuthenticationResult { access_token })
    }

    /// Issue an access token without password verification.
    ///
    /// Useful when authentication has already been established by other means.
    ///
    /// # Arguments
    /// * `subject` - Stable identifier to embed in the token
    /// * `ttl` - Validity duration
    ///
    /// # Returns
    /// Signed token string
    ///
    /// # Errors
    /// * `TokenError` - Token issuance failed
    pub fn issue_token(&self, subject: &str, ttl: Duration) -> Result<String, TokenError> {
        self.token_service.issue(subject, ttl)
    }

    /// Validate a presented token and resolve the current subject.
    ///
    /// # Arguments
    /// * `token` - Compact signed token string
    ///
    /// # Returns
    /// The token's subject
    ///
    /// # Errors
    /// * `InvalidSignature` - Tampered token or rotated secret
    /// * `Expired` - Token past its expiration instant
    /// * `MalformedClaims` - Required claim absent
    pub fn resolve_subject(&self, token: &str) -> Result<String, TokenError> {
        self.token_service.validate(token)
    }
}
