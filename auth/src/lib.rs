//! Authentication core library
//!
//! Provides the stateless authentication building blocks for the services:
//! - Password hashing (Argon2id, salted, adaptive work factor)
//! - Token issuance and validation (HS256, absolute UTC expiration)
//! - Authentication coordination (login, registration, current-user resolution)
//!
//! Everything here is pure computation over its own inputs: no I/O, no shared
//! mutable state beyond the secret captured at construction. All operations are
//! safe to call concurrently. Hashing is intentionally CPU-expensive; async
//! callers should run it on a blocking thread.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! assert!(!hasher.verify("wrong_password", &hash));
//! ```
//!
//! ## Tokens
//! ```
//! use auth::{TokenConfig, TokenService};
//! use chrono::Duration;
//!
//! let config = TokenConfig::new("secret_key_at_least_32_bytes_long!", Duration::hours(1));
//! let tokens = TokenService::new(&config);
//! let token = tokens.issue("alice@example.com", Duration::seconds(3600)).unwrap();
//! let subject = tokens.validate(&token).unwrap();
//! assert_eq!(subject, "alice@example.com");
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{Authenticator, TokenConfig};
//! use chrono::Duration;
//!
//! let config = TokenConfig::new("secret_key_at_least_32_bytes_long!", Duration::hours(1));
//! let auth = Authenticator::new(&config);
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and issue a token
//! let result = auth.authenticate("password123", &hash, "alice@example.com").unwrap();
//!
//! // Protected request: resolve the current user from the token
//! let subject = auth.resolve_subject(&result.access_token).unwrap();
//! assert_eq!(subject, "alice@example.com");
//! ```

pub mod authenticator;
pub mod password;
pub mod token;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::Claims;
pub use token::TokenConfig;
pub use token::TokenError;
pub use token::TokenService;
