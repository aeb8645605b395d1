//! Credential primitives
//!
//! Provides the two stateless building blocks of token authentication:
//! - Password hashing (Argon2id)
//! - Access token signing and verification (HS256 JWT)
//!
//! Neither component performs I/O. Services combine them with their own
//! credential storage.
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
//! assert!(!hasher.verify("not_my_password", &hash));
//! ```
//!
//! ## Access Tokens
//! ```
//! use auth::{Claims, TokenCodec};
//! use chrono::Duration;
//!
//! let codec = TokenCodec::new(b"secret_key_at_least_32_bytes_long!");
//! let token = codec.encode(Claims::new("a@x.com"), Duration::minutes(15)).unwrap();
//! let claims = codec.decode(&token).unwrap();
//! assert_eq!(claims.subject(), "a@x.com");
//! ```

pub mod password;
pub mod token;

pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::Claims;
pub use token::TokenCodec;
pub use token::TokenError;
