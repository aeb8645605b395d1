use async_trait::async_trait;

use crate::domain::user::models::AuthenticatedIdentity;
use crate::domain::user::models::IssuedToken;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::user::errors::UserError;

/// Port for registration and login.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register a new user.
    ///
    /// # Arguments
    /// * `command` - Validated email, plaintext password and optional username
    ///
    /// # Returns
    /// Stored user entity
    ///
    /// # Errors
    /// * `DuplicateIdentity` - Email is already registered
    /// * `Password` - Hashing failed
    /// * `DatabaseError` - Store operation failed
    async fn register(&self, command: RegisterUserCommand) -> Result<User, UserError>;

    /// Exchange email and password for a bearer token.
    ///
    /// # Arguments
    /// * `email` - Login subject, matched exactly as stored
    /// * `password` - Plaintext password
    ///
    /// # Returns
    /// Issued bearer token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password (indistinguishable)
    /// * `Token` - Token signing failed
    /// * `DatabaseError` - Store operation failed
    async fn login(&self, email: &str, password: &str) -> Result<IssuedToken, UserError>;
}

/// Port for request-scoped token checks.
#[async_trait]
pub trait AccessGuardPort: Send + Sync + 'static {
    /// Resolve a bearer token to the user it speaks for.
    ///
    /// # Arguments
    /// * `token` - Raw token string
    ///
    /// # Returns
    /// Identity wrapping the live user record
    ///
    /// # Errors
    /// * `Unauthorized` - Token malformed, expired, tampered, or subject unknown
    /// * `DatabaseError` - Store operation failed
    async fn authenticate(&self, token: &str) -> Result<AuthenticatedIdentity, UserError>;
}

/// Persistence operations the credential core relies on.
///
/// Both operations must be individually atomic, and `insert` must enforce
/// email uniqueness even when callers race.
#[async_trait]
pub trait CredentialStore: Send + Sync + 'static {
    /// Retrieve user by email address (exact match).
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError>;

    /// Persist new user.
    ///
    /// # Returns
    /// Stored user entity
    ///
    /// # Errors
    /// * `DuplicateIdentity` - Email is already registered
    /// * `DatabaseError` - Store operation failed
    async fn insert(&self, user: User) -> Result<User, UserError>;
}
