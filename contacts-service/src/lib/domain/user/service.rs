use std::sync::Arc;

use async_trait::async_trait;
use auth::Claims;
use auth::PasswordHasher;
use auth::TokenCodec;
use chrono::Duration;
use chrono::Utc;

use crate::domain::user::models::IssuedToken;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;
use crate::user::ports::AuthServicePort;
use crate::user::ports::CredentialStore;

/// Domain service for registration and login.
///
/// Concrete implementation of AuthServicePort with dependency injection.
/// Every issued token gets the same lifetime, fixed at construction.
pub struct AuthService<S>
where
    S: CredentialStore,
{
    store: Arc<S>,
    password_hasher: PasswordHasher,
    token_codec: Arc<TokenCodec>,
    token_ttl: Duration,
}

impl<S> AuthService<S>
where
    S: CredentialStore,
{
    /// Create a new auth service with injected dependencies.
    ///
    /// # Arguments
    /// * `store` - Credential store implementation
    /// * `token_codec` - Codec holding the signing secret
    /// * `token_ttl` - Lifetime applied to every issued token
    pub fn new(store: Arc<S>, token_codec: Arc<TokenCodec>, token_ttl: Duration) -> Self {
        Self {
            store,
            password_hasher: PasswordHasher::new(),
            token_codec,
            token_ttl,
        }
    }
}

#[async_trait]
impl<S> AuthServicePort for AuthService<S>
where
    S: CredentialStore,
{
    async fn register(&self, command: RegisterUserCommand) -> Result<User, UserError> {
        let RegisterUserCommand {
            email,
            password,
            username,
        } = command;

        // Fast path only; the store's insert is what guarantees uniqueness.
        if self.store.find_by_email(email.as_str()).await?.is_some() {
            tracing::info!("Registration rejected: email already registered");
            return Err(UserError::DuplicateIdentity(email.to_string()));
        }

        let password_hash = self.password_hasher.hash(password.expose())?;

        let user = User {
            id: UserId::new(),
            email,
            username,
            password_hash,
            created_at: Utc::now(),
        };

        let created_user = self.store.insert(user).await?;
        tracing::info!(user_id = %created_user.id, "User registered");

        Ok(created_user)
    }

    async fn login(&self, email: &str, password: &str) -> Result<IssuedToken, UserError> {
        let user = self
            .store
            .find_by_email(email)
            .await?
            .filter(|user| self.password_hasher.verify(password, &user.password_hash))
            .ok_or_else(|| {
                tracing::info!("Login rejected");
                UserError::InvalidCredentials
            })?;

        let access_token = self
            .token_codec
            .encode(Claims::new(user.email.as_str()), self.token_ttl)?;
        tracing::info!(user_id = %user.id, "Access token issued");

        Ok(IssuedToken::bearer(access_token))
    }
}
