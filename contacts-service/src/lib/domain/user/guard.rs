use std::sync::Arc;

use async_trait::async_trait;
use auth::TokenCodec;

use crate::domain::user::models::AuthenticatedIdentity;
use crate::user::errors::UserError;
use crate::user::ports::AccessGuardPort;
use crate::user::ports::CredentialStore;

/// Request-scoped gate in front of protected operations.
///
/// Nothing is cached between calls: each request decodes its token and
/// resolves the subject against the live store. A token whose user has
/// been deleted stops working at its next use; there is no other form of
/// revocation.
pub struct AccessGuard<S>
where
    S: CredentialStore,
{
    store: Arc<S>,
    token_codec: Arc<TokenCodec>,
}

impl<S> AccessGuard<S>
where
    S: CredentialStore,
{
    pub fn new(store: Arc<S>, token_codec: Arc<TokenCodec>) -> Self {
        Self { store, token_codec }
    }
}

#[async_trait]
impl<S> AccessGuardPort for AccessGuard<S>
where
    S: CredentialStore,
{
    async fn authenticate(&self, token: &str) -> Result<AuthenticatedIdentity, UserError> {
        let claims = self.token_codec.decode(token).map_err(|e| {
            tracing::warn!(reason = %e, "Token rejected");
            UserError::Unauthorized
        })?;

        let subject = claims.subject();
        if subject.is_empty() {
            tracing::warn!("Token rejected: empty subject");
            return Err(UserError::Unauthorized);
        }

        let user = self.store.find_by_email(subject).await?.ok_or_else(|| {
            tracing::warn!("Token rejected: subject is not registered");
            UserError::Unauthorized
        })?;

        Ok(AuthenticatedIdentity::new(user))
    }
}
