use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use crate::domain::contact::models::ContactId;
use crate::domain::user::models::AuthenticatedIdentity;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn delete_contact(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthenticatedIdentity>,
    Path(contact_id): Path<String>,
) -> Result<ApiSuccess<()>, ApiError> {
    let contact_id = ContactId::from_string(&contact_id)?;

    state
        .contact_service
        .delete_contact(identity.user_id(), contact_id)
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::new(StatusCode::NO_CONTENT, ()))
}
