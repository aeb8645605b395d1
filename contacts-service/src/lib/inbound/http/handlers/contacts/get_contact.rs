use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::ContactResponseData;
use crate::domain::contact::models::ContactId;
use crate::domain::user::models::AuthenticatedIdentity;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn get_contact(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthenticatedIdentity>,
    Path(contact_id): Path<String>,
) -> Result<ApiSuccess<ContactResponseData>, ApiError> {
    let contact_id = ContactId::from_string(&contact_id)?;

    state
        .contact_service
        .get_contact(identity.user_id(), contact_id)
        .await
        .map_err(ApiError::from)
        .map(|ref contact| ApiSuccess::new(StatusCode::OK, contact.into()))
}
