use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;

use super::ContactRequest;
use super::ContactResponseData;
use crate::domain::contact::errors::ContactError;
use crate::domain::contact::models::ContactId;
use crate::domain::user::models::AuthenticatedIdentity;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn update_contact(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthenticatedIdentity>,
    Path(contact_id): Path<String>,
    Json(body): Json<ContactRequest>,
) -> Result<ApiSuccess<ContactResponseData>, ApiError> {
    // Parse contact ID and request at HTTP boundary
    let contact_id = ContactId::from_string(&contact_id)?;
    let details = body.try_into_details().map_err(ContactError::from)?;

    state
        .contact_service
        .update_contact(identity.user_id(), contact_id, details)
        .await
        .map_err(ApiError::from)
        .map(|ref contact| ApiSuccess::new(StatusCode::OK, contact.into()))
}
