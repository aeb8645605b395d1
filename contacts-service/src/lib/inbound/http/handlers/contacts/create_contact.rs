use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;

use super::ContactRequest;
use super::ContactResponseData;
use crate::domain::contact::errors::ContactError;
use crate::domain::user::models::AuthenticatedIdentity;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn create_contact(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthenticatedIdentity>,
    Json(body): Json<ContactRequest>,
) -> Result<ApiSuccess<ContactResponseData>, ApiError> {
    let details = body.try_into_details().map_err(ContactError::from)?;

    state
        .contact_service
        .create_contact(identity.user_id(), details)
        .await
        .map_err(ApiError::from)
        .map(|ref contact| ApiSuccess::new(StatusCode::CREATED, contact.into()))
}
