use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::ContactResponseData;
use crate::domain::user::models::AuthenticatedIdentity;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn list_contacts(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthenticatedIdentity>,
) -> Result<ApiSuccess<Vec<ContactResponseData>>, ApiError> {
    state
        .contact_service
        .list_contacts(identity.user_id())
        .await
        .map_err(ApiError::from)
        .map(|contacts| {
            ApiSuccess::new(
                StatusCode::OK,
                contacts.iter().map(ContactResponseData::from).collect(),
            )
        })
}
