use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use super::ApiSuccess;
use super::UserResponseData;
use crate::domain::user::models::AuthenticatedIdentity;

pub async fn current_user(
    Extension(identity): Extension<AuthenticatedIdentity>,
) -> Result<ApiSuccess<UserResponseData>, ApiError> {
    Ok(ApiSuccess::new(StatusCode::OK, identity.user().into()))
}
