use axum::extract::rejection::FormRejection;
use axum::extract::State;
use axum::Form;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use crate::inbound::http::router::AppState;

/// OAuth2 password-grant token endpoint.
///
/// Takes a form-encoded `username` (the account email) and `password` and
/// answers with the bare `{access_token, token_type}` shape OAuth2 clients
/// expect, outside the usual response envelope. A form missing either field
/// is answered like any other failed login.
pub async fn issue_token(
    State(state): State<AppState>,
    form: Result<Form<TokenRequestForm>, FormRejection>,
) -> Result<Json<TokenResponse>, ApiError> {
    let Form(form) = form.map_err(|rejection| {
        tracing::info!(status = %rejection.status(), "Login rejected: unreadable form");
        ApiError::Unauthorized(ApiError::INVALID_CREDENTIALS.to_string())
    })?;

    state
        .auth_service
        .login(&form.username, &form.password)
        .await
        .map_err(ApiError::from)
        .map(|issued| {
            Json(TokenResponse {
                access_token: issued.access_token,
                token_type: issued.token_type.to_string(),
            })
        })
}

#[derive(Deserialize)]
pub struct TokenRequestForm {
    username: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}
