use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::contacts::create_contact;
use super::handlers::contacts::delete_contact;
use super::handlers::contacts::get_contact;
use super::handlers::contacts::list_contacts;
use super::handlers::contacts::update_contact;
use super::handlers::current_user::current_user;
use super::handlers::issue_token::issue_token;
use super::handlers::register::register;
use super::handlers::root::root;
use super::middleware::authenticate as auth_middleware;
use crate::domain::contact::ports::ContactServicePort;
use crate::domain::user::ports::AccessGuardPort;
use crate::domain::user::ports::AuthServicePort;

/// Application state shared by all handlers.
///
/// Services sit behind their ports so the same router serves both the
/// PostgreSQL and the in-memory wiring.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthServicePort>,
    pub access_guard: Arc<dyn AccessGuardPort>,
    pub contact_service: Arc<dyn ContactServicePort>,
}

pub fn create_router(
    auth_service: Arc<dyn AuthServicePort>,
    access_guard: Arc<dyn AccessGuardPort>,
    contact_service: Arc<dyn ContactServicePort>,
) -> Router {
    let state = AppState {
        auth_service,
        access_guard,
        contact_service,
    };

    let public_routes = Router::new()
        .route("/", get(root))
        .route("/api/register", post(register))
        .route("/api/token", post(issue_token));

    let protected_routes = Router::new()
        .route("/api/users/me", get(current_user))
        .route("/api/contacts", get(list_contacts).post(create_contact))
        .route(
            "/api/contacts/:contact_id",
            get(get_contact).put(update_contact).delete(delete_contact),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    // Headers are left out of the span: Authorization carries bearer tokens.
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
