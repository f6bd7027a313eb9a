//! HTTP boundary: router, shared state, and CORS.
//!
//! Handlers live in [`handlers`]; this module wires them into an axum
//! router and applies the permissive CORS middleware the browser
//! frontend expects.

mod handlers;

use std::sync::Arc;

use axum::extract::Request;
use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;

use crate::audit::DeletionAuditLog;
use crate::services::ContactService;

/// Shared state injected into every handler.
#[derive(Clone)]
pub struct AppState {
    /// Contact business operations.
    pub service: Arc<dyn ContactService>,
    /// Best-effort deletion audit log.
    pub audit: Arc<DeletionAuditLog>,
}

impl AppState {
    /// Bundle the service and audit log for handler injection.
    pub fn new(service: Arc<dyn ContactService>, audit: Arc<DeletionAuditLog>) -> Self {
        Self { service, audit }
    }
}

/// Build the application router with all contact routes and CORS.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/contacts",
            get(handlers::list_contacts).post(handlers::create_contact),
        )
        .route(
            "/contacts/:id",
            get(handlers::get_contact)
                .put(handlers::update_contact)
                .delete(handlers::delete_contact),
        )
        .layer(middleware::from_fn(cors))
        .with_state(state)
}

const ALLOWED_HEADERS: &str = "Content-Type, Content-Length, Accept-Encoding, Authorization, \
     Accept, Origin, Cache-Control, X-Requested-With";
const ALLOWED_METHODS: &str = "POST, OPTIONS, GET, PUT, DELETE";

fn apply_cors_headers(response: &mut Response) {
    let headers = response.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOWED_HEADERS),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOWED_METHODS),
    );
}

/// Permissive CORS: preflight requests are answered with 204 without
/// reaching a handler; every other response gets the allow headers.
async fn cors(request: Request, next: Next) -> Response {
    if request.method() == Method::OPTIONS {
        let mut response = StatusCode::NO_CONTENT.into_response();
        apply_cors_headers(&mut response);
        return response;
    }

    let mut response = next.run(request).await;
    apply_cors_headers(&mut response);
    response
}
