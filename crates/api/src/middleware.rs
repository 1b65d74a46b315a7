use std::sync::Arc;

use axum::{
    extract::State,
    http::Method,
    middleware::Next,
    response::Response,
};

use crate::app::{errors, AppState};

/// Access gate: mutating verbs require a valid `x-api-key`; reads always
/// pass untouched.
pub async fn api_key_gate(
    State(state): State<Arc<AppState>>,
    req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    if !is_mutating(req.method()) {
        return next.run(req).await;
    }

    // A present but non-UTF8 header value cannot match any secret; treat it
    // as a supplied-and-wrong key.
    let supplied = req
        .headers()
        .get("x-api-key")
        .map(|v| v.to_str().unwrap_or(""));

    match state.policy.authorize(supplied) {
        Ok(()) => next.run(req).await,
        Err(e) => errors::error_response(state.production, e.into()),
    }
}

fn is_mutating(method: &Method) -> bool {
    matches!(*method, Method::POST | Method::PUT | Method::DELETE | Method::PATCH)
}
