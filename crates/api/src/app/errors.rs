//! The terminal error responder.
//!
//! Every handler failure funnels through [`error_response`], which picks
//! the status code, logs the error, and shapes the `success: false`
//! envelope. No other code path builds error responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

use stockroom_auth::AccessError;
use stockroom_core::DomainError;

use crate::app::routes::system::endpoint_map;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Product not found")]
    NotFound,

    /// Carries the full list of violated rules, in check order.
    #[error("Validation failed")]
    Validation(Vec<String>),

    #[error("API key is missing")]
    MissingKey,

    #[error("Invalid API key")]
    InvalidKey,

    #[error("Invalid JSON in request body")]
    MalformedBody,

    #[error("Route not found")]
    RouteNotFound,

    #[error("Internal server error")]
    Unexpected(#[from] anyhow::Error),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::NotFound | Self::RouteNotFound => StatusCode::NOT_FOUND,
            Self::Validation(_) | Self::MalformedBody => StatusCode::BAD_REQUEST,
            Self::MissingKey => StatusCode::UNAUTHORIZED,
            Self::InvalidKey => StatusCode::FORBIDDEN,
            Self::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Self::NotFound => "not_found",
            Self::Validation(_) => "validation_error",
            Self::MissingKey => "missing_key",
            Self::InvalidKey => "invalid_key",
            Self::MalformedBody => "malformed_body",
            Self::RouteNotFound => "route_not_found",
            Self::Unexpected(_) => "unexpected",
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound => Self::NotFound,
            DomainError::Validation(errors) => Self::Validation(errors),
        }
    }
}

impl From<AccessError> for ApiError {
    fn from(err: AccessError) -> Self {
        match err {
            AccessError::MissingKey => Self::MissingKey,
            AccessError::InvalidKey => Self::InvalidKey,
        }
    }
}

/// Map an error to its JSON response, logging it first.
///
/// `production` gates the diagnostic detail on `Unexpected`: kind and
/// internal trace are emitted only when it is false.
pub fn error_response(production: bool, err: ApiError) -> Response {
    tracing::error!(kind = err.kind(), detail = ?err, "request failed: {err}");

    let mut body = json!({
        "success": false,
        "message": err.to_string(),
    });

    match &err {
        ApiError::Validation(errors) => {
            body["errors"] = json!(errors);
        }
        ApiError::RouteNotFound => {
            body["availableEndpoints"] = endpoint_map();
        }
        ApiError::Unexpected(inner) if !production => {
            body["error"] = json!(err.kind());
            body["detail"] = json!(format!("{inner:?}"));
        }
        _ => {}
    }

    (err.status(), axum::Json(body)).into_response()
}
