use std::sync::Arc;

use axum::{extract::Extension, http::StatusCode};
use serde_json::json;

use crate::app::{dto, errors, AppState};

/// The route table, reused by the welcome response and the 404 fallback.
pub fn endpoint_map() -> serde_json::Value {
    json!({
        "GET /api/products": "list products (query: category, inStock, search, page, limit)",
        "GET /api/products/:id": "get a product by id",
        "POST /api/products": "create a product (requires x-api-key)",
        "PUT /api/products/:id": "update a product (requires x-api-key)",
        "DELETE /api/products/:id": "delete a product (requires x-api-key)",
        "GET /api/products/search/:query": "search products by name, description, or category",
        "GET /api/products/stats": "collection statistics",
    })
}

pub async fn welcome() -> axum::response::Response {
    dto::success(
        StatusCode::OK,
        json!({
            "message": "Welcome to the Stockroom product API",
            "endpoints": endpoint_map(),
        }),
    )
}

/// Router fallback for unmatched method+path pairs.
pub async fn route_not_found(Extension(state): Extension<Arc<AppState>>) -> axum::response::Response {
    errors::error_response(state.production, errors::ApiError::RouteNotFound)
}
