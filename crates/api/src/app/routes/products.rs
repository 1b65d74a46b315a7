use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension, Path, Query},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::json;

use stockroom_core::{query, search_all, stats, ProductFields, ProductId, validate};

use crate::app::errors::{error_response, ApiError};
use crate::app::{dto, AppState};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/stats", get(get_stats))
        .route("/search/:query", get(search_products))
        .route(
            "/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
}

/// Pull validated fields out of a request body, funnelling both parse
/// failures and field violations into the error taxonomy.
fn validated_fields(
    body: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<ProductFields, ApiError> {
    let Json(payload) = body.map_err(|_| ApiError::MalformedBody)?;
    validate(&payload).map_err(ApiError::Validation)
}

pub async fn list_products(
    Extension(state): Extension<Arc<AppState>>,
    Query(raw): Query<dto::ListQuery>,
) -> axum::response::Response {
    let result = query(&state.store.list(), &raw.into_params());
    dto::success(
        StatusCode::OK,
        json!({ "data": result.page, "pagination": result.pagination }),
    )
}

pub async fn get_product(
    Extension(state): Extension<Arc<AppState>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    match state.store.get(&ProductId::from(id.as_str())) {
        Ok(product) => dto::success(StatusCode::OK, json!({ "data": product })),
        Err(e) => error_response(state.production, e.into()),
    }
}

pub async fn create_product(
    Extension(state): Extension<Arc<AppState>>,
    body: Result<Json<serde_json::Value>, JsonRejection>,
) -> axum::response::Response {
    let fields = match validated_fields(body) {
        Ok(f) => f,
        Err(e) => return error_response(state.production, e),
    };

    let product = state.store.create(fields);
    tracing::info!(id = %product.id, "product created");
    dto::success(StatusCode::CREATED, json!({ "data": product }))
}

pub async fn update_product(
    Extension(state): Extension<Arc<AppState>>,
    Path(id): Path<String>,
    body: Result<Json<serde_json::Value>, JsonRejection>,
) -> axum::response::Response {
    let fields = match validated_fields(body) {
        Ok(f) => f,
        Err(e) => return error_response(state.production, e),
    };

    match state.store.update(&ProductId::from(id.as_str()), fields) {
        Ok(product) => {
            tracing::info!(id = %product.id, "product updated");
            dto::success(StatusCode::OK, json!({ "data": product }))
        }
        Err(e) => error_response(state.production, e.into()),
    }
}

pub async fn delete_product(
    Extension(state): Extension<Arc<AppState>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    match state.store.delete(&ProductId::from(id.as_str())) {
        Ok(product) => {
            tracing::info!(id = %product.id, "product deleted");
            dto::success(StatusCode::OK, json!({ "data": product }))
        }
        Err(e) => error_response(state.production, e.into()),
    }
}

/// Dedicated search: no pagination, no other filters, and unlike the list
/// filter it also matches the category field.
pub async fn search_products(
    Extension(state): Extension<Arc<AppState>>,
    Path(term): Path<String>,
) -> axum::response::Response {
    let hits = search_all(&state.store.list(), &term);
    dto::success(
        StatusCode::OK,
        json!({ "query": term, "results": hits.len(), "data": hits }),
    )
}

/// Statistics always reflect the entire store, never a filtered view.
pub async fn get_stats(Extension(state): Extension<Arc<AppState>>) -> axum::response::Response {
    dto::success(StatusCode::OK, json!({ "data": stats(&state.store.list()) }))
}
