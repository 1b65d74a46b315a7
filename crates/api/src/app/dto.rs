use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use serde_json::json;

use stockroom_core::ListParams;

/// Raw list-query parameters as they arrive on the wire. Numeric fields
/// stay strings here so non-numeric input can fall back to defaults
/// instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    pub category: Option<String>,
    pub in_stock: Option<String>,
    pub search: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl ListQuery {
    pub fn into_params(self) -> ListParams {
        ListParams::from_raw(
            self.category,
            self.in_stock,
            self.search,
            self.page.as_deref(),
            self.limit.as_deref(),
        )
    }
}

/// Wrap a payload in the `success: true` envelope.
pub fn success(status: StatusCode, mut body: serde_json::Value) -> Response {
    body["success"] = json!(true);
    (status, axum::Json(body)).into_response()
}
