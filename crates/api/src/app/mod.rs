//! HTTP application wiring (axum router + state).
//!
//! Layout, one concern per file:
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: query/response DTOs and envelope helpers
//! - `errors.rs`: the terminal error responder

use std::sync::Arc;

use axum::{routing::get, Extension, Router};

use stockroom_auth::ApiKeyPolicy;
use stockroom_core::{ProductFields, ProductStore};

use crate::config::AppConfig;
use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;

/// Shared per-process state: the store, the access-gate policy, and the
/// diagnostic-detail switch for the error responder.
pub struct AppState {
    pub store: ProductStore,
    pub policy: ApiKeyPolicy,
    pub production: bool,
}

/// Build the full HTTP router (public entrypoint used by `main.rs` and the
/// black-box tests).
pub fn build_app(config: &AppConfig, store: ProductStore) -> Router {
    let state = Arc::new(AppState {
        store,
        policy: ApiKeyPolicy::new(config.api_key.clone()),
        production: config.production,
    });

    // Key gate applies to the product routes only; inside it, reads pass
    // and mutating verbs are checked.
    let products = routes::products::router().layer(axum::middleware::from_fn_with_state(
        state.clone(),
        middleware::api_key_gate,
    ));

    Router::new()
        .route("/", get(routes::system::welcome))
        .nest("/api/products", products)
        .fallback(routes::system::route_not_found)
        .layer(Extension(state))
}

/// Seed a fresh process with a small demo catalog so the API serves data
/// out of the box. Tests build their own stores and skip this.
pub fn seed_demo_products(store: &ProductStore) {
    let demo = [
        ("Laptop", "High-performance laptop with 16GB RAM", 1200.0, "electronics", true),
        ("Smartphone", "Latest model with 128GB storage", 800.0, "electronics", true),
        ("Coffee Maker", "Programmable coffee maker with timer", 50.0, "kitchen", false),
    ];
    for (name, description, price, category, in_stock) in demo {
        store.create(ProductFields {
            name: name.to_string(),
            description: description.to_string(),
            price,
            category: category.to_string(),
            in_stock,
        });
    }
}
