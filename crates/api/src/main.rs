use stockroom_core::{ProductStore, UuidGenerator};

#[tokio::main]
async fn main() {
    stockroom_observability::init();

    let config = stockroom_api::config::AppConfig::from_env();

    let store = ProductStore::new(Box::new(UuidGenerator));
    stockroom_api::app::seed_demo_products(&store);

    let port = config.port;
    let app = stockroom_api::app::build_app(&config, store);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .unwrap_or_else(|e| panic!("failed to bind 0.0.0.0:{port}: {e}"));

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
