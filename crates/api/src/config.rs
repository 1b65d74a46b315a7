//! Process configuration, loaded once at startup.

/// Runtime configuration for the HTTP process.
///
/// `production` controls whether unexpected-error responses include
/// internal diagnostic detail; it is threaded explicitly into the error
/// responder rather than read from the environment at response time.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub api_key: String,
    pub production: bool,
}

impl AppConfig {
    /// Read `PORT`, `API_KEY`, and `APP_ENV` from the environment, with
    /// logged dev defaults.
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3000);

        let api_key = std::env::var("API_KEY").unwrap_or_else(|_| {
            tracing::warn!("API_KEY not set; using insecure dev default");
            "dev-secret".to_string()
        });

        let production = std::env::var("APP_ENV").is_ok_and(|v| v == "production");

        Self { port, api_key, production }
    }
}
