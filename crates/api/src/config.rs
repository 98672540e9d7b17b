use std::time::Duration;

use backoffice_warehouse::WarehouseConfig;

/// Server configuration loaded from environment variables.
///
/// All fields except the warehouse secret have defaults suitable for
/// local development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// External warehouse catalog source settings.
    pub warehouse: WarehouseConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                   | Default                 |
    /// |---------------------------|-------------------------|
    /// | `HOST`                    | `0.0.0.0`               |
    /// | `PORT`                    | `3000`                  |
    /// | `CORS_ORIGINS`            | `http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS`    | `30`                    |
    /// | `WAREHOUSE_BASE_URL`      | `http://localhost:8080` |
    /// | `WAREHOUSE_SHARED_SECRET` | (empty)                 |
    /// | `WAREHOUSE_TIMEOUT_SECS`  | `15`                    |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let warehouse_base_url =
            std::env::var("WAREHOUSE_BASE_URL").unwrap_or_else(|_| "http://localhost:8080".into());
        let warehouse_secret = std::env::var("WAREHOUSE_SHARED_SECRET").unwrap_or_default();
        let warehouse_timeout_secs: u64 = std::env::var("WAREHOUSE_TIMEOUT_SECS")
            .unwrap_or_else(|_| "15".into())
            .parse()
            .expect("WAREHOUSE_TIMEOUT_SECS must be a valid u64");

        let warehouse = WarehouseConfig::new(warehouse_base_url, warehouse_secret)
            .with_timeout(Duration::from_secs(warehouse_timeout_secs));

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            warehouse,
        }
    }
}
