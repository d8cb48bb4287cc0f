use std::path::PathBuf;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables. The struct is passed
/// explicitly into constructors; nothing reads configuration ad hoc.
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
    /// Prefix the movie routes are mounted under (default: `/api/v1`).
    pub base_path: String,
    /// Root directory for stored uploads (default: `./assets`).
    pub asset_root: PathBuf,
    /// Page number used when a listing request omits `page` (default: `1`).
    pub default_page: i64,
    /// Page size used when a listing request omits `limit` (default: `10`).
    pub default_limit: i64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `BASE_PATH`            | `/api/v1`                  |
    /// | `ASSET_ROOT`           | `./assets`                 |
    /// | `DEFAULT_PAGE`         | `1`                        |
    /// | `DEFAULT_LIMIT`        | `10`                       |
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

        let base_path = std::env::var("BASE_PATH").unwrap_or_else(|_| "/api/v1".into());

        let asset_root =
            PathBuf::from(std::env::var("ASSET_ROOT").unwrap_or_else(|_| "./assets".into()));

        let default_page: i64 = std::env::var("DEFAULT_PAGE")
            .unwrap_or_else(|_| "1".into())
            .parse()
            .expect("DEFAULT_PAGE must be a valid i64");

        let default_limit: i64 = std::env::var("DEFAULT_LIMIT")
            .unwrap_or_else(|_| "10".into())
            .parse()
            .expect("DEFAULT_LIMIT must be a valid i64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            base_path,
            asset_root,
            default_page,
            default_limit,
        }
    }
}
