use std::sync::Arc;

use crate::config::ServerConfig;
use crate::service::MovieService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: cinedex_db::DbPool,
    /// Server configuration, passed in at startup.
    pub config: Arc<ServerConfig>,
    /// Movie use-case layer (repository + image store orchestration).
    pub movies: Arc<MovieService>,
}
