use std::sync::Arc;

use cinedex_db::MovieStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: the store and config are behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// The movie collection. Constructed once at startup and owned here.
    pub store: MovieStore,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
