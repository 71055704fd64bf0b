use std::sync::Arc;

use contacts_db::store::ContactStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Contact persistence backend.
    pub store: Arc<dyn ContactStore>,
    /// Server configuration (lookup timeout, JWT settings, ...).
    pub config: Arc<ServerConfig>,
}
