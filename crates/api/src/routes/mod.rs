pub mod contacts;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /contacts                 list, create (auth required)
/// /contacts/{id}            get, update, delete (auth required)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/contacts", contacts::router())
}
