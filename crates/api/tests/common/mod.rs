#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use contacts_api::auth::jwt::{generate_access_token, JwtConfig};
use contacts_api::config::{ServerConfig, StoreBackend};
use contacts_api::router::build_app_router;
use contacts_api::state::AppState;
use contacts_core::types::DbId;
use contacts_db::models::contact::{Contact, NewContact, UpdateContact};
use contacts_db::store::{ContactStore, MemoryContactStore, StoreError};

/// Lookup timeout used by tests that exercise the slow-store path.
pub const SHORT_LOOKUP_TIMEOUT: Duration = Duration::from_millis(50);

/// Build a test `ServerConfig` with safe defaults and a known JWT secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        lookup_timeout: Duration::from_millis(5000),
        store_backend: StoreBackend::Memory,
        jwt: JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            access_token_expiry_mins: 15,
        },
    }
}

/// Build the full application router over `store` with the given config.
pub fn build_app_with(store: Arc<dyn ContactStore>, config: ServerConfig) -> Router {
    let state = AppState {
        store,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Build the full application router over `store` with [`test_config`].
pub fn build_test_app(store: Arc<dyn ContactStore>) -> Router {
    build_app_with(store, test_config())
}

/// A fresh in-memory store, shared between the app and the test body.
pub fn memory_store() -> Arc<MemoryContactStore> {
    Arc::new(MemoryContactStore::new())
}

/// Bearer token for `user_id`, signed with the test secret.
pub fn token_for(user_id: DbId) -> String {
    generate_access_token(user_id, &test_config().jwt).expect("token generation should succeed")
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    user_id: Option<DbId>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(user_id) = user_id {
        builder = builder.header("authorization", format!("Bearer {}", token_for(user_id)));
    }
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str, user_id: DbId) -> Response<Body> {
    send(app, Method::GET, uri, Some(user_id), None).await
}

pub async fn get_anonymous(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn post_json(
    app: Router,
    uri: &str,
    user_id: DbId,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, Method::POST, uri, Some(user_id), Some(body)).await
}

pub async fn put_json(
    app: Router,
    uri: &str,
    user_id: DbId,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, Method::PUT, uri, Some(user_id), Some(body)).await
}

pub async fn delete(app: Router, uri: &str, user_id: DbId) -> Response<Body> {
    send(app, Method::DELETE, uri, Some(user_id), None).await
}

/// Send an authenticated request with a body taken verbatim, and a
/// `content-type` header only when one is given.
pub async fn send_raw(
    app: Router,
    method: Method,
    uri: &str,
    user_id: DbId,
    content_type: Option<&str>,
    body: &'static str,
) -> Response<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("authorization", format!("Bearer {}", token_for(user_id)));
    if let Some(content_type) = content_type {
        builder = builder.header("content-type", content_type);
    }
    app.oneshot(builder.body(Body::from(body)).unwrap())
        .await
        .unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Insert a contact directly through the store.
pub async fn seed(store: &MemoryContactStore, owner_id: DbId, name: &str) -> Contact {
    store
        .create(
            owner_id,
            &NewContact {
                name: name.to_string(),
                email: format!("{}@example.com", name.to_lowercase()),
                phone: "555-0100".to_string(),
            },
        )
        .await
        .unwrap()
}

// ---------------------------------------------------------------------------
// Store doubles
// ---------------------------------------------------------------------------

/// Wraps a store and delays every `find_by_id` by `delay`.
pub struct SlowLookupStore {
    pub inner: Arc<MemoryContactStore>,
    pub delay: Duration,
}

#[async_trait]
impl ContactStore for SlowLookupStore {
    async fn list_by_owner(&self, owner_id: DbId) -> Result<Vec<Contact>, StoreError> {
        self.inner.list_by_owner(owner_id).await
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Contact>, StoreError> {
        tokio::time::sleep(self.delay).await;
        self.inner.find_by_id(id).await
    }

    async fn create(&self, owner_id: DbId, input: &NewContact) -> Result<Contact, StoreError> {
        self.inner.create(owner_id, input).await
    }

    async fn update(
        &self,
        id: DbId,
        input: &UpdateContact,
    ) -> Result<Option<Contact>, StoreError> {
        self.inner.update(id, input).await
    }

    async fn delete(&self, id: DbId) -> Result<bool, StoreError> {
        self.inner.delete(id).await
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        self.inner.health_check().await
    }
}

/// A store whose every operation fails.
pub struct FailingStore;

fn pool_timed_out() -> StoreError {
    StoreError::Database(sqlx::Error::PoolTimedOut)
}

#[async_trait]
impl ContactStore for FailingStore {
    async fn list_by_owner(&self, _owner_id: DbId) -> Result<Vec<Contact>, StoreError> {
        Err(pool_timed_out())
    }

    async fn find_by_id(&self, _id: DbId) -> Result<Option<Contact>, StoreError> {
        Err(pool_timed_out())
    }

    async fn create(&self, _owner_id: DbId, _input: &NewContact) -> Result<Contact, StoreError> {
        Err(pool_timed_out())
    }

    async fn update(
        &self,
        _id: DbId,
        _input: &UpdateContact,
    ) -> Result<Option<Contact>, StoreError> {
        Err(pool_timed_out())
    }

    async fn delete(&self, _id: DbId) -> Result<bool, StoreError> {
        Err(pool_timed_out())
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Err(pool_timed_out())
    }
}
