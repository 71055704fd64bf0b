use std::net::SocketAddr;
use std::sync::Arc;

use contacts_db::store::{ContactStore, MemoryContactStore, PgContactStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use contacts_api::config::{ServerConfig, StoreBackend};
use contacts_api::router::build_app_router;
use contacts_api::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "contacts_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(
        host = %config.host,
        port = %config.port,
        lookup_timeout_ms = config.lookup_timeout.as_millis() as u64,
        store_backend = ?config.store_backend,
        "Loaded server configuration",
    );

    // --- Store ---
    let store = connect_store(config.store_backend).await;

    // --- App state ---
    let state = AppState {
        store,
        config: Arc::new(config.clone()),
    };

    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Build the configured contact store, connecting and migrating Postgres
/// when selected.
async fn connect_store(backend: StoreBackend) -> Arc<dyn ContactStore> {
    match backend {
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory contact store; data will not survive restarts");
            Arc::new(MemoryContactStore::new())
        }
        StoreBackend::Postgres => {
            let database_url =
                std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

            let pool = contacts_db::create_pool(&database_url)
                .await
                .expect("Failed to connect to database");
            tracing::info!("Database connection pool created");

            contacts_db::health_check(&pool)
                .await
                .expect("Database health check failed");
            tracing::info!("Database health check passed");

            contacts_db::run_migrations(&pool)
                .await
                .expect("Failed to run database migrations");
            tracing::info!("Database migrations applied");

            Arc::new(PgContactStore::new(pool))
        }
    }
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
