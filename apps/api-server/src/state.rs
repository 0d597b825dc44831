//! Application state - shared across all handlers.

use std::sync::Arc;

use quill_core::ports::PostRepository;
use quill_infra::InMemoryPostRepository;
use quill_infra::database::DatabaseConfig;

#[cfg(feature = "postgres")]
use quill_infra::database::{PostgresPostRepository, Store};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
    #[cfg(feature = "postgres")]
    store: Option<Arc<Store>>,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    #[cfg(feature = "postgres")]
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Self {
        let state = if let Some(config) = db_config {
            match Store::init(config).await {
                Ok(store) => {
                    let store = Arc::new(store);
                    let posts = Arc::new(PostgresPostRepository::new(store.conn.clone()));
                    Self {
                        posts,
                        store: Some(store),
                    }
                }
                Err(e) => {
                    tracing::error!(
                        "Failed to connect to database: {}. Using in-memory fallback.",
                        e
                    );
                    Self::in_memory()
                }
            }
        } else {
            tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
            Self::in_memory()
        };

        tracing::info!("Application state initialized");
        state
    }

    #[cfg(not(feature = "postgres"))]
    pub async fn new(_db_config: Option<&DatabaseConfig>) -> Self {
        tracing::info!("Running without postgres feature - using in-memory repository");
        Self::in_memory()
    }

    /// State over the in-memory repository, with no store lifecycle.
    pub fn in_memory() -> Self {
        Self {
            posts: Arc::new(InMemoryPostRepository::new()),
            #[cfg(feature = "postgres")]
            store: None,
        }
    }

    /// Close the connection pool. Call after the HTTP server has stopped.
    #[cfg(feature = "postgres")]
    pub async fn shutdown(self) {
        let Self { posts, store } = self;
        drop(posts);

        if let Some(store) = store {
            match Arc::try_unwrap(store) {
                Ok(store) => {
                    if let Err(e) = store.close().await {
                        tracing::error!("Failed to close database connection: {}", e);
                    }
                }
                Err(_) => tracing::warn!("Store still referenced at shutdown; skipping close"),
            }
        }
    }

    #[cfg(not(feature = "postgres"))]
    pub async fn shutdown(self) {}
}
