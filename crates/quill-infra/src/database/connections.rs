use std::time::Duration;

#[cfg(feature = "postgres")]
use sea_orm::{ConnectOptions, Database, DbConn, DbErr};

/// Configuration for the backing database.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

/// Handle to the backing store.
///
/// Constructed explicitly with [`Store::init`] and torn down with
/// [`Store::close`]; repositories receive a clone of the pooled connection
/// at construction instead of reaching for ambient state.
#[cfg(feature = "postgres")]
pub struct Store {
    pub conn: DbConn,
}

#[cfg(feature = "postgres")]
impl Store {
    /// Open the connection pool.
    pub async fn init(config: &DatabaseConfig) -> Result<Self, DbErr> {
        tracing::info!("Initializing database connection...");

        let opts = ConnectOptions::new(&config.url)
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .sqlx_logging(true)
            .to_owned();

        let conn = Database::connect(opts).await?;
        tracing::info!("Database connected (pool: {})", config.max_connections);

        Ok(Self { conn })
    }

    /// Close the connection pool.
    pub async fn close(self) -> Result<(), DbErr> {
        tracing::info!("Closing database connection...");
        self.conn.close().await
    }
}
