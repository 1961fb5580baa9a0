#[cfg(feature = "postgres")]
use std::sync::Arc;
use std::time::Duration;

#[cfg(feature = "postgres")]
use sea_orm::{ConnectOptions, Database, DbConn, DbErr};

/// Configuration for the PostgreSQL connection pool.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout: Duration,
    pub acquire_timeout: Duration,
}

impl DatabaseConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 20,
            min_connections: 2,
            connect_timeout: Duration::from_secs(10),
            acquire_timeout: Duration::from_secs(5),
        }
    }
}

/// Pooled connections to the main database.
///
/// Owned by the process entry point; repositories share the connection
/// through [`DatabasePool::conn`]. Call [`DatabasePool::close`] once the server has
/// stopped so pooled connections are released.
#[cfg(feature = "postgres")]
pub struct DatabasePool {
    main: Arc<DbConn>,
}

#[cfg(feature = "postgres")]
impl DatabasePool {
    /// Open the pool. Fails if the first connection cannot be established.
    pub async fn init(config: &DatabaseConfig) -> Result<Self, DbErr> {
        tracing::info!("Initializing database connections...");

        let opts = ConnectOptions::new(&config.url)
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect_timeout(config.connect_timeout)
            .acquire_timeout(config.acquire_timeout)
            .idle_timeout(Duration::from_secs(300))
            .sqlx_logging(true)
            .to_owned();

        let main = Database::connect(opts).await?;
        tracing::info!(
            max_connections = config.max_connections,
            min_connections = config.min_connections,
            "Database connected"
        );

        Ok(Self::from_conn(main))
    }

    /// Wrap an already-open connection, e.g. a mock one in tests.
    pub fn from_conn(main: DbConn) -> Self {
        Self {
            main: Arc::new(main),
        }
    }

    pub fn conn(&self) -> Arc<DbConn> {
        Arc::clone(&self.main)
    }

    pub async fn ping(&self) -> Result<(), DbErr> {
        self.main.ping().await
    }

    /// Release every pooled connection.
    pub async fn close(self) -> Result<(), DbErr> {
        tracing::info!("Closing database connections");
        match Arc::try_unwrap(self.main) {
            Ok(main) => main.close().await,
            Err(_) => {
                tracing::warn!("Database connections still shared, released on last drop");
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = DatabaseConfig::new("postgres://localhost/cms");

        assert_eq!(config.max_connections, 20);
        assert_eq!(config.min_connections, 2);
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
        assert_eq!(config.acquire_timeout, Duration::from_secs(5));
    }

    #[cfg(feature = "postgres")]
    #[test]
    fn test_repositories_share_one_connection() {
        use sea_orm::{DatabaseBackend, MockDatabase};

        let pool = DatabasePool::from_conn(
            MockDatabase::new(DatabaseBackend::Postgres).into_connection(),
        );

        assert!(Arc::ptr_eq(&pool.conn(), &pool.conn()));
    }
}
