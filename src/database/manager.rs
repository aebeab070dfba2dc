use std::time::Duration;

use sqlx::any::{install_default_drivers, AnyPoolOptions};
use sqlx::error::ErrorKind;
use sqlx::AnyPool;
use thiserror::Error;
use tracing::info;

use crate::config::DatabaseConfig;
use crate::database::models::{Character, CharacterFavorite, Planet, PlanetFavorite, User};
use crate::database::repository::Repository;
use crate::database::schema;

/// Errors from the storage layer
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Invalid database URL")]
    InvalidDatabaseUrl,

    #[error("Unsupported database backend: {0}")]
    UnsupportedBackend(String),

    /// Unique, foreign key or not-null violation reported by the store
    #[error("Constraint violation: {0}")]
    Constraint(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error(transparent)]
    Sqlx(sqlx::Error),
}

impl From<sqlx::Error> for DatabaseError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if matches!(
                db_err.kind(),
                ErrorKind::UniqueViolation
                    | ErrorKind::ForeignKeyViolation
                    | ErrorKind::NotNullViolation
                    | ErrorKind::CheckViolation
            ) {
                return DatabaseError::Constraint(db_err.message().to_string());
            }
        }

        match err {
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                DatabaseError::ConnectionError(err.to_string())
            }
            other => DatabaseError::Sqlx(other),
        }
    }
}

/// Relational backends the schema bootstrap knows how to speak to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Postgres,
    Sqlite,
}

impl Backend {
    pub fn from_url(database_url: &str) -> Result<Self, DatabaseError> {
        let url = url::Url::parse(database_url).map_err(|_| DatabaseError::InvalidDatabaseUrl)?;
        match url.scheme() {
            "postgres" | "postgresql" => Ok(Backend::Postgres),
            "sqlite" => Ok(Backend::Sqlite),
            other => Err(DatabaseError::UnsupportedBackend(other.to_string())),
        }
    }
}

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

/// Storage client owning the connection pool.
///
/// Constructed once at startup, shared with handlers through router state and
/// closed on shutdown. Cloning is cheap and shares the pool.
#[derive(Debug, Clone)]
pub struct Database {
    pool: AnyPool,
    backend: Backend,
}

impl Database {
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        let backend = Backend::from_url(&config.url)?;
        install_default_drivers();

        let mut options = AnyPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.connection_timeout));

        if backend == Backend::Sqlite {
            // Favorites may outlive the rows they point at, as the schema allows
            options = options.after_connect(|conn, _meta| {
                Box::pin(async move {
                    sqlx::query("PRAGMA foreign_keys = OFF").execute(&mut *conn).await?;
                    Ok(())
                })
            });

            // Every in-memory SQLite connection is its own database, so pin exactly one
            if is_in_memory(&config.url) {
                options = options
                    .max_connections(1)
                    .min_connections(1)
                    .idle_timeout(None)
                    .max_lifetime(None);
            }
        }

        let pool = options.connect(&config.url).await?;
        info!("Created {:?} database pool", backend);

        Ok(Self { pool, backend })
    }

    /// Create any missing tables
    pub async fn init(&self) -> Result<(), DatabaseError> {
        for statement in schema::create_statements(self.backend) {
            sqlx::query(statement).execute(&self.pool).await?;
        }
        info!("Database schema ready");
        Ok(())
    }

    pub fn backend(&self) -> Backend {
        self.backend
    }

    pub fn users(&self) -> Repository<User> {
        Repository::new(self.pool.clone())
    }

    pub fn characters(&self) -> Repository<Character> {
        Repository::new(self.pool.clone())
    }

    pub fn planets(&self) -> Repository<Planet> {
        Repository::new(self.pool.clone())
    }

    pub fn character_favorites(&self) -> Repository<CharacterFavorite> {
        Repository::new(self.pool.clone())
    }

    pub fn planet_favorites(&self) -> Repository<PlanetFavorite> {
        Repository::new(self.pool.clone())
    }

    /// Pings the pool to ensure connectivity
    pub async fn health_check(&self) -> Result<(), DatabaseError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    pub async fn close(&self) {
        self.pool.close().await;
        info!("Closed database pool");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_backend_from_scheme() {
        assert_eq!(Backend::from_url("postgres://u:p@localhost/db").unwrap(), Backend::Postgres);
        assert_eq!(Backend::from_url("postgresql://localhost/db").unwrap(), Backend::Postgres);
        assert_eq!(Backend::from_url("sqlite:///tmp/test.db?mode=rwc").unwrap(), Backend::Sqlite);
        assert_eq!(Backend::from_url("sqlite::memory:").unwrap(), Backend::Sqlite);
    }

    #[test]
    fn rejects_unknown_backends() {
        assert!(matches!(
            Backend::from_url("mysql://localhost/db"),
            Err(DatabaseError::UnsupportedBackend(scheme)) if scheme == "mysql"
        ));
        assert!(matches!(Backend::from_url("not a url"), Err(DatabaseError::InvalidDatabaseUrl)));
    }

    #[test]
    fn recognises_in_memory_urls() {
        assert!(is_in_memory("sqlite::memory:"));
        assert!(is_in_memory("sqlite://file.db?mode=memory&cache=shared"));
        assert!(!is_in_memory("sqlite:///tmp/test.db"));
    }

    #[tokio::test]
    async fn init_is_idempotent() {
        let config = crate::config::AppConfig::for_database("sqlite::memory:");
        let db = Database::connect(&config.database).await.unwrap();
        db.init().await.unwrap();
        db.init().await.unwrap();
        db.health_check().await.unwrap();
        assert_eq!(db.backend(), Backend::Sqlite);
        db.close().await;
    }
}
