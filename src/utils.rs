use std::{error::Error, fmt::Debug, time::Duration};

use diesel::{r2d2::ConnectionManager, result::DatabaseErrorKind, PgConnection};
use r2d2::{Pool, PooledConnection};
use thiserror::Error;

use crate::{configuration::DatabaseSettings, telemetry::spawn_blocking_with_tracing};

pub type DbPool = Pool<ConnectionManager<PgConnection>>;
pub type DbConnection = PooledConnection<ConnectionManager<PgConnection>>;

pub fn error_fmt_chain(f: &mut std::fmt::Formatter<'_>, source: &Option<impl Error>) -> std::fmt::Result{
    if let Some(error) = source{
        write!(f, "\n\tCaused By:\n\t")?;
        write!(f, "{:?}", &error)?;
        error_fmt_chain(f, &error.source())
    } else {
        Ok(())
    }
}

// Handle to the store shared by every request, cheap to clone
#[derive(Clone)]
pub struct Database{
    pool: DbPool,
    query_timeout: Duration
}

impl Database {
    pub fn new(pool: DbPool, query_timeout: Duration) -> Self{
        Self{ pool, query_timeout }
    }

    // Builds the pool lazily so startup does not block on the first connection
    pub fn connect_lazy(settings: &DatabaseSettings) -> Self{
        let manager = ConnectionManager::<PgConnection>::new(settings.get_database_table_url());
        let pool = Pool::builder()
            .connection_timeout(settings.query_timeout())
            .build_unchecked(manager);

        Self::new(pool, settings.query_timeout())
    }

    pub fn pool(&self) -> &DbPool{
        &self.pool
    }

    /// Runs `op` with a pooled connection on the blocking pool. The caller
    /// stops waiting after the configured query timeout; nothing is retried.
    pub async fn run<F, T>(&self, op: F) -> Result<T, QueryError>
    where
        F: FnOnce(&mut DbConnection) -> Result<T, diesel::result::Error> + Send + 'static,
        T: Send + 'static
    {
        let pool = self.pool.clone();

        let task = spawn_blocking_with_tracing(move || -> Result<T, QueryError> {
            let mut conn = pool.get()?;
            Ok(op(&mut conn)?)
        });

        match tokio::time::timeout(self.query_timeout, task).await {
            Ok(joined) => joined?,
            Err(_) => Err(QueryError::Timeout(self.query_timeout))
        }
    }
}

#[derive(Error)]
pub enum QueryError{
    #[error("Failed to get connection from pool")]
    DbPoolError(#[from] r2d2::Error),
    #[error("Failed due to threadpool error")]
    ThreadpoolError(#[from] tokio::task::JoinError),
    #[error("Query did not finish within {0:?}")]
    Timeout(Duration),
    #[error("Failed to run query")]
    RunQueryError(#[from] diesel::result::Error)
}

impl QueryError {
    pub fn is_unique_violation(&self) -> bool{
        matches!(
            self,
            QueryError::RunQueryError(diesel::result::Error::DatabaseError(
                DatabaseErrorKind::UniqueViolation,
                _
            ))
        )
    }
}

impl Debug for QueryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)?;
        error_fmt_chain(f, &self.source())
    }
}
