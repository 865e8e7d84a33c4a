/// Errors from the PostgreSQL health probe and migration runner
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// `SELECT 1` did not answer
    #[cfg(feature = "postgres")]
    #[error("PostgreSQL health check failed: {0}")]
    HealthCheck(#[source] sea_orm::DbErr),

    /// Applying pending migrations failed
    #[cfg(feature = "postgres")]
    #[error("Migrations for {app} failed: {source}")]
    Migration {
        app: String,
        #[source]
        source: sea_orm::DbErr,
    },
}

pub type DatabaseResult<T> = Result<T, DatabaseError>;
