#[cfg(feature = "postgres-sync")]
pub(crate) mod postgres_sync;

#[cfg(feature = "tokio-postgres")]
pub(crate) mod tokio_postgres;

#[cfg(feature = "sqlx-postgres")]
pub(crate) mod sqlx;
