#[cfg(feature = "sqlite")]
#[macro_use]
pub(crate) mod sqlite;

#[cfg(feature = "postgres")]
#[macro_use]
pub(crate) mod postgres;
