#[cfg(feature = "postgres")]
pub mod postgres;
#[cfg(any(feature = "rusqlite", feature = "turso", feature = "libsql"))]
pub mod sqlite;
