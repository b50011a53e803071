// Driver modules
#[cfg(feature = "rusqlite")]
pub mod rusqlite;

#[cfg(feature = "turso")]
pub mod turso;

#[cfg(feature = "libsql")]
pub mod libsql;

// Each driver now has its own Transaction and TransactionBuilder implementations
// to avoid conflicts when multiple drivers are enabled simultaneously