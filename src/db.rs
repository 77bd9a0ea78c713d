//! PostgreSQL pool construction and schema migrations.
//!
//! The pool is the only shared resource in the process. Handlers check
//! connections out through `State<DbPool>`; a checked-out connection goes
//! back to the pool when dropped, including on error paths, so no request
//! can leak one.

use sqlx::{Pool, Postgres};

/// Shorthand for the PostgreSQL connection pool shared across handlers.
pub type DbPool = Pool<Postgres>;

/// Maximum connections held by the pool. The API is small and every
/// request does at most a couple of queries, so a handful is plenty.
const MAX_CONNECTIONS: u32 = 5;

/// Open a connection pool against the configured database.
///
/// Connections are established lazily as requests need them and kept
/// alive for reuse.
///
/// # Errors
///
/// Returns an error if the connection string is malformed, the server is
/// unreachable, or authentication fails.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    sqlx::postgres::PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect(database_url)
        .await
}

/// Apply pending migrations from the `migrations/` directory.
///
/// Runs at startup, before the server binds. The `stations` and `readings`
/// tables come from here; sqlx records applied migrations in its
/// `_sqlx_migrations` table so each file runs exactly once.
///
/// # Errors
///
/// Returns an error if a migration fails to apply or a previously applied
/// migration file has been modified.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    // Migration files are embedded into the binary at compile time
    sqlx::migrate!("./migrations").run(pool).await
}
