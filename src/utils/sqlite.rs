use std::str::FromStr;
use std::time::Duration;
use sqlx::ConnectOptions;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::info;
use crate::core::library::LibraryResult;

// Opens the catalog's single sqlite handle. The pool is capped at one
// connection so every statement is serialized through it.
pub async fn open_pool(database_url: &str) -> LibraryResult<SqlitePool> {
    let in_memory = is_in_memory(database_url);
    let connect_opts = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .busy_timeout(Duration::from_secs(5))
        .disable_statement_logging();

    let mut pool_opts = SqlitePoolOptions::new()
        .max_connections(1)
        .acquire_timeout(Duration::from_secs(30));
    if in_memory {
        // an in-memory database only lives as long as its connection
        pool_opts = pool_opts
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None);
    }

    let pool = pool_opts.connect_with(connect_opts).await?;
    info!("opened sqlite pool in_memory={}", in_memory);
    Ok(pool)
}

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}
