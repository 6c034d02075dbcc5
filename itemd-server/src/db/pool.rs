//! Database connection pool management
//!
//! Uses sqlx PgPool with explicit connection limits. Connections are
//! checked for liveness before being handed out, so a stale idle
//! connection costs a reconnect instead of a failed request.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Connections kept open between requests.
const DEFAULT_POOL_SIZE: u32 = 5;

/// Additional connections allowed beyond the steady-state size under load.
const DEFAULT_MAX_OVERFLOW: u32 = 10;

/// Create a PostgreSQL connection pool with default limits.
///
/// # Arguments
///
/// * `database_url` - PostgreSQL connection string
///
/// # Errors
///
/// Returns an error if the connection fails.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool("postgres://localhost/itemd").await?;
/// ```
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    create_pool_with_options(database_url, DEFAULT_POOL_SIZE, DEFAULT_MAX_OVERFLOW).await
}

/// Create a PostgreSQL connection pool with custom limits.
///
/// # Arguments
///
/// * `database_url` - PostgreSQL connection string
/// * `pool_size` - connections kept open between requests
/// * `max_overflow` - extra connections allowed beyond `pool_size`
pub async fn create_pool_with_options(
    database_url: &str,
    pool_size: u32,
    max_overflow: u32,
) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .min_connections(pool_size)
        .max_connections(pool_size + max_overflow)
        .test_before_acquire(true)
        .connect(database_url)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    // Store-backed tests require a real database:
    // DATABASE_URL=postgres://... cargo test -p itemd-server -- --ignored

    #[tokio::test]
    #[ignore = "requires database"]
    async fn pool_acquires_connection() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");

        let result: (i32,) = sqlx::query_as("SELECT 1")
            .fetch_one(&pool)
            .await
            .expect("query failed");

        assert_eq!(result.0, 1);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn overflow_requests_wait_instead_of_failing() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        // Tiny pool: one steady connection plus one overflow slot
        let pool = create_pool_with_options(&url, 1, 1)
            .await
            .expect("pool creation failed");

        // More tasks than connections: the bound queues them, none fail
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let pool = pool.clone();
                tokio::spawn(async move {
                    let row: (i32,) = sqlx::query_as("SELECT $1::int")
                        .bind(i)
                        .fetch_one(&pool)
                        .await
                        .expect("query failed");
                    row.0
                })
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            assert_eq!(handle.await.expect("task panicked"), i as i32);
        }
    }
}
