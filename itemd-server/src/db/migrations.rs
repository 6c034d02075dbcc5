//! Startup schema creation for the items table

use sqlx::PgPool;

use super::DbError;

/// Create the items table if it does not exist.
///
/// Runs once at startup, between pool creation and serving. The layout is
/// fixed; this is not a schema-evolution mechanism.
pub async fn run(pool: &PgPool) -> Result<(), DbError> {
    tracing::info!("Ensuring items table exists");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS items (
            id SERIAL PRIMARY KEY,
            title VARCHAR(200) NOT NULL,
            description TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("Schema ready");
    Ok(())
}
