//! Request-scoped database sessions
//!
//! A [`Session`] is one transaction begun on a pooled connection. Handlers
//! acquire a session, hand it to the repository, and commit once the
//! operation succeeds. A session that goes out of scope uncommitted rolls
//! back and returns its connection to the pool, so every exit path -
//! including error paths - releases the session.

use sqlx::{PgConnection, PgPool, Postgres, Transaction};

use super::DbError;

/// A transactional handle to the store, scoped to one unit of work.
pub struct Session {
    tx: Transaction<'static, Postgres>,
}

impl Session {
    /// Acquire a session from the pool.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Sqlx`] if the store is unreachable or the pool
    /// cannot supply a connection.
    pub async fn acquire(pool: &PgPool) -> Result<Self, DbError> {
        let tx = pool.begin().await?;
        Ok(Self { tx })
    }

    /// Commit the session's transaction, consuming the session.
    pub async fn commit(self) -> Result<(), DbError> {
        self.tx.commit().await?;
        Ok(())
    }

    /// The underlying connection, for executing statements.
    pub(crate) fn conn(&mut self) -> &mut PgConnection {
        &mut *self.tx
    }
}
