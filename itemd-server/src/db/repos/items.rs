//! Item repository
//!
//! The sole reader and writer of the `items` table. Four operations:
//! liveness probe, insert, ordered full-scan list, delete-by-id. Each is a
//! single self-contained statement; no state is carried between calls.

use sqlx::FromRow;

use crate::db::{DbError, Session};
use crate::models::ItemTitle;

/// Item record from the database
#[derive(Debug, Clone, FromRow)]
pub struct Item {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
}

/// Item repository, borrowing the request's session
pub struct ItemRepo<'a> {
    session: &'a mut Session,
}

impl<'a> ItemRepo<'a> {
    pub fn new(session: &'a mut Session) -> Self {
        Self { session }
    }

    /// Liveness probe: succeeds iff the store answers.
    ///
    /// Never touches item data; repeated calls mutate nothing.
    pub async fn probe(&mut self) -> Result<(), DbError> {
        sqlx::query("SELECT 1").execute(self.session.conn()).await?;
        Ok(())
    }

    /// Insert a new item and return it with the store-assigned id.
    ///
    /// The title is validated (trimmed, non-empty) at construction of
    /// [`ItemTitle`], before this method is reachable.
    pub async fn create(
        &mut self,
        title: ItemTitle,
        description: Option<String>,
    ) -> Result<Item, DbError> {
        let item: Item = sqlx::query_as(
            r#"
            INSERT INTO items (title, description)
            VALUES ($1, $2)
            RETURNING id, title, description
            "#,
        )
        .bind(title.as_str())
        .bind(description.as_deref())
        .fetch_one(self.session.conn())
        .await?;

        Ok(item)
    }

    /// List all items, most recently created first.
    pub async fn list(&mut self) -> Result<Vec<Item>, DbError> {
        let items: Vec<Item> =
            sqlx::query_as("SELECT id, title, description FROM items ORDER BY id DESC")
                .fetch_all(self.session.conn())
                .await?;

        Ok(items)
    }

    /// Delete an item by id.
    ///
    /// One atomic statement; zero affected rows means the id does not exist.
    pub async fn delete(&mut self, id: i32) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM items WHERE id = $1")
            .bind(id)
            .execute(self.session.conn())
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound { resource: "item", id });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{migrations, pool::create_pool};
    use sqlx::PgPool;

    // Store-backed tests run against a scratch database and truncate the
    // items table; run them serially:
    // DATABASE_URL=postgres://... cargo test -p itemd-server -- --ignored --test-threads=1

    async fn test_pool() -> PgPool {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");
        migrations::run(&pool).await.expect("migrations failed");
        sqlx::query("TRUNCATE items RESTART IDENTITY")
            .execute(&pool)
            .await
            .expect("truncate failed");
        pool
    }

    async fn create_one(pool: &PgPool, title: &str, description: Option<&str>) -> Item {
        let mut session = Session::acquire(pool).await.expect("acquire failed");
        let item = ItemRepo::new(&mut session)
            .create(
                ItemTitle::new(title).expect("valid title"),
                description.map(str::to_owned),
            )
            .await
            .expect("create failed");
        session.commit().await.expect("commit failed");
        item
    }

    async fn list_all(pool: &PgPool) -> Vec<Item> {
        let mut session = Session::acquire(pool).await.expect("acquire failed");
        ItemRepo::new(&mut session).list().await.expect("list failed")
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn probe_is_idempotent() {
        let pool = test_pool().await;
        create_one(&pool, "untouched", None).await;

        for _ in 0..3 {
            let mut session = Session::acquire(&pool).await.expect("acquire failed");
            ItemRepo::new(&mut session).probe().await.expect("probe failed");
        }

        assert_eq!(list_all(&pool).await.len(), 1);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn create_returns_populated_entity() {
        let pool = test_pool().await;

        let item = create_one(&pool, "  Buy milk  ", None).await;

        assert!(item.id > 0);
        assert_eq!(item.title, "Buy milk");
        assert_eq!(item.description, None);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn list_empty_table_is_empty() {
        let pool = test_pool().await;
        assert!(list_all(&pool).await.is_empty());
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn newest_item_lists_first() {
        let pool = test_pool().await;

        let first = create_one(&pool, "first", None).await;
        let second = create_one(&pool, "second", Some("ch.1")).await;
        assert!(second.id > first.id);

        let items = list_all(&pool).await;
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, second.id);
        assert_eq!(items[0].description.as_deref(), Some("ch.1"));
        assert_eq!(items[1].id, first.id);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn delete_removes_exactly_that_row() {
        let pool = test_pool().await;

        let keep = create_one(&pool, "keep", None).await;
        let doomed = create_one(&pool, "doomed", None).await;

        let mut session = Session::acquire(&pool).await.expect("acquire failed");
        ItemRepo::new(&mut session)
            .delete(doomed.id)
            .await
            .expect("delete failed");
        session.commit().await.expect("commit failed");

        let items = list_all(&pool).await;
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, keep.id);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn delete_missing_id_is_not_found() {
        let pool = test_pool().await;
        let survivor = create_one(&pool, "survivor", None).await;

        let mut session = Session::acquire(&pool).await.expect("acquire failed");
        let err = ItemRepo::new(&mut session)
            .delete(survivor.id + 1)
            .await
            .unwrap_err();

        assert!(matches!(err, DbError::NotFound { resource: "item", .. }));
        // Table unchanged
        assert_eq!(list_all(&pool).await.len(), 1);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn crud_scenario() {
        let pool = test_pool().await;

        let milk = create_one(&pool, "Buy milk", None).await;
        let book = create_one(&pool, "Read book", Some("ch.1")).await;

        let items = list_all(&pool).await;
        assert_eq!(
            items.iter().map(|i| i.id).collect::<Vec<_>>(),
            vec![book.id, milk.id]
        );

        let mut session = Session::acquire(&pool).await.expect("acquire failed");
        ItemRepo::new(&mut session)
            .delete(milk.id)
            .await
            .expect("delete failed");
        session.commit().await.expect("commit failed");

        let items = list_all(&pool).await;
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, book.id);

        let mut session = Session::acquire(&pool).await.expect("acquire failed");
        let err = ItemRepo::new(&mut session).delete(milk.id).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }
}
