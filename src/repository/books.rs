//! Book domain methods on Repository

use super::Repository;
use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookForm},
};

impl Repository {
    /// List all books in insertion order
    pub async fn books_list(&self) -> AppResult<Vec<Book>> {
        let rows = sqlx::query_as::<_, Book>(r#"SELECT id, title, "type" FROM book ORDER BY id"#)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn books_count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM book")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Get book by ID
    pub async fn books_get_by_id(&self, id: i64) -> AppResult<Book> {
        sqlx::query_as::<_, Book>(r#"SELECT id, title, "type" FROM book WHERE id = ?"#)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))
    }

    /// Insert a book (the form must already be validated)
    pub async fn books_create(&self, data: &BookForm) -> AppResult<Book> {
        let row = sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO book (title, "type")
            VALUES (?, ?)
            RETURNING id, title, "type"
            "#,
        )
        .bind(&data.title)
        .bind(&data.category)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Update a book's title and type
    pub async fn books_update(&self, id: i64, data: &BookForm) -> AppResult<Book> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, Book>(
            r#"
            UPDATE book SET title = ?, "type" = ?
            WHERE id = ?
            RETURNING id, title, "type"
            "#,
        )
        .bind(&data.title)
        .bind(&data.category)
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))?;

        tx.commit().await?;
        Ok(row)
    }

    /// Delete a book
    pub async fn books_delete(&self, id: i64) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("DELETE FROM book WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Book {} not found", id)));
        }

        tx.commit().await?;
        Ok(())
    }

    /// Remove every book (initdb --drop)
    pub async fn books_clear(&self) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM book").execute(&self.pool).await?;
        Ok(result.rows_affected())
    }
}
