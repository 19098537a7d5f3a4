//! Reading list service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookForm},
    repository::Repository,
};

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Book>> {
        self.repository.books_list().await
    }

    pub async fn count(&self) -> AppResult<i64> {
        self.repository.books_count().await
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<Book> {
        self.repository.books_get_by_id(id).await
    }

    /// Validate and insert a new book
    pub async fn create(&self, form: BookForm) -> AppResult<Book> {
        let form = validated(form)?;
        let book = self.repository.books_create(&form).await?;
        tracing::info!("Created book id={} title={:?}", book.id, book.title);
        Ok(book)
    }

    /// Validate and update an existing book.
    /// A missing book wins over invalid input.
    pub async fn update(&self, id: i64, form: BookForm) -> AppResult<Book> {
        self.repository.books_get_by_id(id).await?;
        let form = validated(form)?;
        let book = self.repository.books_update(id, &form).await?;
        tracing::info!("Updated book id={}", book.id);
        Ok(book)
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.repository.books_delete(id).await?;
        tracing::info!("Deleted book id={}", id);
        Ok(())
    }

    pub async fn clear(&self) -> AppResult<u64> {
        self.repository.books_clear().await
    }
}

fn validated(form: BookForm) -> AppResult<BookForm> {
    let form = form.normalized();
    form.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    Ok(form)
}
