//! Reading list pages and form endpoints

use axum::{
    extract::{
        rejection::{FormRejection, PathRejection},
        Path, State,
    },
    response::Response,
    Form,
};

use super::context::PageContext;
use crate::{
    error::{AppError, AppResult},
    models::BookForm,
    views, AppState,
};

const INVALID_INPUT: &str = "Invalid input.";

/// An unreadable body is treated as an empty form so it fails validation
/// like any other bad input.
fn form_or_empty(form: Result<Form<BookForm>, FormRejection>) -> BookForm {
    match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            tracing::warn!("Unreadable book form: {}", rejection.body_text());
            BookForm::default()
        }
    }
}

/// List all books
pub async fn index(State(state): State<AppState>, ctx: PageContext) -> AppResult<Response> {
    let books = state.services.books.list().await?;
    tracing::debug!("Listing {} books", books.len());
    let html = views::books::index(&ctx.page("Home"), &books);
    Ok(ctx.render(html))
}

/// Create a book from the list page form
pub async fn create(
    State(state): State<AppState>,
    ctx: PageContext,
    form: Result<Form<BookForm>, FormRejection>,
) -> AppResult<Response> {
    match state.services.books.create(form_or_empty(form)).await {
        Ok(_) => Ok(ctx.redirect("/", "Item created.")),
        Err(AppError::Validation(msg)) => {
            tracing::warn!("Rejected new book: {}", msg);
            Ok(ctx.redirect("/", INVALID_INPUT))
        }
        Err(e) => Err(e),
    }
}

/// Show the edit form
pub async fn edit_page(
    State(state): State<AppState>,
    ctx: PageContext,
    book_id: Result<Path<i64>, PathRejection>,
) -> AppResult<Response> {
    let Ok(Path(book_id)) = book_id else {
        return Ok(ctx.not_found());
    };

    let book = match state.services.books.get_by_id(book_id).await {
        Ok(book) => book,
        Err(e) => return ctx.recover(e),
    };

    let html = views::books::edit(&ctx.page("Edit"), &book);
    Ok(ctx.render(html))
}

/// Apply the edit form
pub async fn update(
    State(state): State<AppState>,
    ctx: PageContext,
    book_id: Result<Path<i64>, PathRejection>,
    form: Result<Form<BookForm>, FormRejection>,
) -> AppResult<Response> {
    let Ok(Path(book_id)) = book_id else {
        return Ok(ctx.not_found());
    };

    match state.services.books.update(book_id, form_or_empty(form)).await {
        Ok(_) => Ok(ctx.redirect("/", "Item updated.")),
        Err(AppError::Validation(msg)) => {
            tracing::warn!("Rejected edit of book {}: {}", book_id, msg);
            Ok(ctx.redirect(&format!("/book/edit/{}", book_id), INVALID_INPUT))
        }
        Err(e) => ctx.recover(e),
    }
}

/// Delete a book
pub async fn delete(
    State(state): State<AppState>,
    ctx: PageContext,
    book_id: Result<Path<i64>, PathRejection>,
) -> AppResult<Response> {
    let Ok(Path(book_id)) = book_id else {
        return Ok(ctx.not_found());
    };

    match state.services.books.delete(book_id).await {
        Ok(()) => Ok(ctx.redirect("/", "Item deleted.")),
        Err(e) => ctx.recover(e),
    }
}
