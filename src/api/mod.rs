//! HTTP handlers and routing

pub mod books;
pub mod context;
pub mod errors;
pub mod flash;
pub mod health;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{compression::CompressionLayer, services::ServeDir, trace::TraceLayer};

use crate::AppState;

/// Create the application router with all routes
pub fn router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.config.server.static_dir);

    Router::new()
        .route("/", get(books::index))
        .route("/book/add", post(books::create))
        .route("/book/edit/:book_id", get(books::edit_page).post(books::update))
        .route("/book/delete/:book_id", post(books::delete))
        .route("/health", get(health::health_check))
        .nest_service("/static", static_files)
        .fallback(errors::not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
}
