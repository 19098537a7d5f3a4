//! Fallback for unmatched routes

use axum::response::Response;

use super::context::PageContext;

pub async fn not_found(ctx: PageContext) -> Response {
    ctx.not_found()
}
