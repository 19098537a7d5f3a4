//! Per-request page context: owner user and flash messages

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::SignedCookieJar;
use maud::Markup;

use super::flash;
use crate::{error::AppError, models::User, views, AppResult, AppState};

/// Injected into every handler that renders a page or redirects.
///
/// Rendering consumes the pending flash messages; redirecting carries them
/// forward together with the new one.
pub struct PageContext {
    pub user: Option<User>,
    pub flashes: Vec<String>,
    jar: SignedCookieJar,
}

#[async_trait]
impl FromRequestParts<AppState> for PageContext {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let jar = SignedCookieJar::from_headers(&parts.headers, state.cookie_key.clone());
        let (jar, flashes) = flash::take(jar);
        let user = state.services.users.current().await?;

        Ok(Self { user, flashes, jar })
    }
}

impl PageContext {
    pub fn page<'a>(&'a self, title: &'a str) -> views::Page<'a> {
        views::Page::new(title, self.user.as_ref(), &self.flashes)
    }

    /// Send a rendered page and clear the flash cookie
    pub fn render(self, html: Markup) -> Response {
        self.render_with_status(StatusCode::OK, html)
    }

    pub fn render_with_status(self, status: StatusCode, html: Markup) -> Response {
        (status, self.jar, html).into_response()
    }

    /// Redirect with a flash message for the next page
    pub fn redirect(mut self, to: &str, message: &str) -> Response {
        self.flashes.push(message.to_string());
        let jar = flash::store(self.jar, &self.flashes);
        (jar, Redirect::to(to)).into_response()
    }

    pub fn not_found(self) -> Response {
        let html = views::errors::not_found(&self.page("Page Not Found"));
        self.render_with_status(StatusCode::NOT_FOUND, html)
    }

    /// Render not-found with this context; pass other errors on
    pub fn recover(self, err: AppError) -> AppResult<Response> {
        match err {
            AppError::NotFound(msg) => {
                tracing::debug!("Not found: {}", msg);
                Ok(self.not_found())
            }
            other => Err(other),
        }
    }
}
