//! Error pages

use axum::http::StatusCode;
use maud::{html, Markup};

use super::{layout, Page};

/// Dedicated 404 page
pub fn not_found(page: &Page<'_>) -> Markup {
    layout(page, message_list("Page Not Found - 404"))
}

/// Generic error page for other statuses
pub fn error_page(status: StatusCode, message: &str) -> Markup {
    let line = format!("{} - {}", message, status.as_u16());
    layout(&Page::new("Error", None, &[]), message_list(&line))
}

fn message_list(line: &str) -> Markup {
    html! {
        ul class="book-list" {
            li {
                (line)
                span class="float-right" {
                    a href="/" { "Go Back" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_page() {
        let html = not_found(&Page::new("404", None, &[])).into_string();
        assert!(html.contains("Page Not Found - 404"));
        assert!(html.contains(r#"<a href="/">Go Back</a>"#));
    }

    #[test]
    fn test_error_page() {
        let html = error_page(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_string();
        assert!(html.contains("Internal server error - 500"));
    }
}
