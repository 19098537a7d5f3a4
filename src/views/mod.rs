//! Server-side HTML rendering
//!
//! Pages are `maud` templates. Every page goes through [`layout`], which
//! draws the owner header, the pending flash messages and the footer around
//! the page body. Interpolated values are escaped by maud.

pub mod books;
pub mod errors;

use maud::{html, Markup, DOCTYPE};

use crate::models::User;

/// Values shared by every rendered page
#[derive(Debug, Clone, Copy, Default)]
pub struct Page<'a> {
    pub title: &'a str,
    pub user: Option<&'a User>,
    pub flashes: &'a [String],
}

impl<'a> Page<'a> {
    pub fn new(title: &'a str, user: Option<&'a User>, flashes: &'a [String]) -> Self {
        Self { title, user, flashes }
    }
}

/// Wrap a page body in the base document
pub fn layout(page: &Page<'_>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (page.title) " - ReadBookList" }
                link rel="stylesheet" href="/static/style.css" type="text/css";
            }
            body {
                @if let Some(user) = page.user {
                    h2 { (user.name) "'s Reading List" }
                } @else {
                    h2 { "Reading List" }
                }
                nav {
                    ul {
                        li { a href="/" { "Home" } }
                    }
                }
                @for message in page.flashes {
                    div class="alert" { (message) }
                }
                (content)
                footer {
                    small { "© ReadBookList" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_with_user_and_flashes() {
        let user = User { id: 1, name: "Xiangshengjie".to_string() };
        let flashes = vec!["Item created.".to_string()];
        let body = html! { p { "body" } };
        let html = layout(&Page::new("Home", Some(&user), &flashes), body).into_string();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<h2>Xiangshengjie's Reading List</h2>"));
        assert!(html.contains(r#"<div class="alert">Item created.</div>"#));
        assert!(html.contains("<p>body</p>"));
        assert!(html.contains("<title>Home - ReadBookList</title>"));
    }

    #[test]
    fn test_layout_without_user() {
        let html = layout(&Page::new("Home", None, &[]), html! {}).into_string();
        assert!(html.contains("<h2>Reading List</h2>"));
        assert!(!html.contains("class=\"alert\""));
    }

    #[test]
    fn test_layout_escapes_user_and_flashes() {
        let user = User { id: 1, name: "<i>Eve</i>".to_string() };
        let flashes = vec!["Tom & \"Jerry\"".to_string()];
        let html = layout(&Page::new("Home", Some(&user), &flashes), html! {}).into_string();

        assert!(html.contains("&lt;i&gt;Eve&lt;/i&gt;'s Reading List"));
        assert!(html.contains("Tom &amp; &quot;Jerry&quot;"));
        assert!(!html.contains("<i>Eve</i>"));
    }
}
