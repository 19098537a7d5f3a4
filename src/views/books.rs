//! List and edit pages

use maud::{html, Markup};

use super::{layout, Page};
use crate::models::{book::{CATEGORY_MAX_LEN, TITLE_MAX_LEN}, Book};

/// Home page: count, add form and the list itself
pub fn index(page: &Page<'_>, books: &[Book]) -> Markup {
    let content = html! {
        p { (books.len()) " Titles" }
        form method="post" action="/book/add" {
            "Title "
            input type="text" name="title" autocomplete="off" maxlength=(TITLE_MAX_LEN) required;
            " Type "
            input type="text" name="type" autocomplete="off" maxlength=(CATEGORY_MAX_LEN) required;
            " "
            input class="btn" type="submit" name="submit" value="Add";
        }
        ul class="book-list" {
            @for book in books {
                li {
                    (book.title) " - " (book.category)
                    span class="float-right" {
                        a class="btn" href={ "/book/edit/" (book.id) } { "Edit" }
                        form class="inline-form" method="post" action={ "/book/delete/" (book.id) } {
                            input class="btn" type="submit" name="delete" value="Delete"
                                onclick="return confirm('Are you sure?')";
                        }
                    }
                }
            }
        }
    };

    layout(page, content)
}

/// Edit form pre-filled with the stored values
pub fn edit(page: &Page<'_>, book: &Book) -> Markup {
    let content = html! {
        h3 { "Edit item" }
        form method="post" action={ "/book/edit/" (book.id) } {
            "Title "
            input type="text" name="title" autocomplete="off" maxlength=(TITLE_MAX_LEN) required
                value=(book.title);
            " Type "
            input type="text" name="type" autocomplete="off" maxlength=(CATEGORY_MAX_LEN) required
                value=(book.category);
            " "
            input class="btn" type="submit" name="submit" value="Update";
        }
    };

    layout(page, content)
}
