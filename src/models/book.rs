//! Book model and form input

use serde::Deserialize;
use sqlx::FromRow;
use unicode_normalization::UnicodeNormalization;
use validator::Validate;

pub const TITLE_MAX_LEN: u64 = 60;
pub const CATEGORY_MAX_LEN: u64 = 4;

/// Book entry in the reading list
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Book {
    pub id: i64,
    pub title: String,
    /// Category, e.g. "编译原理"
    #[sqlx(rename = "type")]
    pub category: String,
}

/// Add/edit form submitted from the list and edit pages.
///
/// Missing fields deserialize to empty strings so they fail validation
/// instead of rejecting the request. Lengths are counted in characters.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct BookForm {
    #[serde(default)]
    #[validate(length(min = 1, max = TITLE_MAX_LEN, message = "Title must be 1-60 characters"))]
    pub title: String,
    #[serde(default, rename = "type")]
    #[validate(length(min = 1, max = CATEGORY_MAX_LEN, message = "Type must be 1-4 characters"))]
    pub category: String,
}

impl BookForm {
    pub fn new(title: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            category: category.into(),
        }
    }

    /// NFC-normalize both fields so composed and decomposed input count alike
    pub fn normalized(self) -> Self {
        Self {
            title: self.title.nfc().collect(),
            category: self.category.nfc().collect(),
        }
    }
}
