//! Data models for ReadBookList

pub mod book;
pub mod user;

// Re-export commonly used types
pub use book::{Book, BookForm};
pub use user::User;
