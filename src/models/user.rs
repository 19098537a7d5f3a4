//! User model

use sqlx::FromRow;

/// Owner of the reading list, shown in every page header
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    /// Display name (up to 20 characters)
    pub name: String,
}

/// Longest display name accepted by `forge`
pub const USER_NAME_MAX_LEN: usize = 20;
