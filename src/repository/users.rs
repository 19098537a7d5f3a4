//! User domain methods on Repository

use super::Repository;
use crate::{error::AppResult, models::user::User};

impl Repository {
    /// First user row, if any. Only one owner is ever displayed.
    pub async fn users_first(&self) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>("SELECT id, name FROM user ORDER BY id LIMIT 1")
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    pub async fn users_create(&self, name: &str) -> AppResult<User> {
        let user = sqlx::query_as::<_, User>("INSERT INTO user (name) VALUES (?) RETURNING id, name")
            .bind(name)
            .fetch_one(&self.pool)
            .await?;
        Ok(user)
    }

    pub async fn users_rename(&self, id: i64, name: &str) -> AppResult<User> {
        let user = sqlx::query_as::<_, User>("UPDATE user SET name = ? WHERE id = ? RETURNING id, name")
            .bind(name)
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(user)
    }

    pub async fn users_clear(&self) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM user").execute(&self.pool).await?;
        Ok(result.rows_affected())
    }
}
