//! Owner user service

use crate::{
    error::{AppError, AppResult},
    models::user::{User, USER_NAME_MAX_LEN},
    repository::Repository,
};

#[derive(Clone)]
pub struct UsersService {
    repository: Repository,
}

impl UsersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// The user shown on every page, if one has been set up
    pub async fn current(&self) -> AppResult<Option<User>> {
        self.repository.users_first().await
    }

    /// Create the owner, or rename it when it already exists
    pub async fn forge(&self, name: &str) -> AppResult<User> {
        let len = name.chars().count();
        if len == 0 || len > USER_NAME_MAX_LEN {
            return Err(AppError::Validation(format!(
                "User name must be 1-{} characters",
                USER_NAME_MAX_LEN
            )));
        }

        match self.repository.users_first().await? {
            Some(user) => self.repository.users_rename(user.id, name).await,
            None => self.repository.users_create(name).await,
        }
    }

    pub async fn clear(&self) -> AppResult<u64> {
        self.repository.users_clear().await
    }
}
