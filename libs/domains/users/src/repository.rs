use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{UserError, UserResult};
use crate::models::User;

/// Repository trait for User persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Store a new user; fails with `DuplicateUserName` if the name is taken
    async fn create(&self, user: User) -> UserResult<User>;

    /// Exact, case-sensitive lookup
    async fn get_by_user_name(&self, user_name: &str) -> UserResult<Option<User>>;

    async fn user_name_exists(&self, user_name: &str) -> UserResult<bool>;
}

/// In-memory implementation of UserRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> UserResult<User> {
        let mut users = self.users.write().await;

        if users.values().any(|u| u.user_name == user.user_name) {
            return Err(UserError::DuplicateUserName(user.user_name));
        }

        users.insert(user.id, user.clone());

        tracing::info!(user_id = %user.id, user_name = %user.user_name, "Created user");
        Ok(user)
    }

    async fn get_by_user_name(&self, user_name: &str) -> UserResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.user_name == user_name).cloned())
    }

    async fn user_name_exists(&self, user_name: &str) -> UserResult<bool> {
        let users = self.users.read().await;
        Ok(users.values().any(|u| u.user_name == user_name))
    }
}
