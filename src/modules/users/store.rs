use tokio::sync::RwLock;

use super::models::User;
use crate::error::FolioError;

/// Registered accounts in registration order. Grows only.
#[derive(Debug, Default)]
pub struct UserStore {
    users: RwLock<Vec<User>>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new account; usernames are unique.
    pub async fn register(&self, username: &str, password: &str) -> Result<(), FolioError> {
        let mut users = self.users.write().await;
        if users.iter().any(|u| u.username == username) {
            return Err(FolioError::UserExists);
        }
        users.push(User {
            username: username.to_string(),
            password: password.to_string(),
        });
        Ok(())
    }

    /// Succeeds only when both fields match one stored account exactly.
    pub async fn verify(&self, username: &str, password: &str) -> Result<(), FolioError> {
        let users = self.users.read().await;
        users
            .iter()
            .find(|u| u.username == username && u.password == password)
            .map(|_| ())
            .ok_or(FolioError::InvalidCredentials)
    }

    pub async fn is_registered(&self, username: &str) -> bool {
        self.users.read().await.iter().any(|u| u.username == username)
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}
