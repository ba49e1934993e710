//! In-memory user store.

use async_trait::async_trait;
use serde_json::json;
use tokio::sync::RwLock;

use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// Append-only user list guarded by a read/write lock.
///
/// Identifier assignment and the append happen under one write guard, so
/// concurrent creations never share an id.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list(&self) -> Result<Vec<User>, AppError> {
        Ok(self.users.read().await.clone())
    }

    async fn create(&self, new_user: NewUser) -> Result<User, AppError> {
        let mut users = self.users.write().await;

        let id = u32::try_from(users.len() + 1).map_err(|_| {
            AppError::internal("User store is full", json!({ "count": users.len() }))
        })?;

        let user = User::from_new(id, new_user);
        users.push(user.clone());

        Ok(user)
    }

    async fn count(&self) -> Result<usize, AppError> {
        Ok(self.users.read().await.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn new_user(name: &str) -> NewUser {
        NewUser {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            password: "secret".to_string(),
        }
    }

    #[tokio::test]
    async fn test_list_empty() {
        let repo = InMemoryUserRepository::new();
        assert!(repo.list().await.unwrap().is_empty());
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let repo = InMemoryUserRepository::new();

        let first = repo.create(new_user("Alice")).await.unwrap();
        let second = repo.create(new_user("Bob")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_list_preserves_insertion_order() {
        let repo = InMemoryUserRepository::new();
        repo.create(new_user("Alice")).await.unwrap();
        repo.create(new_user("Bob")).await.unwrap();
        repo.create(new_user("Carol")).await.unwrap();

        let names: Vec<String> = repo
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|u| u.name)
            .collect();

        assert_eq!(names, vec!["Alice", "Bob", "Carol"]);
    }

    #[tokio::test]
    async fn test_duplicates_are_accepted() {
        let repo = InMemoryUserRepository::new();

        let a = repo.create(new_user("Same")).await.unwrap();
        let b = repo.create(new_user("Same")).await.unwrap();

        assert_eq!(a.email, b.email);
        assert_ne!(a.id, b.id);
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_creates_get_unique_ids() {
        let repo = Arc::new(InMemoryUserRepository::new());

        let handles: Vec<_> = (0..50)
            .map(|i| {
                let repo = repo.clone();
                tokio::spawn(async move { repo.create(new_user(&format!("user{i}"))).await })
            })
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap().unwrap().id);
        }
        ids.sort_unstable();

        assert_eq!(ids, (1..=50).collect::<Vec<u32>>());

        let stored: Vec<u32> = repo.list().await.unwrap().iter().map(|u| u.id).collect();
        assert_eq!(stored, (1..=50).collect::<Vec<u32>>());
    }
}
