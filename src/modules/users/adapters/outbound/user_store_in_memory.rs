// In memory implementation of the UserStore port.
//
// Responsibilities
// - Keep users in creation order together with the id counter.
// - Guard both behind one lock: a single writer at a time, readers share.

use crate::modules::users::core::ports::{UserStore, UserStoreError};
use crate::modules::users::core::user::{Attributes, User};
use tokio::sync::RwLock;

struct Users {
    rows: Vec<User>,
    next_id: u64,
}

impl Users {
    fn position(&self, id: u64) -> Option<usize> {
        self.rows.iter().position(|user| user.id == id)
    }
}

pub struct InMemoryUserStore {
    inner: RwLock<Users>,
}

impl Default for InMemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Users {
                rows: Vec::new(),
                next_id: 1,
            }),
        }
    }
}

#[async_trait::async_trait]
impl UserStore for InMemoryUserStore {
    async fn list(&self) -> Vec<User> {
        self.inner.read().await.rows.clone()
    }

    async fn get(&self, id: u64) -> Option<User> {
        let guard = self.inner.read().await;
        guard.position(id).map(|index| guard.rows[index].clone())
    }

    async fn create(&self, attributes: Attributes) -> User {
        let mut guard = self.inner.write().await;
        let id = guard.next_id;
        guard.next_id += 1;
        let user = User::new(id, attributes);
        guard.rows.push(user.clone());
        user
    }

    async fn update(&self, id: u64, patch: Attributes) -> Result<User, UserStoreError> {
        let mut guard = self.inner.write().await;
        let index = guard.position(id).ok_or(UserStoreError::NotFound { id })?;
        let user = &mut guard.rows[index];
        user.merge(patch);
        Ok(user.clone())
    }

    async fn delete(&self, id: u64) -> Result<User, UserStoreError> {
        let mut guard = self.inner.write().await;
        let index = guard.position(id).ok_or(UserStoreError::NotFound { id })?;
        Ok(guard.rows.remove(index))
    }
}
