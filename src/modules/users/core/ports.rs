// Ports describe what the users core needs from storage, without implementing it.
//
// Adapters implement these traits in the adapters layer. The in memory adapter
// is the only one for now; handlers code against the trait so tests and a
// future persistent store can swap it.

use crate::modules::users::core::user::{Attributes, User};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UserStoreError {
    #[error("user {id} not found")]
    NotFound { id: u64 },
}

#[async_trait]
pub trait UserStore: Send + Sync {
    /// All users in creation order.
    async fn list(&self) -> Vec<User>;

    async fn get(&self, id: u64) -> Option<User>;

    /// Assigns the next id. Ids are never reused, even after a delete.
    async fn create(&self, attributes: Attributes) -> User;

    async fn update(&self, id: u64, patch: Attributes) -> Result<User, UserStoreError>;

    async fn delete(&self, id: u64) -> Result<User, UserStoreError>;
}
