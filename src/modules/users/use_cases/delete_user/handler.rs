use crate::modules::users::core::ports::UserStore;
use crate::modules::users::core::user::User;
use crate::modules::users::use_cases::errors::ApplicationError;
use serde::Serialize;
use std::sync::Arc;

pub const DELETED_MESSAGE: &str = "User deleted successfully";

/// Confirmation returned to the caller. `user` holds the removed record as a
/// one element list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeletedUser {
    pub message: String,
    pub user: Vec<User>,
}

pub struct DeleteUserHandler<TStore>
where
    TStore: UserStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> DeleteUserHandler<TStore>
where
    TStore: UserStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, id: u64) -> Result<DeletedUser, ApplicationError> {
        match self.store.delete(id).await {
            Ok(user) => {
                tracing::info!(user_id = id, "user deleted");
                Ok(DeletedUser {
                    message: DELETED_MESSAGE.to_string(),
                    user: vec![user],
                })
            }
            Err(error) => {
                tracing::warn!(user_id = id, %error, "delete rejected");
                Err(error.into())
            }
        }
    }
}
