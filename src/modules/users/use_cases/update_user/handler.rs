use crate::modules::users::core::ports::UserStore;
use crate::modules::users::core::user::{Attributes, User};
use crate::modules::users::use_cases::errors::ApplicationError;
use std::sync::Arc;

pub struct UpdateUserHandler<TStore>
where
    TStore: UserStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> UpdateUserHandler<TStore>
where
    TStore: UserStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, id: u64, patch: Attributes) -> Result<User, ApplicationError> {
        match self.store.update(id, patch).await {
            Ok(user) => {
                tracing::info!(user_id = id, "user updated");
                Ok(user)
            }
            Err(error) => {
                tracing::warn!(user_id = id, %error, "update rejected");
                Err(error.into())
            }
        }
    }
}
