use crate::modules::users::core::ports::UserStore;
use crate::modules::users::core::user::{Attributes, User};
use std::sync::Arc;

pub struct CreateUserHandler<TStore>
where
    TStore: UserStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> CreateUserHandler<TStore>
where
    TStore: UserStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    /// Any mapping is accepted, including an empty one.
    pub async fn handle(&self, attributes: Attributes) -> User {
        let user = self.store.create(attributes).await;
        tracing::info!(user_id = user.id, fields = user.attributes.len(), "user created");
        user
    }
}
