use crate::modules::users::core::ports::UserStore;
use crate::modules::users::core::user::User;
use std::sync::Arc;

pub struct ListUsersHandler<TStore>
where
    TStore: UserStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> ListUsersHandler<TStore>
where
    TStore: UserStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self) -> Vec<User> {
        let users = self.store.list().await;
        tracing::debug!(count = users.len(), "listed users");
        users
    }
}
