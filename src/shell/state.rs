use crate::modules::users::adapters::outbound::user_store_in_memory::InMemoryUserStore;
use crate::modules::users::use_cases::create_user::handler::CreateUserHandler;
use crate::modules::users::use_cases::delete_user::handler::DeleteUserHandler;
use crate::modules::users::use_cases::list_users::handler::ListUsersHandler;
use crate::modules::users::use_cases::update_user::handler::UpdateUserHandler;
use crate::shared::http::auth::AuthPolicy;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub list_users: Arc<ListUsersHandler<InMemoryUserStore>>,
    pub create_user: Arc<CreateUserHandler<InMemoryUserStore>>,
    pub update_user: Arc<UpdateUserHandler<InMemoryUserStore>>,
    pub delete_user: Arc<DeleteUserHandler<InMemoryUserStore>>,
    pub auth: Arc<AuthPolicy>,
}

impl AppState {
    /// Every handler shares the one store instance passed in.
    pub fn new(store: Arc<InMemoryUserStore>, auth: AuthPolicy) -> Self {
        Self {
            list_users: Arc::new(ListUsersHandler::new(store.clone())),
            create_user: Arc::new(CreateUserHandler::new(store.clone())),
            update_user: Arc::new(UpdateUserHandler::new(store.clone())),
            delete_user: Arc::new(DeleteUserHandler::new(store)),
            auth: Arc::new(auth),
        }
    }
}
