use crate::modules::users::core::ports::UserStoreError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApplicationError {
    #[error("user {0} not found")]
    NotFound(u64),
}

impl From<UserStoreError> for ApplicationError {
    fn from(error: UserStoreError) -> Self {
        match error {
            UserStoreError::NotFound { id } => ApplicationError::NotFound(id),
        }
    }
}
