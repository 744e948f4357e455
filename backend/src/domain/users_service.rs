//! User domain service.
//!
//! Implements the driving [`UsersService`] port over a repository adapter.
//! Enforces the single business rule (a user name must not be empty) and
//! remaps repository signals into domain error kinds. Each call is a
//! stateless request/response transaction; there are no retries and no
//! partial-failure handling.

use std::sync::Arc;

use async_trait::async_trait;
use pagination::PageParams;

use crate::domain::ports::{UserPersistenceError, UserRepository, UsersService};
use crate::domain::{Error, User, UserDraft, UserId, UsersResponse};

/// Production [`UsersService`] implementation backed by a repository port.
#[derive(Clone)]
pub struct UsersServiceImpl {
    repository: Arc<dyn UserRepository>,
}

impl UsersServiceImpl {
    /// Create a service over the given repository.
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }
}

fn validate(draft: &UserDraft) -> Result<(), Error> {
    // Exact empty-string check; whitespace-only names are accepted.
    if draft.name.is_empty() {
        return Err(Error::invalid_request("user name empty"));
    }
    Ok(())
}

fn map_persistence_error(error: UserPersistenceError) -> Error {
    match error {
        UserPersistenceError::NotFound => Error::not_found("user not found"),
        UserPersistenceError::DuplicateName { .. } => Error::conflict("user already exists"),
        UserPersistenceError::Connection { message } | UserPersistenceError::Query { message } => {
            Error::internal(message)
        }
    }
}

#[async_trait]
impl UsersService for UsersServiceImpl {
    async fn create_user(&self, draft: UserDraft) -> Result<User, Error> {
        validate(&draft)?;
        self.repository
            .create(&draft)
            .await
            .map_err(map_persistence_error)
    }

    async fn user_by_id(&self, id: UserId) -> Result<User, Error> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(map_persistence_error)
    }

    async fn update_user_by_id(&self, id: UserId, draft: UserDraft) -> Result<User, Error> {
        validate(&draft)?;
        self.repository
            .update(id, &draft)
            .await
            .map_err(map_persistence_error)
    }

    async fn delete_user_by_id(&self, id: UserId) -> Result<(), Error> {
        self.repository
            .delete(id)
            .await
            .map_err(map_persistence_error)
    }

    async fn list_users(&self, page: PageParams) -> Result<UsersResponse, Error> {
        let users = self
            .repository
            .list(page)
            .await
            .map_err(map_persistence_error)?;
        Ok(UsersResponse::from(users))
    }
}
