//! Driving port for user use cases.
//!
//! Inbound adapters (HTTP handlers) call this port so they depend only on
//! domain types and stay testable without storage. Production backs it with
//! [`crate::domain::UsersServiceImpl`] over a repository adapter.

use async_trait::async_trait;
use pagination::PageParams;

use crate::domain::{Error, User, UserDraft, UserId, UsersResponse};

/// Use-case surface for the user resource, one method per operation.
#[async_trait]
pub trait UsersService: Send + Sync {
    /// Validate and store a new user.
    async fn create_user(&self, draft: UserDraft) -> Result<User, Error>;

    /// Fetch a user by identifier.
    async fn user_by_id(&self, id: UserId) -> Result<User, Error>;

    /// Validate and overwrite an existing user's `name` and `other`.
    async fn update_user_by_id(&self, id: UserId, draft: UserDraft) -> Result<User, Error>;

    /// Delete a user by identifier.
    async fn delete_user_by_id(&self, id: UserId) -> Result<(), Error>;

    /// Return one page of users wrapped in the response envelope.
    async fn list_users(&self, page: PageParams) -> Result<UsersResponse, Error>;
}
