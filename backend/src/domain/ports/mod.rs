//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod user_repository;
mod users_service;

pub use user_repository::{InMemoryUserRepository, UserPersistenceError, UserRepository};
pub use users_service::UsersService;
