//! Domain entities, errors, ports, and services.
//!
//! Purpose: define the strongly typed core the transport and persistence
//! layers adapt to. Types here are transport agnostic; serialisation
//! contracts (serde) are documented on each type.
//!
//! Public surface:
//! - [`User`], [`UserId`], [`UserDraft`], [`UsersResponse`] — the user
//!   resource and its wire shapes.
//! - [`Error`], [`ErrorCode`] — domain error payload and categories.
//! - [`ports`] — hexagonal boundary traits and their errors.
//! - [`UsersServiceImpl`] — production implementation of the driving port.

pub mod error;
pub mod ports;
pub mod user;
mod users_service;

pub use self::error::{Error, ErrorCode};
pub use self::user::{User, UserDraft, UserId, UsersResponse};
pub use self::users_service::UsersServiceImpl;
