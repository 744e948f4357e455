//! PostgreSQL persistence adapters using Diesel.
//!
//! Concrete implementation of the domain's repository port backed by
//! PostgreSQL via Diesel with async support through `diesel-async` and
//! `bb8` pooling.
//!
//! Principles:
//!
//! - **Thin adapter**: the repository only translates between Diesel rows
//!   and domain types. No business logic lives here.
//! - **Internal models**: row structs and the schema definition are
//!   implementation details, never exposed to the domain.
//! - **Typed errors**: every database failure maps to a port error
//!   variant; only the missing-row and name-conflict signals are
//!   recognized, the rest stay opaque.

mod diesel_user_repository;
mod models;
mod pool;
mod schema;

pub use diesel_user_repository::DieselUserRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
