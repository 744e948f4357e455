//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only
//! depend on the domain's driving port and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::UsersService;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Use-case port backing the user routes.
    pub users: Arc<dyn UsersService>,
}

impl HttpState {
    /// Construct state from a users port.
    pub fn new(users: Arc<dyn UsersService>) -> Self {
        Self { users }
    }
}
