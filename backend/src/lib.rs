//! User service library modules.
//!
//! Hexagonal layout: the [`domain`] owns entities, ports, and the service;
//! [`inbound`] adapts HTTP to the driving port; [`outbound`] implements the
//! driven port against PostgreSQL.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

pub use doc::ApiDoc;
pub use middleware::Trace;
