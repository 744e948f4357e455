//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] generates the OpenAPI specification for the REST API. It
//! registers every HTTP endpoint from the inbound layer (users, health)
//! together with the schemas they reference. The document backs Swagger UI
//! in debug builds and is exported via `cargo run --bin openapi-dump` for
//! external tooling.

use utoipa::OpenApi;

use crate::domain::user::{User, UserDraft, UsersResponse};
use crate::inbound::http::error::ApiError;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User service API",
        description = "CRUD interface for the user resource plus health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::users::list_users,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(User, UserDraft, UsersResponse, ApiError)),
    tags(
        (name = "users", description = "Operations on the user resource"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use utoipa::OpenApi;

    use super::*;

    #[test]
    fn document_registers_every_route() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;

        for path in ["/users", "/users/{id}", "/health/ready", "/health/live"] {
            assert!(paths.contains_key(path), "missing path {path}");
        }
    }

    #[test]
    fn error_schema_exposes_the_wire_fields() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        assert!(schemas.contains_key("ApiError"));
        assert!(schemas.contains_key("User"));
        assert!(schemas.contains_key("UsersResponse"));
    }
}
