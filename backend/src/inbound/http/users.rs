//! Users API handlers.
//!
//! ```text
//! POST   /users        {"name":"alice","other":"x"}
//! GET    /users/{id}
//! PUT    /users/{id}   {"name":"alice","other":"y"}
//! DELETE /users/{id}
//! GET    /users?limit=10&offset=0
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use pagination::PageParams;

use crate::domain::{User, UserDraft, UserId, UsersResponse};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ApiError;
use crate::inbound::http::state::HttpState;

/// Create a new user.
#[utoipa::path(
    post,
    path = "/users",
    request_body = UserDraft,
    responses(
        (status = 201, description = "Created user", body = User),
        (status = 400, description = "Invalid request", body = ApiError),
        (status = 409, description = "Name already taken", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<UserDraft>,
) -> ApiResult<HttpResponse> {
    let user = state.users.create_user(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(user))
}

/// Fetch a user by id.
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = i64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "Resolved user", body = User),
        (status = 400, description = "Invalid identifier", body = ApiError),
        (status = 404, description = "Unknown user", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tags = ["users"],
    operation_id = "getUserByID"
)]
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    id: web::Path<i64>,
) -> ApiResult<web::Json<User>> {
    let user = state.users.user_by_id(UserId::new(id.into_inner())).await?;
    Ok(web::Json(user))
}

/// Overwrite a user's `name` and `other`.
#[utoipa::path(
    put,
    path = "/users/{id}",
    params(("id" = i64, Path, description = "User identifier")),
    request_body = UserDraft,
    responses(
        (status = 200, description = "Updated user", body = User),
        (status = 400, description = "Invalid request", body = ApiError),
        (status = 404, description = "Unknown user", body = ApiError),
        (status = 409, description = "Name already taken", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tags = ["users"],
    operation_id = "updateUserByID"
)]
#[put("/users/{id}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    id: web::Path<i64>,
    payload: web::Json<UserDraft>,
) -> ApiResult<web::Json<User>> {
    let user = state
        .users
        .update_user_by_id(UserId::new(id.into_inner()), payload.into_inner())
        .await?;
    Ok(web::Json(user))
}

/// Delete a user by id.
#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(("id" = i64, Path, description = "User identifier")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 400, description = "Invalid identifier", body = ApiError),
        (status = 404, description = "Unknown user", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tags = ["users"],
    operation_id = "deleteUserByID"
)]
#[delete("/users/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    id: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    state
        .users
        .delete_user_by_id(UserId::new(id.into_inner()))
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

/// List users ordered by ascending creation time.
#[utoipa::path(
    get,
    path = "/users",
    params(
        ("limit" = Option<i32>, Query, description = "Page size, defaults to 10"),
        ("offset" = Option<i32>, Query, description = "Rows to skip, defaults to 0")
    ),
    responses(
        (status = 200, description = "One page of users", body = UsersResponse),
        (status = 400, description = "Invalid pagination parameters", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(
    state: web::Data<HttpState>,
    page: web::Query<PageParams>,
) -> ApiResult<web::Json<UsersResponse>> {
    let response = state.users.list_users(page.into_inner()).await?;
    Ok(web::Json(response))
}
