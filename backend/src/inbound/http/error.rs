//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while giving every
//! failure the same wire shape, a JSON object with `status_code` and
//! `message`. This module is the single place where error kinds become
//! transport status codes; unrecognized kinds default to 500.

use actix_web::{HttpResponse, ResponseError, http::StatusCode, web};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::domain::{Error, ErrorCode};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// Wire shape of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ApiError {
    /// HTTP status code repeated in the body.
    #[schema(example = 404)]
    pub status_code: u16,
    /// Human-readable description of the failure.
    #[schema(example = "user not found")]
    pub message: String,
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::Conflict => StatusCode::CONFLICT,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Message placed on the wire for internal failures; the original message
/// is logged, not leaked.
const INTERNAL_MESSAGE: &str = "internal server error";

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let message = if self.code() == ErrorCode::InternalError {
            error!(error = %self, "internal error returned by handler");
            INTERNAL_MESSAGE.to_owned()
        } else {
            self.message().to_owned()
        };

        HttpResponse::build(status).json(ApiError {
            status_code: status.as_u16(),
            message,
        })
    }
}

/// JSON body extractor configuration turning decode failures into the
/// structured 400 body.
#[must_use]
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| Error::invalid_request(err.to_string()).into())
}

/// Path extractor configuration turning parse failures into the structured
/// 400 body.
#[must_use]
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default()
        .error_handler(|err, _req| Error::invalid_request(err.to_string()).into())
}

/// Query extractor configuration turning parse failures into the structured
/// 400 body.
#[must_use]
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default()
        .error_handler(|err, _req| Error::invalid_request(err.to_string()).into())
}

#[cfg(test)]
mod tests {
    use actix_web::body::to_bytes;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(ErrorCode::InvalidRequest, StatusCode::BAD_REQUEST)]
    #[case(ErrorCode::NotFound, StatusCode::NOT_FOUND)]
    #[case(ErrorCode::Conflict, StatusCode::CONFLICT)]
    #[case(ErrorCode::InternalError, StatusCode::INTERNAL_SERVER_ERROR)]
    fn each_error_code_maps_to_its_status(#[case] code: ErrorCode, #[case] status: StatusCode) {
        assert_eq!(status_for(code), status);
    }

    async fn body_of(error: Error) -> ApiError {
        let response = error.error_response();
        let bytes = to_bytes(response.into_body()).await.expect("body bytes");
        serde_json::from_slice(&bytes).expect("error body JSON")
    }

    #[actix_web::test]
    async fn client_errors_keep_their_messages() {
        let body = body_of(Error::not_found("user not found")).await;
        assert_eq!(
            body,
            ApiError {
                status_code: 404,
                message: "user not found".to_owned(),
            }
        );
    }

    #[actix_web::test]
    async fn internal_errors_are_redacted() {
        let body = body_of(Error::internal("connection refused on 10.0.0.3")).await;
        assert_eq!(body.status_code, 500);
        assert_eq!(body.message, INTERNAL_MESSAGE);
    }
}
