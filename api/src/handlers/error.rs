//! Conversion of domain errors into HTTP responses
//!
//! Client mistakes carry their message in a `{ "message": ... }` body.
//! Server-side failures are logged with their detail and answered with one
//! of the fixed `{ "error": ... }` bodies.

use actix_web::{error::InternalError, HttpRequest, HttpResponse};

use prown_core::errors::{DomainError, TokenError, ValidationError};
use prown_shared::error_messages;

use crate::dto::{ErrorResponse, MessageResponse};

/// Handle domain errors and convert them to appropriate HTTP responses
pub fn handle_domain_error(error: DomainError, request_id: &str) -> HttpResponse {
    match error {
        DomainError::Validation(e) => {
            log::info!("[{}] Rejected request: {}", request_id, e);
            HttpResponse::BadRequest().json(MessageResponse::new(e.to_string()))
        }
        DomainError::Auth(e) => {
            log::info!("[{}] Rejected request: {}", request_id, e);
            HttpResponse::BadRequest().json(MessageResponse::new(e.to_string()))
        }
        DomainError::NotFound { resource } => {
            log::info!("[{}] Not found: {}", request_id, resource);
            HttpResponse::NotFound().json(MessageResponse::new(error_messages::USER_NOT_FOUND))
        }
        DomainError::Token(TokenError::GenerationFailed) => {
            log::error!("[{}] Session token could not be signed", request_id);
            HttpResponse::InternalServerError().json(ErrorResponse::new(error_messages::SERVER_ERROR))
        }
        DomainError::Token(e) => {
            log::info!("[{}] Rejected token: {}", request_id, e);
            HttpResponse::Forbidden()
                .json(MessageResponse::new(error_messages::INVALID_OR_EXPIRED_TOKEN))
        }
        DomainError::Store { message } => {
            log::error!("[{}] {}", request_id, message);
            HttpResponse::InternalServerError()
                .json(ErrorResponse::new(error_messages::DATABASE_QUERY_FAILED))
        }
        DomainError::StoreWrite { message } => {
            log::error!("[{}] {}", request_id, message);
            HttpResponse::InternalServerError()
                .json(ErrorResponse::new(error_messages::DATABASE_INSERTION_FAILED))
        }
        DomainError::Internal { message } => {
            log::error!("[{}] {}", request_id, message);
            HttpResponse::InternalServerError().json(ErrorResponse::new(error_messages::SERVER_ERROR))
        }
    }
}

/// Answer an unparseable JSON body with 400 `{ "message": ... }`
pub fn json_error_handler(
    err: actix_web::error::JsonPayloadError,
    _req: &HttpRequest,
) -> actix_web::Error {
    log::info!("Malformed JSON body: {}", err);
    let response =
        HttpResponse::BadRequest().json(MessageResponse::new(ValidationError::MalformedBody.to_string()));
    InternalError::from_response(err, response).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{body::to_bytes, http::StatusCode};
    use prown_core::domain::entities::account::AccountKind;
    use prown_core::errors::{AuthError, DuplicateField};

    async fn body_json(response: HttpResponse) -> serde_json::Value {
        let bytes = to_bytes(response.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[actix_web::test]
    async fn test_duplicate_account_is_bad_request() {
        let response = handle_domain_error(
            AuthError::AccountAlreadyExists {
                kind: AccountKind::ServiceProvider,
                field: Some(DuplicateField::ServiceId),
            }
            .into(),
            "test",
        );

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "message": "Service provider with this service ID already exists" })
        );
    }

    #[actix_web::test]
    async fn test_token_errors_are_forbidden() {
        for e in [TokenError::Malformed, TokenError::SignatureMismatch, TokenError::Expired] {
            let response = handle_domain_error(e.into(), "test");
            assert_eq!(response.status(), StatusCode::FORBIDDEN);
        }

        let response = handle_domain_error(TokenError::GenerationFailed.into(), "test");
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[actix_web::test]
    async fn test_store_failures_hide_details() {
        let response = handle_domain_error(
            DomainError::Store {
                message: "connection refused at 10.0.0.5".to_string(),
            },
            "test",
        );
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "error": "Database query failed" })
        );

        let response = handle_domain_error(
            DomainError::StoreWrite {
                message: "disk full".to_string(),
            },
            "test",
        );
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "error": "Database insertion failed" })
        );

        let response = handle_domain_error(
            DomainError::Internal {
                message: "bcrypt cost".to_string(),
            },
            "test",
        );
        assert_eq!(body_json(response).await, serde_json::json!({ "error": "Server error" }));
    }

    #[actix_web::test]
    async fn test_missing_account_is_not_found() {
        let response = handle_domain_error(
            DomainError::NotFound {
                resource: "customer 1".to_string(),
            },
            "test",
        );
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await, serde_json::json!({ "message": "User not found" }));
    }
}
