use actix_web::{web, HttpRequest, HttpResponse};
use serde::de::DeserializeOwned;
use validator::Validate;

use prown_core::domain::value_objects::SignupRequest;
use prown_core::errors::DomainError;
use prown_core::repositories::AccountRepository;

use crate::dto::{length_violation, MessageResponse};
use crate::handlers::handle_domain_error;

use super::{request_id, AppState};

/// Handler for `POST /service-provider/signup` and `POST /customer/signup`
///
/// `B` is the body of one account kind. Oversized values are rejected before
/// the account service sees the request.
///
/// # Response
///
/// ## Success (201 Created)
/// ```json
/// { "message": "Customer registered successfully" }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Missing or oversized fields, or the account already exists
/// - 500 Internal Server Error: Store or hashing failure
pub async fn signup<R, B>(
    req: HttpRequest,
    state: web::Data<AppState<R>>,
    body: web::Json<B>,
) -> HttpResponse
where
    R: AccountRepository + 'static,
    B: DeserializeOwned + Validate + Into<SignupRequest> + 'static,
{
    let request_id = request_id(&req);
    let body = body.into_inner();

    if let Err(errors) = body.validate() {
        return handle_domain_error(DomainError::Validation(length_violation(&errors)), &request_id);
    }

    match state.account_service.signup(body.into()).await {
        Ok(receipt) => {
            log::info!(
                "[{}] Registered {} {}",
                request_id,
                receipt.kind,
                receipt.id
            );
            HttpResponse::Created().json(MessageResponse::new(format!(
                "{} registered successfully",
                receipt.kind.display_name()
            )))
        }
        Err(error) => handle_domain_error(error, &request_id),
    }
}
