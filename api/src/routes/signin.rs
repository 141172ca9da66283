use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use prown_core::domain::entities::account::AccountKind;
use prown_core::errors::DomainError;
use prown_core::repositories::AccountRepository;

use crate::dto::{length_violation, SigninRequest, SigninResponse};
use crate::handlers::handle_domain_error;

use super::{request_id, AppState};

/// Handler for `POST /service-provider/signin`
pub async fn service_provider_signin<R: AccountRepository + 'static>(
    req: HttpRequest,
    state: web::Data<AppState<R>>,
    body: web::Json<SigninRequest>,
) -> HttpResponse {
    signin(AccountKind::ServiceProvider, req, state, body.into_inner()).await
}

/// Handler for `POST /customer/signin`
pub async fn customer_signin<R: AccountRepository + 'static>(
    req: HttpRequest,
    state: web::Data<AppState<R>>,
    body: web::Json<SigninRequest>,
) -> HttpResponse {
    signin(AccountKind::Customer, req, state, body.into_inner()).await
}

/// Authenticates `body` against accounts of `kind`
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "message": "Customer login successful",
///     "token": "eyJhbGciOiJIUzI1NiJ9...",
///     "expires_in": 3600,
///     "user": { "id": 1, "type": "customer", "email": "c@x.com", ... }
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Missing credentials, or unknown email / wrong password
/// - 500 Internal Server Error: Store failure or token signing failure
async fn signin<R: AccountRepository + 'static>(
    kind: AccountKind,
    req: HttpRequest,
    state: web::Data<AppState<R>>,
    body: SigninRequest,
) -> HttpResponse {
    let request_id = request_id(&req);

    if let Err(errors) = body.validate() {
        return handle_domain_error(DomainError::Validation(length_violation(&errors)), &request_id);
    }

    match state.account_service.signin(kind, body.into()).await {
        Ok(result) => {
            log::info!("[{}] {} {} signed in", request_id, kind, result.account.id());
            HttpResponse::Ok().json(SigninResponse {
                message: format!("{} login successful", kind.display_name()),
                token: result.token,
                expires_in: result.expires_in,
                user: result.account,
            })
        }
        Err(error) => handle_domain_error(error, &request_id),
    }
}
