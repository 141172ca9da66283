use actix_web::{web, HttpRequest, HttpResponse};

use prown_core::repositories::AccountRepository;

use crate::dto::ProfileResponse;
use crate::handlers::handle_domain_error;
use crate::middleware::auth::AuthContext;

use super::{request_id, AppState};

/// Handler for `GET /profile`
///
/// Requires the `JwtAuth` middleware. The account is looked up with the kind
/// and id carried by the token.
///
/// # Errors
/// - 401 Unauthorized: No bearer token (answered by the middleware)
/// - 403 Forbidden: Invalid or expired token (answered by the middleware)
/// - 404 Not Found: The account no longer exists
/// - 500 Internal Server Error: Store failure
pub async fn profile<R: AccountRepository + 'static>(
    req: HttpRequest,
    state: web::Data<AppState<R>>,
    auth: AuthContext,
) -> HttpResponse {
    let request_id = request_id(&req);

    match state.account_service.profile(&auth.claims).await {
        Ok(user) => HttpResponse::Ok().json(ProfileResponse { user }),
        Err(error) => handle_domain_error(error, &request_id),
    }
}
