//! Bearer token middleware for protected endpoints.
//!
//! The middleware reads the `Authorization` header, verifies the session
//! token with the `TokenService` registered as app data and stores the
//! resulting claims in the request extensions for the [`AuthContext`]
//! extractor.

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    error::InternalError,
    http::header::AUTHORIZATION,
    web, Error, FromRequest, HttpMessage, HttpRequest, HttpResponse,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    task::{Context, Poll},
};

use prown_core::domain::entities::token::SessionClaims;
use prown_core::services::token::TokenService;
use prown_shared::{error_messages, ErrorResponse, MessageResponse};

/// Authenticated session injected into requests
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// Verified claims of the presented token
    pub claims: SessionClaims,
}

/// JWT authentication middleware factory
#[derive(Debug, Clone, Copy, Default)]
pub struct JwtAuth;

impl JwtAuth {
    pub fn new() -> Self {
        Self
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
        }))
    }
}

/// JWT authentication middleware service
///
/// Rejections are answered as regular responses so outer middleware such as
/// CORS still decorates them.
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            let token = match extract_bearer_token(&req) {
                Some(token) => token,
                None => {
                    let response = HttpResponse::Unauthorized()
                        .json(MessageResponse::new(error_messages::ACCESS_TOKEN_REQUIRED));
                    return Ok(req.into_response(response).map_into_right_body());
                }
            };

            let token_service = match req.app_data::<web::Data<TokenService>>() {
                Some(token_service) => token_service.clone(),
                None => {
                    log::error!("TokenService is not registered as app data");
                    let response = HttpResponse::InternalServerError()
                        .json(ErrorResponse::new(error_messages::SERVER_ERROR));
                    return Ok(req.into_response(response).map_into_right_body());
                }
            };

            let claims = match token_service.verify(&token) {
                Ok(claims) => claims,
                Err(e) => {
                    log::info!("Rejected session token on {}: {}", req.path(), e);
                    let response = HttpResponse::Forbidden()
                        .json(MessageResponse::new(error_messages::INVALID_OR_EXPIRED_TOKEN));
                    return Ok(req.into_response(response).map_into_right_body());
                }
            };

            req.extensions_mut().insert(AuthContext { claims });

            service
                .call(req)
                .await
                .map(|res| res.map_into_left_body())
        })
    }
}

/// Extracts Bearer token from Authorization header
fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| token.to_string())
}

/// Extractor for required authentication
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req.extensions().get::<AuthContext>().cloned().ok_or_else(|| {
            let response = HttpResponse::Unauthorized()
                .json(MessageResponse::new(error_messages::ACCESS_TOKEN_REQUIRED));
            InternalError::from_response("authentication required", response).into()
        });

        ready(result)
    }
}
