//! Application factory
//!
//! Builds the Actix-web application around an already wired `AppState`.

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::Logger,
    web, App, HttpResponse,
};

use prown_core::domain::entities::account::AccountKind;
use prown_core::repositories::AccountRepository;
use prown_shared::{error_messages, AppConfig, MessageResponse};

use crate::dto::{CustomerSignupRequest, ServiceProviderSignupRequest};
use crate::handlers::json_error_handler;
use crate::middleware::{auth::JwtAuth, cors::create_cors};
use crate::routes::{
    profile::profile,
    signin::{customer_signin, service_provider_signin},
    signup::signup,
    AppState,
};

/// Create and configure the application with all dependencies
///
/// The session `TokenService` is shared with the `JwtAuth` middleware through
/// app data, so the middleware verifies with the same secret that signin
/// signs with.
pub fn create_app<R>(
    app_state: web::Data<AppState<R>>,
    config: &AppConfig,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    R: AccountRepository + 'static,
{
    let token_service = web::Data::from(app_state.account_service.token_service().clone());
    let cors = create_cors(&config.server, config.environment);

    App::new()
        .app_data(app_state)
        .app_data(token_service)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .wrap(cors)
        .wrap(Logger::default())
        .route("/", web::get().to(welcome))
        .route("/health", web::get().to(health_check))
        .route(
            "/service-provider/signup",
            web::post().to(signup::<R, ServiceProviderSignupRequest>),
        )
        .route(
            "/service-provider/signin",
            web::post().to(service_provider_signin::<R>),
        )
        .route(
            "/customer/signup",
            web::post().to(signup::<R, CustomerSignupRequest>),
        )
        .route("/customer/signin", web::post().to(customer_signin::<R>))
        .service(
            web::resource("/profile")
                .wrap(JwtAuth::new())
                .route(web::get().to(profile::<R>)),
        )
        .default_service(web::route().to(not_found))
}

/// Plain-text greeting listing the public endpoints
async fn welcome() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(error_messages::WELCOME)
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "prown-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "account_kinds": [
            AccountKind::ServiceProvider.as_str(),
            AccountKind::Customer.as_str(),
        ],
    }))
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(MessageResponse::new(error_messages::NOT_FOUND))
}
