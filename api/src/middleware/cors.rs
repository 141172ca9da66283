//! CORS middleware configuration for cross-origin requests.
//!
//! Development accepts any origin. Other environments accept the origins
//! listed in `ALLOWED_ORIGINS`, or any origin when the list is empty.

use actix_cors::Cors;
use actix_web::http::{header, Method};

use prown_shared::{Environment, ServerConfig};

/// Creates a CORS middleware instance configured for the current environment.
pub fn create_cors(config: &ServerConfig, environment: Environment) -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::HeaderName::from_static("x-request-id"),
        ])
        .expose_headers(vec![header::HeaderName::from_static("x-request-id")])
        .max_age(config.cors_max_age);

    if environment.is_development() || config.allowed_origins.is_empty() {
        log::info!("Configuring CORS to accept any origin ({})", environment);
        return cors.allow_any_origin();
    }

    config
        .allowed_origins
        .iter()
        .fold(cors, |cors, origin| {
            log::info!("Adding allowed origin: {}", origin);
            cors.allowed_origin(origin)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, web, App, HttpResponse};

    async fn preflight(config: ServerConfig, environment: Environment, origin: &str) -> StatusCode {
        let app = test::init_service(
            App::new()
                .wrap(create_cors(&config, environment))
                .route("/customer/signin", web::post().to(|| async { HttpResponse::Ok().finish() })),
        )
        .await;

        let req = test::TestRequest::default()
            .method(Method::OPTIONS)
            .uri("/customer/signin")
            .insert_header((header::ORIGIN, origin))
            .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "POST"))
            .to_request();

        test::call_service(&app, req).await.status()
    }

    #[actix_web::test]
    async fn test_development_accepts_any_origin() {
        let status = preflight(
            ServerConfig::default(),
            Environment::Development,
            "http://anywhere.test",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_production_restricts_to_listed_origins() {
        let mut config = ServerConfig::default();
        config.allowed_origins = vec!["https://app.prown.test".to_string()];

        let allowed = preflight(config.clone(), Environment::Production, "https://app.prown.test").await;
        assert_eq!(allowed, StatusCode::OK);

        let denied = preflight(config, Environment::Production, "https://evil.test").await;
        assert_ne!(denied, StatusCode::OK);
    }
}
