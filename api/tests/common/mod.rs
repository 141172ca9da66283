//! Shared setup for router tests

#![allow(dead_code)]

use std::sync::Arc;

use actix_web::web;

use prown_api::AppState;
use prown_core::repositories::MockAccountRepository;
use prown_core::services::{AccountService, PasswordService, TokenService, TokenServiceConfig};
use prown_shared::AppConfig;

pub const TEST_SECRET: &str = "router-test-secret";

pub struct TestContext {
    pub repository: Arc<MockAccountRepository>,
    pub token_service: Arc<TokenService>,
    pub state: web::Data<AppState<MockAccountRepository>>,
    pub config: AppConfig,
}

pub fn context() -> TestContext {
    let repository = Arc::new(MockAccountRepository::new());
    let token_service = Arc::new(TokenService::new(TokenServiceConfig::new(TEST_SECRET)).unwrap());
    let account_service = Arc::new(AccountService::new(
        repository.clone(),
        Arc::new(PasswordService::with_cost(4)),
        token_service.clone(),
    ));

    TestContext {
        repository,
        token_service,
        state: web::Data::new(AppState::new(account_service)),
        config: AppConfig::default(),
    }
}

pub fn provider_body() -> serde_json::Value {
    serde_json::json!({
        "service_id": "SP-001",
        "email": "plumber@example.com",
        "phone_number": "0400000000",
        "password": "pipes-and-wrenches"
    })
}

pub fn customer_body() -> serde_json::Value {
    serde_json::json!({
        "name": "Ann Lee",
        "email": "ann@example.com",
        "phone": "0411111111",
        "password": "kitchen-renovation"
    })
}
