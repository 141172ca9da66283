use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::{anyhow, Context};
use log::{info, warn};

use prown_api::{create_app, AppState};
use prown_core::services::{AccountService, PasswordService, TokenService, TokenServiceConfig};
use prown_infra::{DatabasePool, MySqlAccountRepository};
use prown_shared::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env();

    env_logger::init_from_env(
        env_logger::Env::new().default_filter_or(config.logging.level.as_str()),
    );

    config.check().map_err(|e| anyhow!(e))?;

    info!("Starting Prown API Server ({})", config.environment);

    if config.auth.jwt.is_using_default_secret() {
        warn!("JWT_SECRET is not set, signing session tokens with the development secret");
    }

    let pool = DatabasePool::new(config.database.clone())
        .await
        .context("failed to connect to the database")?;
    pool.ensure_schema()
        .await
        .context("failed to create the account tables")?;

    let repository = Arc::new(MySqlAccountRepository::new(pool.get_pool().clone()));
    let password_service = Arc::new(PasswordService::new(&config.auth.password));
    let token_service = Arc::new(
        TokenService::new(TokenServiceConfig::from(&config.auth.jwt))
            .map_err(|e| anyhow!("invalid session token settings: {}", e))?,
    );
    let account_service = Arc::new(AccountService::new(
        repository,
        password_service,
        token_service,
    ));
    let app_state = web::Data::new(AppState::new(account_service));

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let app_config = config.clone();
    let mut server = HttpServer::new(move || create_app(app_state.clone(), &app_config));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await?;

    info!("Server stopped, closing database pool");
    pool.close().await;

    Ok(())
}
