//! Unit tests for database connection pool

use crate::config::DatabaseConfig;
use crate::database::connection::DatabasePool;
use crate::InfrastructureError;

fn test_config() -> DatabaseConfig {
    DatabaseConfig::new(
        std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "mysql://root@localhost:3306/prowndatabase_test".to_string()),
    )
    .with_max_connections(5)
}

#[tokio::test]
async fn test_pool_creation_with_invalid_url() {
    let config = DatabaseConfig::new("mysql://localhost:notaport/prowndatabase");

    let result = DatabasePool::new(config).await;
    assert!(matches!(result, Err(InfrastructureError::Config(_))));
}

#[tokio::test]
#[ignore] // Requires actual database
async fn test_ensure_schema_twice() {
    let pool = DatabasePool::new(test_config()).await.unwrap();
    pool.ensure_schema().await.unwrap();
    // Second run is a no-op
    pool.ensure_schema().await.unwrap();
    pool.close().await;
}
