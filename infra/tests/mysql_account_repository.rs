//! Integration tests for the MySQL credential store
//!
//! These need a reachable MySQL server (`DATABASE_URL`) and are ignored by
//! default. Run with `cargo test -p prown_infra -- --ignored`.

use prown_core::domain::entities::account::{AccountKind, NewAccount, NewCustomer, NewServiceProvider};
use prown_core::errors::{AuthError, DomainError, DuplicateField};
use prown_core::repositories::AccountRepository;
use prown_infra::config::DatabaseConfig;
use prown_infra::{DatabasePool, MySqlAccountRepository};

async fn setup() -> MySqlAccountRepository {
    let _ = tracing_subscriber::fmt::try_init();

    let url = std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| "mysql://root@localhost:3306/prowndatabase_test".to_string());
    let pool = DatabasePool::new(DatabaseConfig::new(url).with_max_connections(2))
        .await
        .unwrap();
    pool.ensure_schema().await.unwrap();

    MySqlAccountRepository::new(pool.get_pool().clone())
}

/// Suffix keeping rows from separate runs apart
fn unique() -> String {
    chrono::Utc::now()
        .timestamp_nanos_opt()
        .unwrap_or_default()
        .to_string()
}

fn provider(service_id: &str, email: &str) -> NewAccount {
    NewAccount::ServiceProvider(NewServiceProvider {
        service_id: service_id.to_string(),
        email: email.to_string(),
        phone_number: "555".to_string(),
        password_hash: "$2b$04$placeholderplaceholderplaceholderplaceholderpla".to_string(),
    })
}

#[tokio::test]
#[ignore] // Requires actual database
async fn test_create_and_find_provider() {
    let repo = setup().await;
    let tag = unique();
    let email = format!("sp-{}@x.com", tag);

    let created = repo.create(provider(&format!("SP-{}", tag), &email)).await.unwrap();
    assert_eq!(created.kind(), AccountKind::ServiceProvider);

    let by_email = repo
        .find_by_email(AccountKind::ServiceProvider, &email)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(by_email.id(), created.id());

    let by_id = repo
        .find_by_id(AccountKind::ServiceProvider, created.id())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(by_id.email(), email);

    // The customers table is separate
    assert!(repo
        .find_by_email(AccountKind::Customer, &email)
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
#[ignore] // Requires actual database
async fn test_duplicate_insert_maps_to_already_exists() {
    let repo = setup().await;
    let tag = unique();
    let service_id = format!("SP-{}", tag);
    let email = format!("dup-{}@x.com", tag);

    repo.create(provider(&service_id, &email)).await.unwrap();

    let err = repo
        .create(provider(&service_id, &format!("other-{}@x.com", tag)))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Auth(AuthError::AccountAlreadyExists {
            kind: AccountKind::ServiceProvider,
            field: Some(DuplicateField::ServiceId),
        })
    ));

    let conflict = repo
        .find_conflict(&provider(&format!("SP-other-{}", tag), &email))
        .await
        .unwrap();
    assert!(conflict.is_some());
}

#[tokio::test]
#[ignore] // Requires actual database
async fn test_create_customer() {
    let repo = setup().await;
    let email = format!("c-{}@x.com", unique());

    let created = repo
        .create(NewAccount::Customer(NewCustomer {
            name: "Ann".to_string(),
            email: email.clone(),
            phone: "123".to_string(),
            password_hash: "hash".to_string(),
        }))
        .await
        .unwrap();

    assert_eq!(created.kind(), AccountKind::Customer);
    assert!(repo
        .find_by_id(AccountKind::Customer, created.id())
        .await
        .unwrap()
        .is_some());
}

#[tokio::test]
#[ignore] // Requires actual database
async fn test_created_account_matches_stored_row() {
    let repo = setup().await;
    let tag = unique();

    let created = repo
        .create(provider(&format!("SPT-{}", tag), &format!("spt-{}@x.com", tag)))
        .await
        .unwrap();
    let stored = repo
        .find_by_id(AccountKind::ServiceProvider, created.id())
        .await
        .unwrap()
        .unwrap();

    assert_eq!(created, stored);
}
