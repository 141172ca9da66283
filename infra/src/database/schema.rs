//! Account table definitions
//!
//! Tables are created when missing and never altered. Each account kind has
//! its own fixed table.

use prown_core::domain::entities::account::AccountKind;

/// Table backing `kind`
pub fn table_name(kind: AccountKind) -> &'static str {
    match kind {
        AccountKind::ServiceProvider => "service_providers",
        AccountKind::Customer => "customers",
    }
}

pub const CREATE_SERVICE_PROVIDERS: &str = r#"
    CREATE TABLE IF NOT EXISTS service_providers (
        id BIGINT UNSIGNED NOT NULL AUTO_INCREMENT PRIMARY KEY,
        service_id VARCHAR(255) NOT NULL,
        email VARCHAR(255) NOT NULL,
        phone_number VARCHAR(20) NOT NULL,
        password VARCHAR(255) NOT NULL,
        created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
        UNIQUE KEY service_id (service_id),
        UNIQUE KEY email (email)
    )
"#;

pub const CREATE_CUSTOMERS: &str = r#"
    CREATE TABLE IF NOT EXISTS customers (
        id BIGINT UNSIGNED NOT NULL AUTO_INCREMENT PRIMARY KEY,
        name VARCHAR(255) NOT NULL,
        email VARCHAR(255) NOT NULL,
        phone VARCHAR(20) NOT NULL,
        password VARCHAR(255) NOT NULL,
        created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
        UNIQUE KEY email (email)
    )
"#;

/// Statements run at startup, in order
pub const BOOTSTRAP: [&str; 2] = [CREATE_SERVICE_PROVIDERS, CREATE_CUSTOMERS];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_kind_has_its_own_table() {
        assert_eq!(table_name(AccountKind::ServiceProvider), "service_providers");
        assert_eq!(table_name(AccountKind::Customer), "customers");
    }

    #[test]
    fn test_bootstrap_is_idempotent() {
        for statement in BOOTSTRAP {
            assert!(statement.contains("IF NOT EXISTS"));
        }
    }
}
