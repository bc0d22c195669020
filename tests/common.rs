#![allow(dead_code)]

use std::sync::Arc;

use sea_orm::{Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;

use empregados_service::domain::service::Service;
use empregados_service::infra::storage::migrations::Migrator;
use empregados_service::infra::storage::sea_orm_repo::SeaOrmEmployeeRepository;

/// Create a fresh in-memory database for each test
pub async fn create_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to connect to test database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

/// Create a domain service backed by a fresh in-memory database
pub async fn create_test_service() -> Arc<Service> {
    let db = create_test_db().await;
    let repo = Arc::new(SeaOrmEmployeeRepository::new(db));
    Arc::new(Service::new(repo))
}
