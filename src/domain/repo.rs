use async_trait::async_trait;

use crate::contract::model::{Employee, NewEmployee};

/// Port for the domain layer: persistence operations the domain needs.
/// Object-safe and async-friendly via `async_trait`.
///
/// Identity assignment is part of this boundary's contract: `insert` takes an
/// id-less employee and the store hands back the row with its auto-increment
/// key. The service never invents identifiers.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Insert a new employee; the store assigns the id.
    async fn insert(&self, new_employee: NewEmployee) -> anyhow::Result<Employee>;
    /// Persist an existing employee by primary key.
    async fn save(&self, employee: Employee) -> anyhow::Result<Employee>;
    /// Load an employee by id.
    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<Employee>>;
    /// Derived lookup used for the uniqueness rule.
    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<Employee>>;
    /// All employees in id order.
    async fn find_all(&self) -> anyhow::Result<Vec<Employee>>;
    /// Delete by id. Returns true if a row was deleted.
    async fn delete_by_id(&self, id: i64) -> anyhow::Result<bool>;
}
