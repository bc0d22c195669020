use async_trait::async_trait;

use crate::contract::model::{Employee, NewEmployee};

/// Public API trait for the employees service
#[async_trait]
pub trait EmployeesApi: Send + Sync {
    /// Create a new employee; fails when the email is already taken
    async fn create_employee(&self, new_employee: NewEmployee) -> anyhow::Result<Employee>;

    /// List all employees in store order
    async fn list_employees(&self) -> anyhow::Result<Vec<Employee>>;

    /// Get an employee by id; `None` when no such record exists
    async fn get_employee(&self, id: i64) -> anyhow::Result<Option<Employee>>;

    /// Persist the given employee as-is, keyed by its id
    async fn update_employee(&self, employee: Employee) -> anyhow::Result<Employee>;

    /// Delete an employee by id; succeeds even when the id is unknown
    async fn delete_employee(&self, id: i64) -> anyhow::Result<()>;
}
