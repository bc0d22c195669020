use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::contract::model::{Employee, NewEmployee};
use crate::domain::error::DomainError;
use crate::domain::repo::EmployeeRepository;

/// Domain service with the business rules for employee management.
/// Depends only on the repository port, not on infra types.
#[derive(Clone)]
pub struct Service {
    repo: Arc<dyn EmployeeRepository>,
}

impl Service {
    pub fn new(repo: Arc<dyn EmployeeRepository>) -> Self {
        Self { repo }
    }

    #[instrument(
        name = "empregados.service.create_employee",
        skip(self),
        fields(email = %new_employee.email)
    )]
    pub async fn create_employee(
        &self,
        new_employee: NewEmployee,
    ) -> Result<Employee, DomainError> {
        info!("Creating new employee");

        validate_fields(&new_employee.name, &new_employee.surname, &new_employee.email)?;

        // Uniqueness is a service rule; the table carries no unique index.
        let existing = self
            .repo
            .find_by_email(&new_employee.email)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;
        if existing.is_some() {
            return Err(DomainError::email_already_exists(new_employee.email));
        }

        let employee = self
            .repo
            .insert(new_employee)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;

        info!("Successfully created employee with id={}", employee.id);
        Ok(employee)
    }

    #[instrument(name = "empregados.service.list_employees", skip(self))]
    pub async fn list_employees(&self) -> Result<Vec<Employee>, DomainError> {
        debug!("Listing all employees");

        let employees = self
            .repo
            .find_all()
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;

        debug!("Successfully listed {} employees", employees.len());
        Ok(employees)
    }

    #[instrument(name = "empregados.service.get_employee", skip(self), fields(employee_id = %id))]
    pub async fn get_employee(&self, id: i64) -> Result<Option<Employee>, DomainError> {
        debug!("Getting employee by id");

        self.repo
            .find_by_id(id)
            .await
            .map_err(|e| DomainError::database(e.to_string()))
    }

    /// Persists the given employee as-is, keyed by its id.
    ///
    /// Unlike create, this does not re-check email uniqueness; the reference
    /// behavior only guards the invariant at creation time.
    #[instrument(
        name = "empregados.service.update_employee",
        skip(self),
        fields(employee_id = %employee.id)
    )]
    pub async fn update_employee(&self, employee: Employee) -> Result<Employee, DomainError> {
        info!("Updating employee");

        validate_fields(&employee.name, &employee.surname, &employee.email)?;

        let employee = self
            .repo
            .save(employee)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;

        info!("Successfully updated employee");
        Ok(employee)
    }

    /// Idempotent delete: removing an unknown id is not an error.
    #[instrument(name = "empregados.service.delete_employee", skip(self), fields(employee_id = %id))]
    pub async fn delete_employee(&self, id: i64) -> Result<(), DomainError> {
        info!("Deleting employee");

        let deleted = self
            .repo
            .delete_by_id(id)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;

        if deleted {
            info!("Successfully deleted employee");
        } else {
            debug!("No employee found to delete");
        }
        Ok(())
    }
}

fn validate_fields(name: &str, surname: &str, email: &str) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::empty_field("nome"));
    }
    if surname.trim().is_empty() {
        return Err(DomainError::empty_field("sobrenome"));
    }
    if email.trim().is_empty() {
        return Err(DomainError::empty_field("email"));
    }
    Ok(())
}
