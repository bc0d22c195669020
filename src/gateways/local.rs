use async_trait::async_trait;
use std::sync::Arc;

use crate::contract::{
    client::EmployeesApi,
    error::EmployeesError,
    model::{Employee, NewEmployee},
};
use crate::domain::{error::DomainError, service::Service};

/// Local implementation of the EmployeesApi trait that delegates to the domain service
pub struct EmployeesLocalClient {
    service: Arc<Service>,
}

impl EmployeesLocalClient {
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl EmployeesApi for EmployeesLocalClient {
    async fn create_employee(&self, new_employee: NewEmployee) -> anyhow::Result<Employee> {
        self.service
            .create_employee(new_employee)
            .await
            .map_err(map_domain_error_to_anyhow)
    }

    async fn list_employees(&self) -> anyhow::Result<Vec<Employee>> {
        self.service
            .list_employees()
            .await
            .map_err(map_domain_error_to_anyhow)
    }

    async fn get_employee(&self, id: i64) -> anyhow::Result<Option<Employee>> {
        self.service
            .get_employee(id)
            .await
            .map_err(map_domain_error_to_anyhow)
    }

    async fn update_employee(&self, employee: Employee) -> anyhow::Result<Employee> {
        self.service
            .update_employee(employee)
            .await
            .map_err(map_domain_error_to_anyhow)
    }

    async fn delete_employee(&self, id: i64) -> anyhow::Result<()> {
        self.service
            .delete_employee(id)
            .await
            .map_err(map_domain_error_to_anyhow)
    }
}

/// Map domain errors to contract errors wrapped in anyhow
fn map_domain_error_to_anyhow(domain_error: DomainError) -> anyhow::Error {
    let contract_error = match domain_error {
        DomainError::EmailAlreadyExists { email } => EmployeesError::conflict(email),
        DomainError::EmptyField { field } => {
            EmployeesError::validation(format!("Field '{}' must not be empty", field))
        }
        DomainError::Database { .. } => EmployeesError::internal(),
    };

    anyhow::Error::new(contract_error)
}
