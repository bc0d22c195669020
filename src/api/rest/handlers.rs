use std::sync::Arc;

use axum::{extract::Path, http::StatusCode, response::Json, Extension};
use tracing::{error, info};

use crate::api::rest::dto::{CreateEmployeeReq, EmployeeDto, UpdateEmployeeReq};
use crate::domain::error::DomainError;
use crate::domain::service::Service;

/// HTTP status to answer a duplicate-email create with.
///
/// The reference system never mapped this failure explicitly and leaked it as
/// a server error, so the status is a deployment policy rather than a
/// hardcoded choice. Defaults to 409 via the config layer.
#[derive(Debug, Clone, Copy)]
pub struct DuplicateEmailPolicy(pub StatusCode);

/// Create a new employee
pub async fn create_employee(
    Extension(svc): Extension<Arc<Service>>,
    Extension(policy): Extension<DuplicateEmailPolicy>,
    Json(req): Json<CreateEmployeeReq>,
) -> Result<(StatusCode, Json<EmployeeDto>), StatusCode> {
    info!("Creating employee: {:?}", req);

    match svc.create_employee(req.into()).await {
        Ok(employee) => Ok((StatusCode::CREATED, Json(EmployeeDto::from(employee)))),
        Err(e) => {
            error!("Failed to create employee: {}", e);
            Err(map_domain_error_to_status_code(&e, policy))
        }
    }
}

/// List all employees
pub async fn list_employees(
    Extension(svc): Extension<Arc<Service>>,
    Extension(policy): Extension<DuplicateEmailPolicy>,
) -> Result<Json<Vec<EmployeeDto>>, StatusCode> {
    info!("Listing employees");

    match svc.list_employees().await {
        Ok(employees) => Ok(Json(employees.into_iter().map(EmployeeDto::from).collect())),
        Err(e) => {
            error!("Failed to list employees: {}", e);
            Err(map_domain_error_to_status_code(&e, policy))
        }
    }
}

/// Get a specific employee by ID; absence is a 404 with an empty body
pub async fn get_employee(
    Extension(svc): Extension<Arc<Service>>,
    Extension(policy): Extension<DuplicateEmailPolicy>,
    Path(id): Path<i64>,
) -> Result<Json<EmployeeDto>, StatusCode> {
    info!("Getting employee with id: {}", id);

    match svc.get_employee(id).await {
        Ok(Some(employee)) => Ok(Json(EmployeeDto::from(employee))),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(e) => {
            error!("Failed to get employee {}: {}", id, e);
            Err(map_domain_error_to_status_code(&e, policy))
        }
    }
}

/// Update an existing employee. Copies the mutable fields from the body onto
/// the stored entity, preserving the identifier.
pub async fn update_employee(
    Extension(svc): Extension<Arc<Service>>,
    Extension(policy): Extension<DuplicateEmailPolicy>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateEmployeeReq>,
) -> Result<Json<EmployeeDto>, StatusCode> {
    info!("Updating employee {} with: {:?}", id, req);

    let mut current = match svc.get_employee(id).await {
        Ok(Some(employee)) => employee,
        Ok(None) => return Err(StatusCode::NOT_FOUND),
        Err(e) => {
            error!("Failed to load employee {} for update: {}", id, e);
            return Err(map_domain_error_to_status_code(&e, policy));
        }
    };

    current.name = req.name;
    current.surname = req.surname;
    current.email = req.email;

    match svc.update_employee(current).await {
        Ok(employee) => Ok(Json(EmployeeDto::from(employee))),
        Err(e) => {
            error!("Failed to update employee {}: {}", id, e);
            Err(map_domain_error_to_status_code(&e, policy))
        }
    }
}

/// Delete an employee by ID. Always answers 200 with a confirmation message,
/// whether or not the record existed.
pub async fn delete_employee(
    Extension(svc): Extension<Arc<Service>>,
    Extension(policy): Extension<DuplicateEmailPolicy>,
    Path(id): Path<i64>,
) -> Result<String, StatusCode> {
    info!("Deleting employee: {}", id);

    match svc.delete_employee(id).await {
        Ok(()) => Ok("Empregado deletado com Sucesso!".to_string()),
        Err(e) => {
            error!("Failed to delete employee {}: {}", id, e);
            Err(map_domain_error_to_status_code(&e, policy))
        }
    }
}

/// Map domain errors to HTTP status codes
fn map_domain_error_to_status_code(error: &DomainError, policy: DuplicateEmailPolicy) -> StatusCode {
    match error {
        DomainError::EmailAlreadyExists { .. } => policy.0,
        DomainError::EmptyField { .. } => StatusCode::BAD_REQUEST,
        DomainError::Database { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
