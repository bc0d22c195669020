use std::sync::Arc;

use axum::{
    http::StatusCode,
    routing::{get, post},
    Extension, Router,
};

use crate::api::rest::handlers::{self, DuplicateEmailPolicy};
use crate::domain::service::Service;

/// Build the REST router for the employees API.
///
/// `duplicate_email_status` is the status answered when a create hits the
/// duplicate-email rule (see `DuplicateEmailPolicy`).
pub fn router(service: Arc<Service>, duplicate_email_status: StatusCode) -> Router {
    Router::new()
        .route(
            "/api/empregados",
            post(handlers::create_employee).get(handlers::list_employees),
        )
        .route(
            "/api/empregados/{id}",
            get(handlers::get_employee)
                .put(handlers::update_employee)
                .delete(handlers::delete_employee),
        )
        .layer(Extension(service))
        .layer(Extension(DuplicateEmailPolicy(duplicate_email_status)))
}
