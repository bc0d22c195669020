use thiserror::Error;

/// Domain-specific errors using thiserror
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Employee with email '{email}' already exists")]
    EmailAlreadyExists { email: String },

    #[error("Field '{field}' must not be empty")]
    EmptyField { field: &'static str },

    #[error("Database error: {message}")]
    Database { message: String },
}

impl DomainError {
    pub fn email_already_exists(email: String) -> Self {
        Self::EmailAlreadyExists { email }
    }

    pub fn empty_field(field: &'static str) -> Self {
        Self::EmptyField { field }
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::Database {
            message: message.into(),
        }
    }
}
