use thiserror::Error;

/// Errors that can occur when validating a class creation request.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClassValidationError {
    #[error("Missing required field(s): {}", .0.join(", "))]
    MissingFields(Vec<String>),
}
