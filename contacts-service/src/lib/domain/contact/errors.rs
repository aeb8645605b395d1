use thiserror::Error;

/// Error for contact field validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ContactFieldError {
    #[error("{field} must not be empty")]
    Empty { field: &'static str },

    #[error("{field} too long: maximum {max} characters")]
    TooLong { field: &'static str, max: usize },

    #[error("Invalid email format: {0}")]
    InvalidEmail(String),

    #[error("Invalid phone number: {0}")]
    InvalidPhoneNumber(String),
}

/// Top-level error for contact operations
#[derive(Debug, Clone, Error)]
pub enum ContactError {
    #[error("Invalid contact ID: {0}")]
    InvalidContactId(String),

    #[error("Invalid contact: {0}")]
    InvalidField(#[from] ContactFieldError),

    #[error("Contact not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
