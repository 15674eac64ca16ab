use thiserror::Error;

/// Raised when a field rejects a value.
///
/// The `Display` output of each variant is the user-facing message, e.g.
/// `"Title must be at least 3 characters long."`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} cannot be empty.")]
    Empty { field: &'static str },

    #[error("{field} must be at least {min} characters long.")]
    TooShort { field: &'static str, min: usize },

    #[error("{field} must be at most {max} characters long.")]
    TooLong { field: &'static str, max: usize },
}

impl ValidationError {
    /// Name of the field that rejected the value.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::Empty { field }
            | ValidationError::TooShort { field, .. }
            | ValidationError::TooLong { field, .. } => field,
        }
    }
}

pub type NoteResult<T> = Result<T, ValidationError>;
