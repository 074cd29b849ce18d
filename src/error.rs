// ⚠️ Model Errors
// Every failing operation returns one of these and leaves the ledger untouched.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// A field value broke its length rule (names, trip dates)
    #[error("Validation error on {field} ({value:?}): {reason}")]
    Validation {
        field: String,
        value: String,
        reason: String,
    },

    /// A trip was built from an entity this ledger never registered
    #[error("{kind} {id} is not registered in this ledger")]
    UnknownReference { kind: &'static str, id: String },

    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },
}

impl ModelError {
    pub fn is_validation(&self) -> bool {
        matches!(self, ModelError::Validation { .. })
    }

    /// Field name for validation errors (e.g. "visitor.name")
    pub fn field(&self) -> Option<&str> {
        match self {
            ModelError::Validation { field, .. } => Some(field),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ModelError>;
