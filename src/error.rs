use thiserror::Error;

// Error types shared by every entity in the reservation model
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("{entity} not found: {key}")]
    NotFound { entity: &'static str, key: String },

    #[error("Operation not implemented yet: {operation}")]
    Unimplemented { operation: &'static str },

    #[error("Cannot construct {entity}: missing field `{field}`")]
    InvalidConstruction {
        entity: &'static str,
        field: &'static str,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl DomainError {
    pub fn not_found(entity: &'static str, key: impl ToString) -> Self {
        Self::NotFound {
            entity,
            key: key.to_string(),
        }
    }

    pub fn unimplemented(operation: &'static str) -> Self {
        Self::Unimplemented { operation }
    }

    pub fn missing(entity: &'static str, field: &'static str) -> Self {
        Self::InvalidConstruction { entity, field }
    }
}

pub type Result<T> = std::result::Result<T, DomainError>;

// Pulls a required field out of a draft, reporting which one was missing
pub(crate) fn require<T>(value: Option<T>, entity: &'static str, field: &'static str) -> Result<T> {
    value.ok_or_else(|| DomainError::missing(entity, field))
}
