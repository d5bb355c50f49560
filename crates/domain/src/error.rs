use crate::entity::EntityKind;
use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("{kind} not found: {id}")]
    NotFound { kind: EntityKind, id: String },

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Sort key {key} is not supported for {kind}")]
    UnsupportedSort { kind: EntityKind, key: String },

    #[error("Store error: {0}")]
    Store(String),

    #[error("Delivery failed: {0}")]
    Delivery(String),
}

pub type Result<T> = std::result::Result<T, DomainError>;
