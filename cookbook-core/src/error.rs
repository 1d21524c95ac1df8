use thiserror::Error;

use crate::validation::Violation;

/// Failures raised by a repository adapter.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    #[error("Storage connection failed: {0}")]
    Connection(String),

    #[error("Storage query failed: {0}")]
    Query(String),

    #[error("Duplicate entry: {0}")]
    Duplicate(String),

    #[error("Stored value could not be read back: {0}")]
    Corrupt(String),
}

/// Everything a catalog operation can fail with.
///
/// `NotFound`, `Validation`, `Conflict` and `NotImplemented` are expected
/// outcomes a client can act on. `InvalidArgument` and `InvalidOperation`
/// mean the caller broke the operation's contract.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    #[error("Validation failed: {}", format_violations(.0))]
    Validation(Vec<Violation>),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("Not implemented: {0}")]
    NotImplemented(&'static str),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl CatalogError {
    /// True when the error is a programming mistake rather than a business failure.
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            CatalogError::InvalidArgument(_) | CatalogError::InvalidOperation(_)
        )
    }

    pub fn not_found(what: &str, id: impl std::fmt::Display) -> Self {
        CatalogError::NotFound(format!("{} not found: {}", what, id))
    }
}

pub type CatalogResult<T> = Result<T, CatalogError>;

fn format_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| format!("{}: {}", v.field, v.message))
        .collect::<Vec<_>>()
        .join("; ")
}
