//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Raised only at the data boundary (snapshot validation, seed loading). The
/// aggregation functions themselves are total and never return it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (negative stock, non-finite price, ...).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. blank material code).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// Two records claim the same identity.
    #[error("conflict: {0}")]
    Conflict(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    /// Reject a quantity or currency amount that is negative or non-finite.
    pub fn ensure_non_negative(field: &str, value: f64) -> DomainResult<()> {
        if value.is_finite() && value >= 0.0 {
            Ok(())
        } else {
            Err(Self::validation(format!(
                "{field} must be a finite non-negative number (got {value})"
            )))
        }
    }

    /// Reject a currency amount that is non-finite (sign is allowed).
    pub fn ensure_finite(field: &str, value: f64) -> DomainResult<()> {
        if value.is_finite() {
            Ok(())
        } else {
            Err(Self::validation(format!("{field} must be finite (got {value})")))
        }
    }
}
