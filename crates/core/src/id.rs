//! Strongly-typed identifiers used across the domain.
//!
//! Materials and transactions are keyed by human-readable business codes
//! (`MAT001`, `T001`) rather than generated ids, so the newtypes wrap a
//! `String` and serialize transparently.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a material master record (e.g. `MAT001`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MaterialId(String);

/// Identifier of a goods movement (e.g. `T001`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(String);

macro_rules! impl_code_newtype {
    ($t:ty, $name:literal) => {
        impl $t {
            /// Wrap a business code. Blank codes are caught by [`Self::validate`].
            pub fn new(code: impl Into<String>) -> Self {
                Self(code.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// A code must contain at least one non-whitespace character.
            pub fn validate(&self) -> Result<(), DomainError> {
                if self.0.trim().is_empty() {
                    return Err(DomainError::invalid_id(concat!($name, " cannot be blank")));
                }
                Ok(())
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.pad(&self.0)
            }
        }

        impl From<&str> for $t {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let id = Self(s.trim().to_string());
                id.validate()?;
                Ok(id)
            }
        }

        impl AsRef<str> for $t {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

impl_code_newtype!(MaterialId, "MaterialId");
impl_code_newtype!(TransactionId, "TransactionId");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_trims_and_rejects_blank() {
        let id: MaterialId = " MAT001 ".parse().unwrap();
        assert_eq!(id.as_str(), "MAT001");

        let err = "   ".parse::<TransactionId>().unwrap_err();
        assert!(matches!(err, DomainError::InvalidId(_)));
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = MaterialId::new("MAT002");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"MAT002\"");
    }
}
