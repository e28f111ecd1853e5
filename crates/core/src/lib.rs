//! `nexgen-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the MM (inventory)
//! and CO (accounting) modules: identifiers, the domain error model, and the
//! entity/value-object marker traits. No infrastructure concerns.

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{MaterialId, TransactionId};
pub use value_object::ValueObject;
