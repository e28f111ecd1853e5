//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity and are compared by their attribute values.
/// Cost records (keyed only by the material they reference) and derived
/// figures such as a price-efficiency ratio are value objects: to "change"
/// one, build a new one.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct Price(f64);
///
/// impl ValueObject for Price {}
///
/// assert_eq!(Price(15.5), Price(15.5));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
