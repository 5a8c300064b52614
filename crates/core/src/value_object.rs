//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value** - two instances
/// with the same values are interchangeable. A permission token like
/// `leave:approve` is a value object; an employee record with an id is an
/// entity.
///
/// The trait requires:
/// - **Clone**: value objects are cheap to copy around
/// - **PartialEq**: compared by their attribute values
/// - **Debug**: debuggable in logs and test failures
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
