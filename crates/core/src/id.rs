//! Strongly-typed identifiers used across the domain.
//!
//! Database identifiers are numeric; employees additionally carry a string
//! employee number (e.g. "EMP001") used as the natural key for manager
//! references and leave records.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Identifier of a role (permission bundle).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleId(i64);

/// Identifier of a department.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DepartmentId(i64);

/// Identifier of a designation (job title within a department).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DesignationId(i64);

/// Identifier of a leave type.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LeaveTypeId(i64);

/// Identifier of a leave request.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LeaveId(i64);

/// Database identifier of an employee record.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(i64);

macro_rules! impl_numeric_id {
    ($t:ty) => {
        impl $t {
            pub fn new(value: i64) -> Self {
                Self(value)
            }

            pub fn value(&self) -> i64 {
                self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<i64> for $t {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$t> for i64 {
            fn from(value: $t) -> Self {
                value.0
            }
        }
    };
}

impl_numeric_id!(RoleId);
impl_numeric_id!(DepartmentId);
impl_numeric_id!(DesignationId);
impl_numeric_id!(LeaveTypeId);
impl_numeric_id!(LeaveId);
impl_numeric_id!(EmployeeId);

/// Employee number: the human-facing natural key (e.g. "EMP001").
///
/// Manager references and leave records point at employee numbers, not
/// database ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeNumber(String);

impl EmployeeNumber {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("employee number cannot be empty"));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for EmployeeNumber {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}
