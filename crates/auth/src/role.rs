use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use leavedesk_core::{DomainError, DomainResult, Entity, RoleId};

use crate::Permission;

/// Named bundle of permission grants assigned to employees.
///
/// The grants stay comma-joined in `permissions` because that is the wire
/// format the backend stores and returns. [`derive_permissions`] is the one
/// canonical interpretation of that string; everything downstream works on
/// the derived set, never on the raw text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub id: RoleId,
    pub name: String,
    pub description: Option<String>,
    /// Comma-joined permission tokens, e.g. "leave:read,leave:approve".
    pub permissions: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Role {
    pub fn new(
        id: RoleId,
        name: impl Into<String>,
        description: Option<String>,
        permissions: impl Into<String>,
        now: DateTime<Utc>,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("role name cannot be empty"));
        }

        Ok(Self {
            id,
            name: name.trim().to_string(),
            description,
            permissions: permissions.into(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Derived grant set for this role.
    pub fn permission_set(&self) -> HashSet<Permission> {
        derive_permissions(&self.permissions)
    }

    /// Replace the grant list (the `role:assignPermissions` operation).
    pub fn set_permissions(&mut self, permissions: impl Into<String>, now: DateTime<Utc>) {
        self.permissions = permissions.into();
        self.updated_at = now;
    }

    pub fn rename(&mut self, name: impl Into<String>, now: DateTime<Utc>) -> DomainResult<()> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("role name cannot be empty"));
        }
        self.name = name.trim().to_string();
        self.updated_at = now;
        Ok(())
    }
}

impl Entity for Role {
    type Id = RoleId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Derive the grant set from a comma-joined permission string.
///
/// Splits on ',', trims whitespace, drops empty segments, deduplicates.
/// Absent or malformed input yields the empty set - an employee whose role
/// carries no parseable grants is authenticated but permission-less, which
/// the gate then treats as unauthorized for every permission-gated
/// destination.
pub fn derive_permissions(joined: &str) -> HashSet<Permission> {
    joined
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| Permission::new(token.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::permissions::catalog;

    fn now() -> DateTime<Utc> {
        Utc::now()
    }

    #[test]
    fn derive_splits_and_trims() {
        let derived = derive_permissions("leave:read, leave:approve ,profile:view");
        assert_eq!(derived.len(), 3);
        assert!(derived.contains(&catalog::LEAVE_APPROVE));
        assert!(derived.contains(&catalog::LEAVE_READ));
        assert!(derived.contains(&catalog::PROFILE_VIEW));
    }

    #[test]
    fn derive_of_empty_or_junk_is_empty() {
        assert!(derive_permissions("").is_empty());
        assert!(derive_permissions("   ").is_empty());
        assert!(derive_permissions(",,, ,").is_empty());
    }

    #[test]
    fn derive_deduplicates() {
        let derived = derive_permissions("leave:read,leave:read, leave:read");
        assert_eq!(derived.len(), 1);
    }

    #[test]
    fn unknown_tokens_are_kept_verbatim() {
        let derived = derive_permissions("payroll:run");
        assert!(derived.contains(&Permission::new("payroll:run")));
    }

    #[test]
    fn role_name_is_validated() {
        assert!(Role::new(RoleId::new(1), "  ", None, "", now()).is_err());

        let role = Role::new(RoleId::new(1), " Manager ", None, "leave:approve", now()).unwrap();
        assert_eq!(role.name, "Manager");
    }

    #[test]
    fn set_permissions_replaces_grants() {
        let mut role = Role::new(RoleId::new(7), "HR", None, "leave:read", now()).unwrap();
        role.set_permissions("employee:view,employee:update", now());

        let derived = role.permission_set();
        assert!(!derived.contains(&catalog::LEAVE_READ));
        assert!(derived.contains(&catalog::EMPLOYEE_VIEW));
        assert!(derived.contains(&catalog::EMPLOYEE_UPDATE));
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: joining arbitrary tokens with commas and deriving
            /// yields exactly the set of non-empty trimmed tokens,
            /// independent of order and duplication.
            #[test]
            fn derive_matches_trimmed_token_set(
                tokens in prop::collection::vec("[ a-zA-Z:]{0,12}", 0..16)
            ) {
                let joined = tokens.join(",");
                let derived = derive_permissions(&joined);

                let expected: std::collections::HashSet<String> = tokens
                    .iter()
                    .map(|t| t.trim().to_string())
                    .filter(|t| !t.is_empty())
                    .collect();

                prop_assert_eq!(derived.len(), expected.len());
                for token in expected {
                    prop_assert!(derived.contains(&Permission::new(token)));
                }
            }
        }
    }
}
