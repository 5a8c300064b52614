use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use leavedesk_core::ValueObject;

/// Permission identifier.
///
/// Permissions are `<module>:<action>` tokens in a flat namespace (e.g.
/// "leave:approve"). Tokens outside the catalog are not errors anywhere in
/// the system; they are opaque strings that simply never match a grant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Permission(Cow<'static, str>);

impl Permission {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Module part of the token (everything before the first ':').
    ///
    /// A token without a separator is treated as a module-only token.
    pub fn module(&self) -> &str {
        match self.as_str().split_once(':') {
            Some((module, _)) => module,
            None => self.as_str(),
        }
    }

    /// Action part of the token, if present.
    pub fn action(&self) -> Option<&str> {
        self.as_str().split_once(':').map(|(_, action)| action)
    }
}

impl core::fmt::Display for Permission {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl ValueObject for Permission {}

/// The full grantable catalog, matching the backend contract.
pub mod catalog {
    use super::Permission;

    // Department
    pub const DEPARTMENT_CREATE: Permission = Permission::from_static("department:create");
    pub const DEPARTMENT_READ: Permission = Permission::from_static("department:read");
    pub const DEPARTMENT_VIEW: Permission = Permission::from_static("department:view");
    pub const DEPARTMENT_UPDATE: Permission = Permission::from_static("department:update");
    pub const DEPARTMENT_DELETE: Permission = Permission::from_static("department:delete");
    pub const DEPARTMENT_MANAGE: Permission = Permission::from_static("department:manage");

    // Employee
    pub const EMPLOYEE_CREATE: Permission = Permission::from_static("employee:create");
    pub const EMPLOYEE_READ: Permission = Permission::from_static("employee:read");
    pub const EMPLOYEE_VIEW: Permission = Permission::from_static("employee:view");
    pub const EMPLOYEE_UPDATE: Permission = Permission::from_static("employee:update");
    pub const EMPLOYEE_DELETE: Permission = Permission::from_static("employee:delete");
    pub const EMPLOYEE_MANAGE: Permission = Permission::from_static("employee:manage");

    // Role
    pub const ROLE_CREATE: Permission = Permission::from_static("role:create");
    pub const ROLE_READ: Permission = Permission::from_static("role:read");
    pub const ROLE_VIEW: Permission = Permission::from_static("role:view");
    pub const ROLE_UPDATE: Permission = Permission::from_static("role:update");
    pub const ROLE_DELETE: Permission = Permission::from_static("role:delete");
    pub const ROLE_ASSIGN_PERMISSIONS: Permission =
        Permission::from_static("role:assignPermissions");
    pub const ROLE_MANAGE: Permission = Permission::from_static("role:manage");

    // Profile
    pub const PROFILE_VIEW: Permission = Permission::from_static("profile:view");
    pub const PROFILE_UPDATE: Permission = Permission::from_static("profile:update");

    // Leave
    pub const LEAVE_CREATE: Permission = Permission::from_static("leave:create");
    pub const LEAVE_READ: Permission = Permission::from_static("leave:read");
    pub const LEAVE_VIEW: Permission = Permission::from_static("leave:view");
    pub const LEAVE_UPDATE: Permission = Permission::from_static("leave:update");
    pub const LEAVE_DELETE: Permission = Permission::from_static("leave:delete");
    pub const LEAVE_APPROVE: Permission = Permission::from_static("leave:approve");
    pub const LEAVE_MANAGE: Permission = Permission::from_static("leave:manage");

    // Leave type
    pub const LEAVE_TYPE_CREATE: Permission = Permission::from_static("leaveType:create");
    pub const LEAVE_TYPE_READ: Permission = Permission::from_static("leaveType:read");
    pub const LEAVE_TYPE_VIEW: Permission = Permission::from_static("leaveType:view");
    pub const LEAVE_TYPE_UPDATE: Permission = Permission::from_static("leaveType:update");
    pub const LEAVE_TYPE_DELETE: Permission = Permission::from_static("leaveType:delete");
    pub const LEAVE_TYPE_MANAGE: Permission = Permission::from_static("leaveType:manage");

    // Report
    pub const REPORT_CREATE: Permission = Permission::from_static("report:create");
    pub const REPORT_READ: Permission = Permission::from_static("report:read");
    pub const REPORT_VIEW: Permission = Permission::from_static("report:view");
    pub const REPORT_UPDATE: Permission = Permission::from_static("report:update");
    pub const REPORT_DELETE: Permission = Permission::from_static("report:delete");
    pub const REPORT_MANAGE: Permission = Permission::from_static("report:manage");

    /// Every grantable permission, in catalog order.
    pub const ALL: &[Permission] = &[
        DEPARTMENT_CREATE,
        DEPARTMENT_READ,
        DEPARTMENT_VIEW,
        DEPARTMENT_UPDATE,
        DEPARTMENT_DELETE,
        DEPARTMENT_MANAGE,
        EMPLOYEE_CREATE,
        EMPLOYEE_READ,
        EMPLOYEE_VIEW,
        EMPLOYEE_UPDATE,
        EMPLOYEE_DELETE,
        EMPLOYEE_MANAGE,
        ROLE_CREATE,
        ROLE_READ,
        ROLE_VIEW,
        ROLE_UPDATE,
        ROLE_DELETE,
        ROLE_ASSIGN_PERMISSIONS,
        ROLE_MANAGE,
        PROFILE_VIEW,
        PROFILE_UPDATE,
        LEAVE_CREATE,
        LEAVE_READ,
        LEAVE_VIEW,
        LEAVE_UPDATE,
        LEAVE_DELETE,
        LEAVE_APPROVE,
        LEAVE_MANAGE,
        LEAVE_TYPE_CREATE,
        LEAVE_TYPE_READ,
        LEAVE_TYPE_VIEW,
        LEAVE_TYPE_UPDATE,
        LEAVE_TYPE_DELETE,
        LEAVE_TYPE_MANAGE,
        REPORT_CREATE,
        REPORT_READ,
        REPORT_VIEW,
        REPORT_UPDATE,
        REPORT_DELETE,
        REPORT_MANAGE,
    ];

    /// All catalog permissions belonging to a module (e.g. "leave").
    pub fn module_permissions(module: &str) -> Vec<Permission> {
        ALL.iter()
            .filter(|p| p.module() == module)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn module_and_action_split_on_first_colon() {
        let permission = Permission::new("leave:approve");
        assert_eq!(permission.module(), "leave");
        assert_eq!(permission.action(), Some("approve"));
    }

    #[test]
    fn separatorless_token_is_module_only() {
        let permission = Permission::new("dashboard");
        assert_eq!(permission.module(), "dashboard");
        assert_eq!(permission.action(), None);
    }

    #[test]
    fn catalog_tokens_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for permission in catalog::ALL {
            assert!(
                seen.insert(permission.as_str()),
                "duplicate catalog token: {permission}"
            );
        }
    }

    #[test]
    fn module_permissions_selects_by_module() {
        let leave = catalog::module_permissions("leave");
        assert_eq!(leave.len(), 7);
        assert!(leave.contains(&catalog::LEAVE_APPROVE));
        assert!(!leave.contains(&catalog::LEAVE_TYPE_READ));

        assert_eq!(catalog::module_permissions("profile").len(), 2);
        assert!(catalog::module_permissions("payroll").is_empty());
    }
}
