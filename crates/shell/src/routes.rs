//! The canonical route table.
//!
//! One mapping per destination. Requirement lists use `Any` matching
//! throughout: holding any one of the listed permissions admits the
//! visitor. An empty list on a protected route means any authenticated
//! user may enter.

use leavedesk_auth::permissions::catalog;
use leavedesk_auth::{MatchMode, Permission};

/// How a route is gated.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteAccess {
    /// Public-only: authenticated visitors are bounced to the dashboard.
    Public,
    /// Any authenticated user.
    Authenticated,
    /// Authenticated users holding the listed permissions per `mode`.
    Permitted {
        permissions: &'static [Permission],
        mode: MatchMode,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct RouteSpec {
    pub path: &'static str,
    pub access: RouteAccess,
}

/// Build a `Permitted` access gate with `Any` matching.
///
/// The permission list is bound to a named `const` so the slice has a
/// `'static` address (a bare `&[Permission; N]` temporary cannot be
/// promoted because `Permission` carries drop glue).
macro_rules! permitted {
    ($($perm:expr),+ $(,)?) => {{
        const PERMISSIONS: &[Permission] = &[$($perm),+];
        RouteAccess::Permitted {
            permissions: PERMISSIONS,
            mode: MatchMode::Any,
        }
    }};
}

/// Every navigable destination.
pub const ROUTES: &[RouteSpec] = &[
    RouteSpec {
        path: "/login",
        access: RouteAccess::Public,
    },
    RouteSpec {
        path: "/register",
        access: RouteAccess::Public,
    },
    RouteSpec {
        path: "/dashboard",
        access: RouteAccess::Authenticated,
    },
    RouteSpec {
        path: "/leaves",
        access: RouteAccess::Authenticated,
    },
    RouteSpec {
        path: "/leaves/apply",
        access: permitted!(catalog::LEAVE_CREATE),
    },
    RouteSpec {
        path: "/all-leaves",
        access: permitted!(catalog::LEAVE_VIEW, catalog::LEAVE_MANAGE),
    },
    RouteSpec {
        path: "/approvals",
        access: permitted!(catalog::LEAVE_APPROVE),
    },
    RouteSpec {
        path: "/employees",
        access: permitted!(catalog::EMPLOYEE_VIEW),
    },
    RouteSpec {
        path: "/departments",
        access: permitted!(catalog::DEPARTMENT_VIEW),
    },
    // Designations administer the department module; there is no separate
    // designation permission namespace.
    RouteSpec {
        path: "/designations",
        access: permitted!(catalog::DEPARTMENT_VIEW),
    },
    RouteSpec {
        path: "/roles-permissions",
        access: permitted!(catalog::ROLE_VIEW),
    },
    RouteSpec {
        path: "/leave-types",
        access: permitted!(catalog::LEAVE_TYPE_VIEW),
    },
    RouteSpec {
        path: "/reports",
        access: permitted!(catalog::REPORT_VIEW),
    },
];

/// Look up a destination by exact path.
pub fn find_route(path: &str) -> Option<&'static RouteSpec> {
    ROUTES.iter().find(|route| route.path == path)
}
