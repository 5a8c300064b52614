//! Sidebar menu model and permission filtering.

use serde::{Deserialize, Serialize};

use leavedesk_auth::permissions::catalog;
use leavedesk_auth::{Permission, Session};

/// A sidebar entry, possibly with a nested submenu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuLink {
    pub label: String,
    pub icon: Option<String>,
    pub url: String,
    /// Holding any one of these makes the entry visible; empty means
    /// visible to every authenticated user.
    pub permissions: Vec<Permission>,
    pub sub_links: Vec<MenuLink>,
}

impl MenuLink {
    fn leaf(label: &str, url: &str, permissions: &[Permission]) -> Self {
        Self {
            label: label.to_string(),
            icon: None,
            url: url.to_string(),
            permissions: permissions.to_vec(),
            sub_links: Vec::new(),
        }
    }
}

/// Filter a menu down to the entries the session may see.
///
/// A parent with sublinks keeps only its visible sublinks and is dropped
/// entirely when none survive.
pub fn visible_links(session: &Session, links: &[MenuLink]) -> Vec<MenuLink> {
    links
        .iter()
        .filter(|link| link.permissions.is_empty() || session.has_any_permission(&link.permissions))
        .filter_map(|link| {
            if link.sub_links.is_empty() {
                return Some(link.clone());
            }
            let sub_links = visible_links(session, &link.sub_links);
            if sub_links.is_empty() {
                return None;
            }
            Some(MenuLink {
                sub_links,
                ..link.clone()
            })
        })
        .collect()
}

/// The standard sidebar, mirroring the canonical route table.
pub fn standard_menu() -> Vec<MenuLink> {
    vec![
        MenuLink::leaf("My Leaves", "/leaves", &[]),
        MenuLink::leaf("Apply for Leave", "/leaves/apply", &[catalog::LEAVE_CREATE]),
        MenuLink::leaf(
            "All Leaves",
            "/all-leaves",
            &[catalog::LEAVE_VIEW, catalog::LEAVE_MANAGE],
        ),
        MenuLink::leaf("Approvals", "/approvals", &[catalog::LEAVE_APPROVE]),
        MenuLink {
            label: "Administration".to_string(),
            icon: None,
            url: "#".to_string(),
            permissions: Vec::new(),
            sub_links: vec![
                MenuLink::leaf("Employees", "/employees", &[catalog::EMPLOYEE_VIEW]),
                MenuLink::leaf("Departments", "/departments", &[catalog::DEPARTMENT_VIEW]),
                MenuLink::leaf("Designations", "/designations", &[catalog::DEPARTMENT_VIEW]),
                MenuLink::leaf("Roles & Permissions", "/roles-permissions", &[catalog::ROLE_VIEW]),
                MenuLink::leaf("Leave Types", "/leave-types", &[catalog::LEAVE_TYPE_VIEW]),
            ],
        },
        MenuLink::leaf("Reports", "/reports", &[catalog::REPORT_VIEW]),
    ]
}
