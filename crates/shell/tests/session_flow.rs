//! End-to-end shell flow: login, navigate, restart, navigate again.

use chrono::{NaiveDate, Utc};
use leavedesk_auth::permissions::catalog;
use leavedesk_auth::Role;
use leavedesk_core::{DepartmentId, DesignationId, EmployeeId, EmployeeNumber, LeaveId, LeaveTypeId, RoleId};
use leavedesk_directory::{Employee, NewEmployee};
use leavedesk_infra::{FileSnapshotStore, SessionService};
use leavedesk_leaves::{LeaveRequest, LeaveStatus};
use leavedesk_shell::auth_flow::{self, AuthResponse};
use leavedesk_shell::navigation::{resolve, Resolution};
use leavedesk_shell::menu::{standard_menu, visible_links};

fn manager() -> Employee {
    let role = Role::new(
        RoleId::new(3),
        "Line Manager",
        Some("Approves direct reports' leave".to_string()),
        "leave:read,leave:create,leave:approve,profile:view",
        Utc::now(),
    )
    .unwrap();

    let mut employee = Employee::create(
        NewEmployee {
            id: EmployeeId::new(30),
            employee_number: EmployeeNumber::new("EMP030").unwrap(),
            email: "abena@example.com".to_string(),
            first_name: Some("Abena".to_string()),
            last_name: Some("Quartey".to_string()),
            gender: None,
            phone: None,
            address: None,
            date_of_birth: NaiveDate::from_ymd_opt(1988, 11, 20).unwrap(),
            employment_date: NaiveDate::from_ymd_opt(2018, 5, 14).unwrap(),
            role_id: RoleId::new(3),
            role: None,
            designation_id: DesignationId::new(4),
            department_id: DepartmentId::new(2),
            manager: None,
        },
        Utc::now(),
    )
    .unwrap();
    employee.assign_role(role, Utc::now());
    employee
}

#[test]
fn login_navigate_restart_navigate() {
    let dir = tempfile::tempdir().unwrap();

    // Fresh process: nothing persisted, everything redirects to login.
    let mut sessions = SessionService::open(FileSnapshotStore::open(dir.path()).unwrap());
    assert_eq!(
        resolve(sessions.session(), "/approvals"),
        Resolution::Redirect("/login")
    );
    assert_eq!(resolve(sessions.session(), "/login"), Resolution::Proceed);

    // Login as a line manager.
    auth_flow::complete_login(
        &mut sessions,
        AuthResponse {
            access_token: "bearer-xyz".to_string(),
            user: manager(),
        },
    );

    let decisions_before = [
        resolve(sessions.session(), "/dashboard"),
        resolve(sessions.session(), "/approvals"),
        resolve(sessions.session(), "/leaves/apply"),
        resolve(sessions.session(), "/employees"),
        resolve(sessions.session(), "/login"),
    ];
    assert_eq!(
        decisions_before,
        [
            Resolution::Proceed,
            Resolution::Proceed,
            Resolution::Proceed,
            Resolution::Redirect("/dashboard"),
            Resolution::Redirect("/dashboard"),
        ]
    );

    // Simulated restart: a new service over the same directory.
    drop(sessions);
    let sessions = SessionService::open(FileSnapshotStore::open(dir.path()).unwrap());
    assert!(sessions.is_authenticated());
    assert!(sessions.has_permission(&catalog::LEAVE_APPROVE));

    let decisions_after = [
        resolve(sessions.session(), "/dashboard"),
        resolve(sessions.session(), "/approvals"),
        resolve(sessions.session(), "/leaves/apply"),
        resolve(sessions.session(), "/employees"),
        resolve(sessions.session(), "/login"),
    ];
    assert_eq!(decisions_before, decisions_after);

    // The sidebar shows exactly what the grants admit.
    let menu = visible_links(sessions.session(), &standard_menu());
    let urls: Vec<&str> = menu.iter().map(|l| l.url.as_str()).collect();
    assert!(urls.contains(&"/approvals"));
    assert!(urls.contains(&"/leaves/apply"));
    assert!(!urls.contains(&"/all-leaves"));
    assert!(menu.iter().all(|l| l.label != "Administration"));
}

#[test]
fn approving_a_report_leave_through_the_gated_page() {
    let dir = tempfile::tempdir().unwrap();
    let mut sessions = SessionService::open(FileSnapshotStore::open(dir.path()).unwrap());
    auth_flow::complete_login(
        &mut sessions,
        AuthResponse {
            access_token: "bearer-xyz".to_string(),
            user: manager(),
        },
    );

    // The approvals page is reachable for this session.
    assert_eq!(resolve(sessions.session(), "/approvals"), Resolution::Proceed);

    // A report's pending request, decided by the logged-in manager.
    let mut request = LeaveRequest::new(
        LeaveId::new(77),
        EmployeeNumber::new("EMP045").unwrap(),
        LeaveTypeId::new(1),
        NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
        NaiveDate::from_ymd_opt(2025, 9, 5).unwrap(),
        "Annual leave",
        Utc::now(),
    )
    .unwrap();

    let approver = sessions.session().user().unwrap().employee_number.clone();
    request
        .approve(approver, 1, Some("Approved, enjoy".to_string()), Utc::now())
        .unwrap();

    assert_eq!(request.status, LeaveStatus::Approved);
    assert_eq!(request.approvals[0].approver.as_str(), "EMP030");
}

#[test]
fn logout_survives_restart() {
    let dir = tempfile::tempdir().unwrap();

    let mut sessions = SessionService::open(FileSnapshotStore::open(dir.path()).unwrap());
    auth_flow::complete_login(
        &mut sessions,
        AuthResponse {
            access_token: "bearer-xyz".to_string(),
            user: manager(),
        },
    );
    auth_flow::on_unauthorized(&mut sessions);
    drop(sessions);

    let sessions = SessionService::open(FileSnapshotStore::open(dir.path()).unwrap());
    assert!(!sessions.is_authenticated());
    assert_eq!(
        resolve(sessions.session(), "/dashboard"),
        Resolution::Redirect("/login")
    );
}
