//! Employee records and the employment-status lifecycle.
//!
//! # Invariants
//! - Employment status moves Active ⇄ Suspended and Active/Suspended →
//!   Terminated; terminated is final.
//! - The termination date is present iff the status is Terminated.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use leavedesk_auth::{Role, UserProfile};
use leavedesk_core::{
    DepartmentId, DesignationId, DomainError, DomainResult, EmployeeId, EmployeeNumber, Entity,
    RoleId,
};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

/// Employment account status.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum EmploymentStatus {
    /// Employee is active and can authenticate/transact.
    #[default]
    Active,
    /// Temporarily barred; can be reinstated.
    Suspended,
    /// Employment ended; final state.
    Terminated,
}

impl core::fmt::Display for EmploymentStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            EmploymentStatus::Active => write!(f, "Active"),
            EmploymentStatus::Suspended => write!(f, "Suspended"),
            EmploymentStatus::Terminated => write!(f, "Terminated"),
        }
    }
}

/// Parameters for creating an employee record.
#[derive(Debug, Clone)]
pub struct NewEmployee {
    pub id: EmployeeId,
    pub employee_number: EmployeeNumber,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub gender: Option<Gender>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub date_of_birth: NaiveDate,
    pub employment_date: NaiveDate,
    pub role_id: RoleId,
    pub role: Option<Role>,
    pub designation_id: DesignationId,
    pub department_id: DepartmentId,
    pub manager: Option<EmployeeNumber>,
}

/// An employee record as held by the client.
///
/// Role/designation/department are referenced by id; the role additionally
/// carries an optional embedded snapshot because the session's permission
/// set derives from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub employee_number: EmployeeNumber,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub gender: Option<Gender>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub date_of_birth: NaiveDate,
    /// False until the provisioned password has been replaced.
    pub password_updated: bool,
    pub employment_status: EmploymentStatus,
    pub employment_date: NaiveDate,
    pub termination_date: Option<NaiveDate>,
    pub role_id: RoleId,
    pub role: Option<Role>,
    pub designation_id: DesignationId,
    pub department_id: DepartmentId,
    pub manager: Option<EmployeeNumber>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Employee {
    pub fn create(params: NewEmployee, now: DateTime<Utc>) -> DomainResult<Self> {
        let email = params.email.trim().to_lowercase();
        if email.is_empty() || !email.contains('@') {
            return Err(DomainError::validation("invalid email format"));
        }
        if params.employment_date < params.date_of_birth {
            return Err(DomainError::validation(
                "employment date precedes date of birth",
            ));
        }

        Ok(Self {
            id: params.id,
            employee_number: params.employee_number,
            email,
            first_name: params.first_name,
            last_name: params.last_name,
            gender: params.gender,
            phone: params.phone,
            address: params.address,
            date_of_birth: params.date_of_birth,
            password_updated: false,
            employment_status: EmploymentStatus::Active,
            employment_date: params.employment_date,
            termination_date: None,
            role_id: params.role_id,
            role: params.role,
            designation_id: params.designation_id,
            department_id: params.department_id,
            manager: params.manager,
            created_at: now,
            updated_at: now,
        })
    }

    /// "First Last", falling back to the employee number.
    pub fn display_name(&self) -> String {
        match (self.first_name.as_deref(), self.last_name.as_deref()) {
            (Some(first), Some(last)) => format!("{first} {last}"),
            (Some(first), None) => first.to_string(),
            (None, Some(last)) => last.to_string(),
            (None, None) => self.employee_number.to_string(),
        }
    }

    pub fn suspend(&mut self, now: DateTime<Utc>) -> DomainResult<()> {
        match self.employment_status {
            EmploymentStatus::Active => {
                self.employment_status = EmploymentStatus::Suspended;
                self.updated_at = now;
                Ok(())
            }
            EmploymentStatus::Suspended => Err(DomainError::conflict("employee already suspended")),
            EmploymentStatus::Terminated => Err(DomainError::conflict("employee is terminated")),
        }
    }

    pub fn reinstate(&mut self, now: DateTime<Utc>) -> DomainResult<()> {
        match self.employment_status {
            EmploymentStatus::Suspended => {
                self.employment_status = EmploymentStatus::Active;
                self.updated_at = now;
                Ok(())
            }
            EmploymentStatus::Active => Err(DomainError::conflict("employee is not suspended")),
            EmploymentStatus::Terminated => Err(DomainError::conflict("employee is terminated")),
        }
    }

    pub fn terminate(&mut self, date: NaiveDate, now: DateTime<Utc>) -> DomainResult<()> {
        if self.employment_status == EmploymentStatus::Terminated {
            return Err(DomainError::conflict("employee already terminated"));
        }
        if date < self.employment_date {
            return Err(DomainError::validation(
                "termination date precedes employment date",
            ));
        }
        self.employment_status = EmploymentStatus::Terminated;
        self.termination_date = Some(date);
        self.updated_at = now;
        Ok(())
    }

    /// Replace the role reference and its embedded snapshot.
    pub fn assign_role(&mut self, role: Role, now: DateTime<Utc>) {
        self.role_id = role.id;
        self.role = Some(role);
        self.updated_at = now;
    }

    pub fn mark_password_updated(&mut self, now: DateTime<Utc>) {
        self.password_updated = true;
        self.updated_at = now;
    }

    /// The session's snapshot of this record.
    ///
    /// A record without an embedded role still produces a profile; the
    /// session then derives an empty permission set from it.
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            id: self.id,
            employee_number: self.employee_number.clone(),
            display_name: self.display_name(),
            email: self.email.clone(),
            password_updated: self.password_updated,
            role: self.role.clone(),
        }
    }
}

impl Entity for Employee {
    type Id = EmployeeId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> DateTime<Utc> {
        Utc::now()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn new_employee() -> NewEmployee {
        NewEmployee {
            id: EmployeeId::new(1),
            employee_number: EmployeeNumber::new("EMP001").unwrap(),
            email: "Ama.Owusu@Example.com".to_string(),
            first_name: Some("Ama".to_string()),
            last_name: Some("Owusu".to_string()),
            gender: Some(Gender::Female),
            phone: None,
            address: None,
            date_of_birth: date(1990, 4, 12),
            employment_date: date(2020, 1, 6),
            role_id: RoleId::new(2),
            role: None,
            designation_id: DesignationId::new(3),
            department_id: DepartmentId::new(1),
            manager: None,
        }
    }

    #[test]
    fn create_normalizes_email() {
        let employee = Employee::create(new_employee(), now()).unwrap();
        assert_eq!(employee.email, "ama.owusu@example.com");
        assert_eq!(employee.employment_status, EmploymentStatus::Active);
        assert!(!employee.password_updated);
    }

    #[test]
    fn invalid_email_is_rejected() {
        let mut params = new_employee();
        params.email = "not-an-email".to_string();
        assert!(Employee::create(params, now()).is_err());
    }

    #[test]
    fn display_name_prefers_full_name() {
        let employee = Employee::create(new_employee(), now()).unwrap();
        assert_eq!(employee.display_name(), "Ama Owusu");

        let mut params = new_employee();
        params.first_name = None;
        params.last_name = None;
        let anonymous = Employee::create(params, now()).unwrap();
        assert_eq!(anonymous.display_name(), "EMP001");
    }

    #[test]
    fn suspend_and_reinstate_cycle() {
        let mut employee = Employee::create(new_employee(), now()).unwrap();

        employee.suspend(now()).unwrap();
        assert_eq!(employee.employment_status, EmploymentStatus::Suspended);
        assert!(employee.suspend(now()).is_err());

        employee.reinstate(now()).unwrap();
        assert_eq!(employee.employment_status, EmploymentStatus::Active);
        assert!(employee.reinstate(now()).is_err());
    }

    #[test]
    fn termination_is_final() {
        let mut employee = Employee::create(new_employee(), now()).unwrap();
        employee.terminate(date(2024, 6, 30), now()).unwrap();

        assert_eq!(employee.employment_status, EmploymentStatus::Terminated);
        assert_eq!(employee.termination_date, Some(date(2024, 6, 30)));
        assert!(employee.suspend(now()).is_err());
        assert!(employee.reinstate(now()).is_err());
        assert!(employee.terminate(date(2024, 7, 1), now()).is_err());
    }

    #[test]
    fn termination_before_employment_is_rejected() {
        let mut employee = Employee::create(new_employee(), now()).unwrap();
        assert!(employee.terminate(date(2019, 12, 31), now()).is_err());
    }

    #[test]
    fn profile_carries_identity_and_role() {
        let mut employee = Employee::create(new_employee(), now()).unwrap();
        let profile = employee.profile();
        assert_eq!(profile.display_name, "Ama Owusu");
        assert!(profile.role.is_none());

        let role = Role::new(RoleId::new(9), "HR", None, "employee:view", Utc::now()).unwrap();
        employee.assign_role(role, now());
        let profile = employee.profile();
        assert_eq!(profile.role.as_ref().unwrap().id, RoleId::new(9));
        assert_eq!(employee.role_id, RoleId::new(9));
    }
}
