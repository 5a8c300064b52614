//! Leave requests and their decision lifecycle.
//!
//! # Invariants
//! - Decisions only apply to Pending requests; Approved, Rejected, and
//!   Canceled are terminal.
//! - Every decision leaves an approval record behind (approver, level,
//!   decision, optional comment).

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use leavedesk_core::{
    DomainError, DomainResult, EmployeeNumber, Entity, LeaveId, LeaveTypeId,
};

use crate::leave_type::LeaveType;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LeaveStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
    Canceled,
}

impl core::fmt::Display for LeaveStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LeaveStatus::Pending => write!(f, "Pending"),
            LeaveStatus::Approved => write!(f, "Approved"),
            LeaveStatus::Rejected => write!(f, "Rejected"),
            LeaveStatus::Canceled => write!(f, "Canceled"),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApprovalDecision {
    Pending,
    Approved,
    Rejected,
}

/// One approver's decision on a request.
///
/// Level 1 is the direct manager, level 2 the manager's manager.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveApproval {
    pub approver: EmployeeNumber,
    pub level: u8,
    pub decision: ApprovalDecision,
    pub comment: Option<String>,
    pub decided_at: DateTime<Utc>,
}

/// A leave request over an inclusive date range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveRequest {
    pub id: LeaveId,
    pub employee: EmployeeNumber,
    pub leave_type_id: LeaveTypeId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
    pub status: LeaveStatus,
    pub approvals: Vec<LeaveApproval>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl LeaveRequest {
    pub fn new(
        id: LeaveId,
        employee: EmployeeNumber,
        leave_type_id: LeaveTypeId,
        start_date: NaiveDate,
        end_date: NaiveDate,
        reason: impl Into<String>,
        now: DateTime<Utc>,
    ) -> DomainResult<Self> {
        if end_date < start_date {
            return Err(DomainError::validation("end date precedes start date"));
        }
        let reason = reason.into();
        if reason.trim().is_empty() {
            return Err(DomainError::validation("reason cannot be empty"));
        }

        Ok(Self {
            id,
            employee,
            leave_type_id,
            start_date,
            end_date,
            reason: reason.trim().to_string(),
            status: LeaveStatus::Pending,
            approvals: Vec::new(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Inclusive length of the requested range in days.
    pub fn duration_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }

    /// Check the request against the type's yearly cap.
    pub fn check_type_limit(&self, leave_type: &LeaveType) -> DomainResult<()> {
        if let Some(max_days) = leave_type.max_days {
            if self.duration_days() > i64::from(max_days) {
                return Err(DomainError::validation(format!(
                    "requested {} days exceeds the {} limit of {} days",
                    self.duration_days(),
                    leave_type.name,
                    max_days
                )));
            }
        }
        Ok(())
    }

    pub fn approve(
        &mut self,
        approver: EmployeeNumber,
        level: u8,
        comment: Option<String>,
        now: DateTime<Utc>,
    ) -> DomainResult<()> {
        self.decide(approver, level, ApprovalDecision::Approved, comment, now)
    }

    pub fn reject(
        &mut self,
        approver: EmployeeNumber,
        level: u8,
        comment: Option<String>,
        now: DateTime<Utc>,
    ) -> DomainResult<()> {
        self.decide(approver, level, ApprovalDecision::Rejected, comment, now)
    }

    /// Employee-initiated withdrawal of a pending request.
    pub fn cancel(&mut self, now: DateTime<Utc>) -> DomainResult<()> {
        if self.status != LeaveStatus::Pending {
            return Err(DomainError::conflict(format!(
                "cannot cancel a {} request",
                self.status
            )));
        }
        self.status = LeaveStatus::Canceled;
        self.updated_at = now;
        Ok(())
    }

    fn decide(
        &mut self,
        approver: EmployeeNumber,
        level: u8,
        decision: ApprovalDecision,
        comment: Option<String>,
        now: DateTime<Utc>,
    ) -> DomainResult<()> {
        if self.status != LeaveStatus::Pending {
            return Err(DomainError::conflict(format!(
                "request already {}",
                self.status
            )));
        }
        if level == 0 {
            return Err(DomainError::validation("approval level starts at 1"));
        }
        if approver == self.employee {
            return Err(DomainError::invariant("employees cannot decide their own leave"));
        }

        self.status = match decision {
            ApprovalDecision::Approved => LeaveStatus::Approved,
            ApprovalDecision::Rejected => LeaveStatus::Rejected,
            ApprovalDecision::Pending => {
                return Err(DomainError::validation("a decision must approve or reject"))
            }
        };
        self.approvals.push(LeaveApproval {
            approver,
            level,
            decision,
            comment,
            decided_at: now,
        });
        self.updated_at = now;
        Ok(())
    }
}

impl Entity for LeaveRequest {
    type Id = LeaveId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
