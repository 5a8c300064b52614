use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use leavedesk_core::{DomainError, DomainResult, EmployeeNumber, LeaveTypeId};

/// Per-employee, per-type, per-year leave balance.
///
/// `remaining` is derived from allocated and used; it is never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveBalance {
    pub employee: EmployeeNumber,
    pub leave_type_id: LeaveTypeId,
    pub year: i32,
    pub allocated_days: u32,
    pub used_days: u32,
    pub updated_at: DateTime<Utc>,
}

impl LeaveBalance {
    pub fn allocate(
        employee: EmployeeNumber,
        leave_type_id: LeaveTypeId,
        year: i32,
        allocated_days: u32,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            employee,
            leave_type_id,
            year,
            allocated_days,
            used_days: 0,
            updated_at: now,
        }
    }

    pub fn remaining_days(&self) -> u32 {
        self.allocated_days.saturating_sub(self.used_days)
    }

    /// Consume days for an approved request.
    pub fn consume(&mut self, days: u32, now: DateTime<Utc>) -> DomainResult<()> {
        if days > self.remaining_days() {
            return Err(DomainError::conflict(format!(
                "insufficient balance: requested {days}, remaining {}",
                self.remaining_days()
            )));
        }
        self.used_days += days;
        self.updated_at = now;
        Ok(())
    }

    /// Return days to the balance (e.g. an approved leave later canceled).
    ///
    /// Restoring more than was used clamps at zero used days.
    pub fn restore(&mut self, days: u32, now: DateTime<Utc>) {
        self.used_days = self.used_days.saturating_sub(days);
        self.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn balance(allocated: u32) -> LeaveBalance {
        LeaveBalance::allocate(
            EmployeeNumber::new("EMP001").unwrap(),
            LeaveTypeId::new(1),
            2025,
            allocated,
            Utc::now(),
        )
    }

    #[test]
    fn consume_reduces_remaining() {
        let mut b = balance(20);
        b.consume(5, Utc::now()).unwrap();
        assert_eq!(b.remaining_days(), 15);
        assert_eq!(b.used_days, 5);
    }

    #[test]
    fn overdraw_is_rejected_and_state_unchanged() {
        let mut b = balance(3);
        assert!(b.consume(4, Utc::now()).is_err());
        assert_eq!(b.used_days, 0);
        assert_eq!(b.remaining_days(), 3);
    }

    #[test]
    fn restore_never_underflows() {
        let mut b = balance(10);
        b.consume(4, Utc::now()).unwrap();
        b.restore(9, Utc::now());
        assert_eq!(b.used_days, 0);
        assert_eq!(b.remaining_days(), 10);
    }
}
