use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use leavedesk_core::{DepartmentId, DesignationId, DomainError, DomainResult, Entity};

/// A designation: a job title within a department.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Designation {
    pub id: DesignationId,
    pub title: String,
    pub department_id: DepartmentId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Designation {
    pub fn new(
        id: DesignationId,
        title: impl Into<String>,
        department_id: DepartmentId,
        now: DateTime<Utc>,
    ) -> DomainResult<Self> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(DomainError::validation("designation title cannot be empty"));
        }

        Ok(Self {
            id,
            title: title.trim().to_string(),
            department_id,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn retitle(&mut self, title: impl Into<String>, now: DateTime<Utc>) -> DomainResult<()> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(DomainError::validation("designation title cannot be empty"));
        }
        self.title = title.trim().to_string();
        self.updated_at = now;
        Ok(())
    }
}

impl Entity for Designation {
    type Id = DesignationId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_is_trimmed_and_required() {
        let now = Utc::now();
        let designation =
            Designation::new(DesignationId::new(2), "  Senior Engineer ", DepartmentId::new(1), now)
                .unwrap();
        assert_eq!(designation.title, "Senior Engineer");

        assert!(Designation::new(DesignationId::new(3), "   ", DepartmentId::new(1), now).is_err());
    }
}
