use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use leavedesk_core::{DomainError, DomainResult, Entity, LeaveTypeId};

/// Kind of prerequisite a leave type can impose.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequirementType {
    /// A supporting document must be attached (e.g. a hospital report).
    #[serde(rename = "DOCUMENT")]
    Document,
    /// A minimum length of service applies.
    #[serde(rename = "MIN_SERVICE")]
    MinService,
    #[serde(rename = "OTHER")]
    Other,
}

/// A single prerequisite on a leave type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveRequirement {
    #[serde(rename = "type")]
    pub kind: RequirementType,
    pub value: String,
}

/// A category of leave (annual, sick, ...) with an optional yearly cap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveType {
    pub id: LeaveTypeId,
    pub name: String,
    pub description: Option<String>,
    pub max_days: Option<u32>,
    pub requirements: Vec<LeaveRequirement>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl LeaveType {
    pub fn new(
        id: LeaveTypeId,
        name: impl Into<String>,
        description: Option<String>,
        max_days: Option<u32>,
        now: DateTime<Utc>,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("leave type name cannot be empty"));
        }
        if max_days == Some(0) {
            return Err(DomainError::validation("max days must be positive"));
        }

        Ok(Self {
            id,
            name: name.trim().to_string(),
            description,
            max_days,
            requirements: Vec::new(),
            created_at: now,
            updated_at: now,
        })
    }

    pub fn add_requirement(
        &mut self,
        kind: RequirementType,
        value: impl Into<String>,
        now: DateTime<Utc>,
    ) -> DomainResult<()> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::validation("requirement value cannot be empty"));
        }
        self.requirements.push(LeaveRequirement {
            kind,
            value: value.trim().to_string(),
        });
        self.updated_at = now;
        Ok(())
    }

    pub fn requires_document(&self) -> bool {
        self.requirements
            .iter()
            .any(|r| r.kind == RequirementType::Document)
    }
}

impl Entity for LeaveType {
    type Id = LeaveTypeId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
