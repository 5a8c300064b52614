use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use leavedesk_core::{DepartmentId, DomainError, DomainResult, Entity};

/// A department: the top-level organizational unit.
///
/// The short code is the stable human-facing handle (e.g. "ENG"); it is
/// normalized to trimmed uppercase on the way in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    pub id: DepartmentId,
    pub name: String,
    pub code: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Department {
    pub fn new(
        id: DepartmentId,
        name: impl Into<String>,
        code: impl Into<String>,
        description: Option<String>,
        now: DateTime<Utc>,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("department name cannot be empty"));
        }

        let code = normalize_code(code.into())?;

        Ok(Self {
            id,
            name: name.trim().to_string(),
            code,
            description,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn rename(&mut self, name: impl Into<String>, now: DateTime<Utc>) -> DomainResult<()> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("department name cannot be empty"));
        }
        self.name = name.trim().to_string();
        self.updated_at = now;
        Ok(())
    }

    pub fn recode(&mut self, code: impl Into<String>, now: DateTime<Utc>) -> DomainResult<()> {
        self.code = normalize_code(code.into())?;
        self.updated_at = now;
        Ok(())
    }

    pub fn set_description(&mut self, description: Option<String>, now: DateTime<Utc>) {
        self.description = description;
        self.updated_at = now;
    }
}

impl Entity for Department {
    type Id = DepartmentId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

fn normalize_code(code: String) -> DomainResult<String> {
    let trimmed = code.trim();
    if trimmed.is_empty() {
        return Err(DomainError::validation("department code cannot be empty"));
    }
    Ok(trimmed.to_uppercase())
}
