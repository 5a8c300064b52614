//! Session state: the in-memory record of the authenticated identity.
//!
//! # Invariants
//! - `is_authenticated()` ⟺ token present AND user present.
//! - The permission set is always exactly the derivation from the current
//!   user's role at the last login/update; it is never mutated independently.
//!
//! The session never performs IO and never fails: malformed input degrades
//! to an authenticated-but-permission-less state, and a malformed snapshot
//! degrades to an empty (unauthenticated) session. Expired tokens are a
//! collaborator concern - whoever observes an authorization failure from the
//! API calls [`Session::logout`].

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use leavedesk_core::{EmployeeId, EmployeeNumber};

use crate::role::{derive_permissions, Role};
use crate::Permission;

/// Snapshot of the authenticated employee carried inside the session.
///
/// This is a boundary object, deliberately smaller than the full directory
/// record: identity, the forced-password-change flag, and the role the
/// permission set derives from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: EmployeeId,
    pub employee_number: EmployeeNumber,
    pub display_name: String,
    pub email: String,
    /// False until the employee has replaced the provisioned password.
    pub password_updated: bool,
    /// Role snapshot from the login/profile payload. Absent role means no
    /// derivable permissions, not an error.
    pub role: Option<Role>,
}

/// The session: current credential, profile, and derived permission set.
#[derive(Debug, Clone, Default)]
pub struct Session {
    token: Option<String>,
    user: Option<UserProfile>,
    permissions: HashSet<Permission>,
}

impl Session {
    /// Empty, unauthenticated session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adopt a login payload wholesale.
    ///
    /// The permission set is re-derived from the profile's role; a missing
    /// role or an unparseable grant string yields the empty set rather than
    /// an error, and the gate then denies every permission-gated destination.
    pub fn login(&mut self, token: impl Into<String>, user: UserProfile) {
        self.permissions = user
            .role
            .as_ref()
            .map(|role| derive_permissions(&role.permissions))
            .unwrap_or_default();
        self.token = Some(token.into());
        self.user = Some(user);
    }

    /// Clear every field. Idempotent.
    pub fn logout(&mut self) {
        *self = Self::default();
    }

    /// Replace the profile and re-derive permissions, keeping the token.
    ///
    /// Used after profile-affecting side effects (e.g. a forced password
    /// change) without re-authenticating.
    pub fn update_user(&mut self, user: UserProfile) {
        self.permissions = user
            .role
            .as_ref()
            .map(|role| derive_permissions(&role.permissions))
            .unwrap_or_default();
        self.user = Some(user);
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    pub fn permissions(&self) -> &HashSet<Permission> {
        &self.permissions
    }

    /// Exact membership test against the derived set.
    pub fn has_permission(&self, permission: &Permission) -> bool {
        self.permissions.contains(permission)
    }

    /// True iff at least one queried permission is granted.
    pub fn has_any_permission(&self, permissions: &[Permission]) -> bool {
        permissions.iter().any(|p| self.permissions.contains(p))
    }

    /// True iff every queried permission is granted.
    pub fn has_all_permissions(&self, permissions: &[Permission]) -> bool {
        permissions.iter().all(|p| self.permissions.contains(p))
    }

    /// By-value snapshot for persistence.
    pub fn snapshot(&self) -> SessionSnapshot {
        let mut permissions: Vec<Permission> = self.permissions.iter().cloned().collect();
        permissions.sort_by(|a, b| a.as_str().cmp(b.as_str()));

        SessionSnapshot {
            token: self.token.clone(),
            user: self.user.clone(),
            is_authenticated: self.is_authenticated(),
            permissions,
        }
    }

    /// Rebuild a session from a persisted snapshot.
    ///
    /// A snapshot that violates the authentication invariant (claims
    /// authentication without both token and user, or the reverse) is
    /// treated as malformed and yields an empty session. Permissions are
    /// re-derived from the stored role so the derivation invariant holds
    /// even if the persisted list drifted.
    pub fn from_snapshot(snapshot: SessionSnapshot) -> Self {
        let consistent =
            snapshot.is_authenticated == (snapshot.token.is_some() && snapshot.user.is_some());
        if !consistent {
            tracing::warn!("persisted session snapshot is inconsistent, starting unauthenticated");
            return Self::default();
        }

        match (snapshot.token, snapshot.user) {
            (Some(token), Some(user)) => {
                let mut session = Self::default();
                session.login(token, user);
                session
            }
            _ => Self::default(),
        }
    }
}

/// The durable record: `{token, user, is_authenticated, permissions}`.
///
/// Serialized under a fixed storage key; must round-trip exactly through a
/// save/load cycle. Permissions are sorted on write so snapshots of equal
/// sessions compare equal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub token: Option<String>,
    pub user: Option<UserProfile>,
    pub is_authenticated: bool,
    pub permissions: Vec<Permission>,
}
