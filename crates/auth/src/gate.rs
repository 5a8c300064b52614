//! Navigation gate: per-navigation access decisions.
//!
//! A pure decision function over a session snapshot. Every input maps to a
//! definite decision - there are no error returns, and the gate never
//! mutates the session.

use serde::{Deserialize, Serialize};

use crate::{Permission, Session};

/// How a multi-permission requirement is combined.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MatchMode {
    /// At least one listed permission suffices (the default).
    #[default]
    Any,
    /// Every listed permission must be granted.
    All,
}

/// Redirect targets the gate can produce.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Destination {
    /// The login page - only ever the target for unauthenticated visitors.
    Login,
    /// The default authorized landing page.
    Dashboard,
}

impl Destination {
    pub fn path(&self) -> &'static str {
        match self {
            Destination::Login => "/login",
            Destination::Dashboard => "/dashboard",
        }
    }
}

/// Outcome of a gate evaluation.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Access {
    Allow,
    Redirect(Destination),
}

impl Access {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Access::Allow)
    }
}

/// Decide whether a protected destination is reachable.
///
/// - Unauthenticated → redirect to login.
/// - Authenticated with an empty requirement list → allow. An empty list
///   means "any authenticated user may enter", never "blocked".
/// - Authenticated with requirements → combine per [`MatchMode`]; denied
///   visitors are sent to the dashboard, not back to login, since they are
///   already authenticated.
///
/// Unknown permission strings in `required` are never satisfied and so
/// simply deny.
pub fn evaluate(session: &Session, required: &[Permission], mode: MatchMode) -> Access {
    if !session.is_authenticated() {
        return Access::Redirect(Destination::Login);
    }

    if required.is_empty() {
        return Access::Allow;
    }

    let granted = match mode {
        MatchMode::Any => session.has_any_permission(required),
        MatchMode::All => session.has_all_permissions(required),
    };

    if granted {
        Access::Allow
    } else {
        Access::Redirect(Destination::Dashboard)
    }
}

/// Inverse gate for public-only destinations (login, register).
///
/// An authenticated visitor is sent to the landing page; everyone else may
/// enter.
pub fn evaluate_public(session: &Session) -> Access {
    if session.is_authenticated() {
        Access::Redirect(Destination::Dashboard)
    } else {
        Access::Allow
    }
}
