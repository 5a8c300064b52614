//! Navigation resolver: route lookup + gate evaluation.
//!
//! Evaluated synchronously on each navigation event; returns a definite
//! outcome for every input. Resolution is single-step, like the router it
//! models: a redirect target is itself resolved on the follow-up
//! navigation, so an unauthenticated visitor bounced off an unknown path
//! lands on the dashboard resolution, which in turn sends them to login.

use leavedesk_auth::{gate, Access, Destination, Session};

use crate::routes::{find_route, RouteAccess};

/// Outcome of resolving a requested path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Render the requested destination.
    Proceed,
    /// Navigate to this path instead.
    Redirect(&'static str),
}

/// Resolve a requested path against the route table and the gate.
pub fn resolve(session: &Session, path: &str) -> Resolution {
    let Some(route) = find_route(path) else {
        // Unknown paths fall through to the landing page.
        return Resolution::Redirect(Destination::Dashboard.path());
    };

    let access = match &route.access {
        RouteAccess::Public => gate::evaluate_public(session),
        RouteAccess::Authenticated => gate::evaluate(session, &[], Default::default()),
        RouteAccess::Permitted { permissions, mode } => gate::evaluate(session, permissions, *mode),
    };

    match access {
        Access::Allow => Resolution::Proceed,
        Access::Redirect(destination) => {
            tracing::debug!(path, redirect = destination.path(), "navigation redirected");
            Resolution::Redirect(destination.path())
        }
    }
}
