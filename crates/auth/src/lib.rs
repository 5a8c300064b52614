//! `leavedesk-auth` — session and authorization core.
//!
//! Single source of truth for "who is logged in and what can they do":
//! permission tokens, role-to-permission derivation, the session state
//! machine, and the navigation gate. This crate is pure - persistence and
//! route wiring live in `leavedesk-infra` and `leavedesk-shell`.

pub mod gate;
pub mod permissions;
pub mod role;
pub mod session;

pub use gate::{evaluate, evaluate_public, Access, Destination, MatchMode};
pub use permissions::Permission;
pub use role::{derive_permissions, Role};
pub use session::{Session, SessionSnapshot, UserProfile};
