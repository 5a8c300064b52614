//! `leavedesk-shell` — client application shell.
//!
//! Wires the session service and the gate to the things the UI needs:
//! the canonical route table, a navigation resolver, the permission-filtered
//! menu, persisted UI preferences, and the auth flow boundary.

pub mod auth_flow;
pub mod menu;
pub mod navigation;
pub mod prefs;
pub mod routes;
pub mod telemetry;

pub use auth_flow::AuthResponse;
pub use menu::MenuLink;
pub use navigation::{resolve, Resolution};
pub use prefs::{PreferencesService, Theme, UiPreferences, PREFS_KEY};
pub use routes::{find_route, RouteAccess, RouteSpec, ROUTES};
