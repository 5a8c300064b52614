//! Auth flow boundary: what the API collaborators hand us, and how that
//! reaches the session service.
//!
//! The session core never talks to the network. Login/registration
//! responses arrive here, profile refreshes arrive here, and whichever
//! client observes an authorization failure from the API reports it here.

use leavedesk_directory::Employee;
use leavedesk_infra::{SessionService, SnapshotStore};

/// Payload returned by the authentication collaborator on successful
/// login or registration.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub user: Employee,
}

/// Adopt a login/registration response into the session.
///
/// Infallible: an employee record without an embedded role still logs in,
/// with an empty permission set.
pub fn complete_login<S: SnapshotStore>(sessions: &mut SessionService<S>, response: AuthResponse) {
    let profile = response.user.profile();
    sessions.login(response.access_token, profile);
}

/// Replace the session's profile after a profile-affecting side effect
/// (e.g. a forced password change), keeping the credential.
pub fn refresh_profile<S: SnapshotStore>(sessions: &mut SessionService<S>, employee: &Employee) {
    sessions.update_user(employee.profile());
}

/// React to an authorization failure observed at the API boundary.
///
/// The session core has no expiry timer of its own; token staleness is
/// only ever detected by a collaborator's rejected request.
pub fn on_unauthorized<S: SnapshotStore>(sessions: &mut SessionService<S>) {
    tracing::info!("api rejected the session credential, logging out");
    sessions.logout();
}
