//! Durable session service: the session state machine plus persistence.
//!
//! Every mutating call is an explicit two-step - mutate the in-memory
//! session, then serialize the snapshot to the store. Persistence is
//! fire-and-forget from the caller's perspective: a failed write is logged
//! and the in-memory mutation stands, so within a running process reads
//! always observe every prior mutation. Across restarts the last persisted
//! snapshot wins.

use leavedesk_auth::{Permission, Session, SessionSnapshot, UserProfile};

use crate::snapshot_store::SnapshotStore;

/// Fixed storage key for the session record.
pub const SESSION_KEY: &str = "auth-storage";

/// The process-wide session store: single source of truth for "who is
/// logged in and what can they do", durable across reloads.
#[derive(Debug)]
pub struct SessionService<S> {
    session: Session,
    store: S,
}

impl<S: SnapshotStore> SessionService<S> {
    /// Open the service, hydrating from the persisted snapshot when one is
    /// present and well-formed. A missing or malformed snapshot starts the
    /// session empty; hydration never fails outward.
    pub fn open(store: S) -> Self {
        let session = match store.load::<SessionSnapshot>(SESSION_KEY) {
            Ok(Some(snapshot)) => {
                let session = Session::from_snapshot(snapshot);
                if session.is_authenticated() {
                    tracing::debug!("session hydrated from persisted snapshot");
                }
                session
            }
            Ok(None) => Session::new(),
            Err(err) => {
                tracing::warn!(error = %err, "failed to read persisted session, starting unauthenticated");
                Session::new()
            }
        };

        Self { session, store }
    }

    pub fn login(&mut self, token: impl Into<String>, user: UserProfile) {
        self.session.login(token, user);
        tracing::info!(
            employee = %self.session.user().map(|u| u.employee_number.to_string()).unwrap_or_default(),
            permissions = self.session.permissions().len(),
            "session established"
        );
        self.persist();
    }

    pub fn logout(&mut self) {
        self.session.logout();
        tracing::info!("session cleared");
        self.persist();
    }

    pub fn update_user(&mut self, user: UserProfile) {
        self.session.update_user(user);
        self.persist();
    }

    /// Immutable view of the current session for gate evaluation and
    /// conditional rendering.
    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn has_permission(&self, permission: &Permission) -> bool {
        self.session.has_permission(permission)
    }

    pub fn has_any_permission(&self, permissions: &[Permission]) -> bool {
        self.session.has_any_permission(permissions)
    }

    pub fn has_all_permissions(&self, permissions: &[Permission]) -> bool {
        self.session.has_all_permissions(permissions)
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.session.snapshot()
    }

    /// Hand the store back (used by tests to simulate a restart).
    pub fn into_store(self) -> S {
        self.store
    }

    fn persist(&self) {
        if let Err(err) = self.store.save(SESSION_KEY, &self.session.snapshot()) {
            tracing::warn!(error = %err, "failed to persist session snapshot");
        }
    }
}
