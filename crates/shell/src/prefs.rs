//! Persisted UI preferences (sidebar state, theme).

use serde::{Deserialize, Serialize};

use leavedesk_infra::SnapshotStore;

/// Fixed storage key for the preferences record.
pub const PREFS_KEY: &str = "ui-storage";

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UiPreferences {
    pub sidebar_collapsed: bool,
    pub theme: Theme,
}

/// Durable preferences store, mirroring the session service's
/// mutate-then-persist shape.
#[derive(Debug)]
pub struct PreferencesService<S> {
    prefs: UiPreferences,
    store: S,
}

impl<S: SnapshotStore> PreferencesService<S> {
    /// Open the service; missing or malformed preferences fall back to the
    /// defaults.
    pub fn open(store: S) -> Self {
        let prefs = match store.load::<UiPreferences>(PREFS_KEY) {
            Ok(Some(prefs)) => prefs,
            Ok(None) => UiPreferences::default(),
            Err(err) => {
                tracing::warn!(error = %err, "failed to read ui preferences, using defaults");
                UiPreferences::default()
            }
        };

        Self { prefs, store }
    }

    pub fn prefs(&self) -> UiPreferences {
        self.prefs
    }

    pub fn toggle_sidebar(&mut self) {
        self.prefs.sidebar_collapsed = !self.prefs.sidebar_collapsed;
        self.persist();
    }

    pub fn set_sidebar_collapsed(&mut self, collapsed: bool) {
        self.prefs.sidebar_collapsed = collapsed;
        self.persist();
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.prefs.theme = theme;
        self.persist();
    }

    pub fn toggle_theme(&mut self) {
        self.prefs.theme = match self.prefs.theme {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        };
        self.persist();
    }

    pub fn into_store(self) -> S {
        self.store
    }

    fn persist(&self) {
        if let Err(err) = self.store.save(PREFS_KEY, &self.prefs) {
            tracing::warn!(error = %err, "failed to persist ui preferences");
        }
    }
}
