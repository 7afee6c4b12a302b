//! Persisted mode state machine

use crate::error::StorageError;
use crate::mode::ThemeMode;
use crate::settings::ThemeSettings;
use crate::storage::PreferenceStorage;
use tracing::{debug, warn};

/// Outcome of a mode transition
#[derive(Debug)]
pub struct ModeChange {
    pub previous: ThemeMode,
    pub current: ThemeMode,
    /// Whether a write to storage was attempted
    pub written: bool,
    /// Set when the write did not land
    pub persist_error: Option<StorageError>,
}

impl ModeChange {
    pub fn changed(&self) -> bool {
        self.previous != self.current
    }

    pub fn persisted(&self) -> bool {
        self.written && self.persist_error.is_none()
    }
}

/// Holds the current mode and writes every change through to storage
pub struct ModeStore {
    mode: ThemeMode,
    key: String,
    storage: Box<dyn PreferenceStorage>,
    /// The last write failed, so storage holds an older mode
    unsaved: bool,
}

impl ModeStore {
    /// Read the stored preference once
    ///
    /// An absent, unreadable or invalid value falls back to the configured
    /// default. The fallback is not written back.
    pub fn load(storage: Box<dyn PreferenceStorage>, settings: &ThemeSettings) -> Self {
        let key = settings.storage_key.clone();
        let fallback = settings.default_mode;

        let mode = match storage.get(&key) {
            Ok(Some(raw)) => match raw.parse::<ThemeMode>() {
                Ok(mode) => {
                    debug!(key = %key, mode = %mode, "restored theme mode");
                    mode
                }
                Err(err) => {
                    warn!(key = %key, value = %raw, error = %err, "ignoring stored theme mode");
                    fallback
                }
            },
            Ok(None) => {
                debug!(key = %key, mode = %fallback, "no stored theme mode, using default");
                fallback
            }
            Err(err) => {
                warn!(key = %key, error = %err, "failed to read theme preference");
                fallback
            }
        };

        Self {
            mode,
            key,
            storage,
            unsaved: false,
        }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn storage_key(&self) -> &str {
        &self.key
    }

    /// Switch to `mode`, persisting it
    ///
    /// Setting the current mode does not write unless an earlier write
    /// failed, in which case the write is retried. A failed write is logged
    /// and reported but does not undo the transition.
    pub fn set_mode(&mut self, mode: ThemeMode) -> ModeChange {
        let previous = self.mode;
        if previous == mode && !self.unsaved {
            return ModeChange {
                previous,
                current: mode,
                written: false,
                persist_error: None,
            };
        }

        let persist_error = self.storage.set(&self.key, mode.as_str()).err();
        if let Some(err) = &persist_error {
            warn!(key = %self.key, mode = %mode, error = %err, "failed to persist theme mode");
        }
        self.unsaved = persist_error.is_some();
        self.mode = mode;
        if previous != mode {
            debug!(from = %previous, to = %mode, "theme mode changed");
        }

        ModeChange {
            previous,
            current: mode,
            written: true,
            persist_error,
        }
    }

    /// Whether storage is behind the current mode
    pub fn has_unsaved_mode(&self) -> bool {
        self.unsaved
    }

    pub fn toggle(&mut self) -> ModeChange {
        self.set_mode(self.mode.toggle())
    }
}
