//! Global theme context singleton
//!
//! ThemeContext owns the mode store and the derived state of the current
//! mode. Derived state is published as one immutable [`ThemeSnapshot`], so a
//! reader never sees tokens of one mode next to a theme of the other.

use crate::builder::{build_theme_from_tokens, ThemeConfig};
use crate::error::ThemeError;
use crate::mode::ThemeMode;
use crate::settings::ThemeSettings;
use crate::storage::PreferenceStorage;
use crate::store::{ModeChange, ModeStore};
use crate::tokens::{ColorTokens, TokenTable};
use crate::variables::{self, project, CssVariables, MODE_ATTRIBUTE};
use indexmap::IndexMap;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, RwLock};
use tracing::{debug, info, trace, warn};

/// Global theme context instance
static THEME_CONTEXT: OnceLock<ThemeContext> = OnceLock::new();

/// Mode currently marked on the document root
static ROOT_MODE: RwLock<Option<ThemeMode>> = RwLock::new(None);

/// Marker callback - set by the host to tag its document root
static ROOT_MARKER_CALLBACK: Mutex<Option<fn(&'static str, &'static str)>> = Mutex::new(None);

/// Register the function that applies `attribute="value"` to the host's
/// document root
///
/// It is called when the global context is initialized and on each of its
/// mode changes. Standalone contexts never touch the marker.
pub fn set_root_marker_callback(callback: fn(&'static str, &'static str)) {
    *ROOT_MARKER_CALLBACK.lock().unwrap() = Some(callback);
}

/// The mode last marked on the document root
pub fn root_mode() -> Option<ThemeMode> {
    *ROOT_MODE.read().unwrap()
}

/// The root marker as `(attribute, value)`, e.g. `("data-theme", "dark")`
pub fn root_attribute() -> Option<(&'static str, &'static str)> {
    root_mode().map(|mode| (MODE_ATTRIBUTE, mode.as_str()))
}

fn apply_root_marker(mode: ThemeMode) {
    let previous = ROOT_MODE.write().unwrap().replace(mode);
    if previous != Some(mode) {
        trace!(attribute = MODE_ATTRIBUTE, mode = %mode, "root marker updated");
    }
    if let Some(callback) = *ROOT_MARKER_CALLBACK.lock().unwrap() {
        callback(MODE_ATTRIBUTE, mode.as_str());
    }
}

/// Everything derived from one mode
#[derive(Clone, Debug, PartialEq)]
pub struct ThemeSnapshot {
    pub mode: ThemeMode,
    pub tokens: ColorTokens,
    pub variables: CssVariables,
    pub theme: ThemeConfig,
}

impl ThemeSnapshot {
    /// Derive the snapshot for `mode`; pure
    pub fn derive(
        table: &TokenTable,
        settings: &ThemeSettings,
        mode: ThemeMode,
    ) -> Result<Self, ThemeError> {
        let tokens = table.for_mode(mode).clone();
        let variables = project(&tokens)?;
        let theme = build_theme_from_tokens(mode, &tokens, settings);
        Ok(Self {
            mode,
            tokens,
            variables,
            theme,
        })
    }
}

/// Handle returned by [`ThemeContext::subscribe`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// The current snapshot and its position in the change sequence
struct Published {
    generation: u64,
    snapshot: Arc<ThemeSnapshot>,
}

struct Subscriber {
    callback: Box<dyn Fn(&ThemeSnapshot) + Send + Sync>,
    /// Highest generation handed to `callback`
    delivered: AtomicU64,
}

/// Theme state shared with every consumer
pub struct ThemeContext {
    table: TokenTable,
    settings: ThemeSettings,

    /// Serializes mode transitions
    store: Mutex<ModeStore>,

    /// Derived state of the current mode
    published: RwLock<Published>,

    /// Change listeners, in subscription order
    listeners: RwLock<IndexMap<ListenerId, Arc<Subscriber>>>,
    next_listener_id: AtomicU64,
}

impl ThemeContext {
    /// Initialize the global context (call once at app startup)
    pub fn init(
        storage: impl PreferenceStorage + 'static,
        settings: ThemeSettings,
    ) -> Result<&'static ThemeContext, ThemeError> {
        Self::init_with(Self::new(storage, settings)?)
    }

    /// Install an already constructed context as the global one
    pub fn init_with(context: ThemeContext) -> Result<&'static ThemeContext, ThemeError> {
        let mode = context.mode();
        THEME_CONTEXT
            .set(context)
            .map_err(|_| ThemeError::AlreadyInitialized)?;
        apply_root_marker(mode);
        info!(mode = %mode, "theme context initialized");
        Self::try_get()
    }

    /// Get the global theme context
    pub fn get() -> &'static ThemeContext {
        THEME_CONTEXT
            .get()
            .expect("ThemeContext not initialized. Call ThemeContext::init() at app startup.")
    }

    pub fn try_get() -> Result<&'static ThemeContext, ThemeError> {
        THEME_CONTEXT.get().ok_or(ThemeError::NotInitialized)
    }

    pub fn is_initialized() -> bool {
        THEME_CONTEXT.get().is_some()
    }

    fn is_global(&self) -> bool {
        THEME_CONTEXT
            .get()
            .is_some_and(|global| std::ptr::eq(global, self))
    }

    /// Create a standalone context
    ///
    /// Uses the built-in token tables, or tables derived from
    /// `settings.seed` when one is configured.
    pub fn new(
        storage: impl PreferenceStorage + 'static,
        settings: ThemeSettings,
    ) -> Result<Self, ThemeError> {
        let table = match &settings.seed {
            Some(seed) => TokenTable::from_seed(seed),
            None => TokenTable::builtin().clone(),
        };
        Self::with_table(table, storage, settings)
    }

    /// Create a context over custom token tables
    pub fn with_table(
        table: TokenTable,
        storage: impl PreferenceStorage + 'static,
        settings: ThemeSettings,
    ) -> Result<Self, ThemeError> {
        settings.validate()?;
        // Both projections must succeed up front; a mode switch never fails
        // on a table that was accepted here.
        for mode in ThemeMode::ALL {
            project(table.for_mode(mode))?;
        }

        let store = ModeStore::load(Box::new(storage), &settings);
        let snapshot = ThemeSnapshot::derive(&table, &settings, store.mode())?;
        debug!(mode = %snapshot.mode, "theme context created");

        Ok(Self {
            table,
            settings,
            store: Mutex::new(store),
            published: RwLock::new(Published {
                generation: 0,
                snapshot: Arc::new(snapshot),
            }),
            listeners: RwLock::new(IndexMap::new()),
            next_listener_id: AtomicU64::new(0),
        })
    }

    // ========== Derived State ==========

    /// The current snapshot; stays valid after later mode changes
    pub fn snapshot(&self) -> Arc<ThemeSnapshot> {
        Arc::clone(&self.published.read().unwrap().snapshot)
    }

    fn published(&self) -> (u64, Arc<ThemeSnapshot>) {
        let published = self.published.read().unwrap();
        (published.generation, Arc::clone(&published.snapshot))
    }

    pub fn mode(&self) -> ThemeMode {
        self.snapshot().mode
    }

    pub fn tokens(&self) -> ColorTokens {
        self.snapshot().tokens.clone()
    }

    pub fn variables(&self) -> CssVariables {
        self.snapshot().variables.clone()
    }

    pub fn theme(&self) -> ThemeConfig {
        self.snapshot().theme.clone()
    }

    pub fn table(&self) -> &TokenTable {
        &self.table
    }

    pub fn settings(&self) -> &ThemeSettings {
        &self.settings
    }

    /// Static stylesheet with a variable block per mode
    pub fn stylesheet(&self) -> Result<String, ThemeError> {
        Ok(variables::stylesheet(&self.table, self.settings.default_mode)?)
    }

    // ========== Mode ==========

    /// Switch to `mode`
    ///
    /// Persists the preference, publishes the new snapshot, refreshes the
    /// root marker and then notifies subscribers. Setting the current mode
    /// only retries a write that previously failed.
    pub fn set_mode(&self, mode: ThemeMode) -> Result<ModeChange, ThemeError> {
        let store = self.store.lock().unwrap();
        self.transition(store, mode)
    }

    /// Switch to the other mode
    ///
    /// The target is read under the same lock that applies it, so concurrent
    /// toggles never collapse into one.
    pub fn toggle(&self) -> Result<ModeChange, ThemeError> {
        let store = self.store.lock().unwrap();
        let mode = store.mode().toggle();
        self.transition(store, mode)
    }

    fn transition(
        &self,
        mut store: MutexGuard<'_, ModeStore>,
        mode: ThemeMode,
    ) -> Result<ModeChange, ThemeError> {
        if store.mode() == mode {
            trace!(mode = %mode, "theme mode unchanged");
            return Ok(store.set_mode(mode));
        }

        // Derive before touching the store so a failure changes nothing.
        let snapshot = Arc::new(ThemeSnapshot::derive(&self.table, &self.settings, mode)?);
        let change = store.set_mode(mode);
        {
            let mut published = self.published.write().unwrap();
            published.generation += 1;
            published.snapshot = snapshot;
        }
        if self.is_global() {
            apply_root_marker(mode);
        }
        drop(store);

        self.notify();
        Ok(change)
    }

    // ========== Subscribers ==========

    /// Call `listener` with the new snapshot after every mode change
    pub fn subscribe<F>(&self, listener: F) -> ListenerId
    where
        F: Fn(&ThemeSnapshot) + Send + Sync + 'static,
    {
        let id = ListenerId(self.next_listener_id.fetch_add(1, Ordering::Relaxed));
        let subscriber = Subscriber {
            callback: Box::new(listener),
            delivered: AtomicU64::new(self.published.read().unwrap().generation),
        };
        self.listeners.write().unwrap().insert(id, Arc::new(subscriber));
        id
    }

    /// Returns false if `id` was not subscribed
    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        self.listeners.write().unwrap().shift_remove(&id).is_some()
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.read().unwrap().len()
    }

    /// Hand the current snapshot to every subscriber that has not seen it
    ///
    /// Each subscriber is given the snapshot published at the moment it is
    /// reached and never one older than a snapshot it already received. A
    /// change made while this loop runs (by a listener or another thread)
    /// therefore supersedes the rest of this round.
    fn notify(&self) {
        // Listeners run without the lock held so they can subscribe,
        // unsubscribe or switch modes themselves.
        let listeners: Vec<(ListenerId, Arc<Subscriber>)> = self
            .listeners
            .read()
            .unwrap()
            .iter()
            .map(|(id, subscriber)| (*id, Arc::clone(subscriber)))
            .collect();

        for (id, subscriber) in listeners {
            let (generation, snapshot) = self.published();
            if subscriber.delivered.fetch_max(generation, Ordering::AcqRel) >= generation {
                continue;
            }
            let callback = &subscriber.callback;
            if panic::catch_unwind(AssertUnwindSafe(|| callback(&snapshot))).is_err() {
                warn!(listener = id.0, mode = %snapshot.mode, "theme listener panicked");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use crate::tokens::get_tokens;
    use std::sync::atomic::AtomicUsize;

    fn context(storage: &MemoryStorage) -> ThemeContext {
        ThemeContext::new(storage.clone(), ThemeSettings::default()).unwrap()
    }

    #[test]
    fn test_snapshot_is_consistent() {
        let ctx = context(&MemoryStorage::new());
        for mode in [ThemeMode::Light, ThemeMode::Dark, ThemeMode::Light] {
            ctx.set_mode(mode).unwrap();
            let snapshot = ctx.snapshot();
            assert_eq!(snapshot.mode, mode);
            assert_eq!(&snapshot.tokens, get_tokens(mode));
            assert_eq!(snapshot.variables, project(get_tokens(mode)).unwrap());
            assert_eq!(snapshot.theme.mode(), mode);
        }
    }

    #[test]
    fn test_old_snapshots_stay_valid() {
        let ctx = context(&MemoryStorage::new());
        let before = ctx.snapshot();
        ctx.toggle().unwrap();
        assert_eq!(before.mode, ThemeMode::Dark);
        assert_eq!(ctx.mode(), ThemeMode::Light);
    }

    #[test]
    fn test_same_mode_is_silent() {
        let storage = MemoryStorage::new();
        let ctx = context(&storage);
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&calls);
        ctx.subscribe(move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
        });

        let change = ctx.set_mode(ThemeMode::Dark).unwrap();
        assert!(!change.changed());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(storage.is_empty());
    }

    #[test]
    fn test_unsubscribe() {
        let ctx = context(&MemoryStorage::new());
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&calls);
        let id = ctx.subscribe(move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
        });

        ctx.toggle().unwrap();
        assert!(ctx.unsubscribe(id));
        assert!(!ctx.unsubscribe(id));
        ctx.toggle().unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(ctx.subscriber_count(), 0);
    }

    #[test]
    fn test_seeded_settings_derive_tables() {
        let settings = ThemeSettings::from_toml_str("[seed]\nbrand_hue = 160.0").unwrap();
        let ctx = ThemeContext::new(MemoryStorage::new(), settings).unwrap();
        assert_eq!(ctx.tokens().text.brand.h, 160.0);
        assert_ne!(ctx.table(), TokenTable::builtin());
    }

    #[test]
    fn test_invalid_settings_are_rejected() {
        let settings = ThemeSettings {
            storage_key: String::new(),
            ..ThemeSettings::default()
        };
        assert!(matches!(
            ThemeContext::new(MemoryStorage::new(), settings),
            Err(ThemeError::InvalidSetting { .. })
        ));
    }
}
