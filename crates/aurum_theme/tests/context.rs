use aurum_theme::{
    get_tokens, project, MemoryStorage, PreferenceStorage, StorageError, ThemeContext, ThemeMode,
    ThemeSettings, ThemeSnapshot, TokenGroup,
};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, Weak};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn context(storage: &MemoryStorage) -> ThemeContext {
    init_tracing();
    ThemeContext::new(storage.clone(), ThemeSettings::default()).unwrap()
}

fn stored(storage: &MemoryStorage) -> Option<String> {
    storage.get("themeMode").unwrap()
}

/// Storage whose writes always fail, like a full or disabled localStorage
struct QuotaExceeded;

impl PreferenceStorage for QuotaExceeded {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(Some("light".into()))
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("quota exceeded".into()))
    }
}

#[test]
fn fresh_start_defaults_to_dark() {
    let storage = MemoryStorage::new();
    let ctx = context(&storage);

    assert_eq!(ctx.mode(), ThemeMode::Dark);
    assert_eq!(
        ctx.variables()["--surface-page"],
        get_tokens(ThemeMode::Dark).surface.page.to_css()
    );
    assert_eq!(stored(&storage), None);
}

#[test]
fn toggle_once_switches_to_light() {
    let storage = MemoryStorage::new();
    let ctx = context(&storage);
    let before = ctx.variables()["--text-primary"].clone();

    ctx.toggle().unwrap();

    assert_eq!(ctx.mode(), ThemeMode::Light);
    assert_eq!(stored(&storage).as_deref(), Some("light"));
    let after = ctx.variables()["--text-primary"].clone();
    assert_eq!(before, get_tokens(ThemeMode::Dark).text.primary.to_css());
    assert_eq!(after, get_tokens(ThemeMode::Light).text.primary.to_css());

    // near-white on dark, near-black on light
    assert!(get_tokens(ThemeMode::Dark).text.primary.l > 0.9);
    assert!(get_tokens(ThemeMode::Light).text.primary.l < 0.3);
}

#[test]
fn toggle_twice_returns_to_dark() {
    let storage = MemoryStorage::new();
    let ctx = context(&storage);

    ctx.toggle().unwrap();
    ctx.toggle().unwrap();

    assert_eq!(ctx.mode(), ThemeMode::Dark);
    assert_eq!(stored(&storage).as_deref(), Some("dark"));
}

#[test]
fn corrupt_stored_value_falls_back_to_default() {
    for raw in ["neon", "blue", "DARK", "{}"] {
        let storage = MemoryStorage::with_value("themeMode", raw);
        let ctx = context(&storage);
        assert_eq!(ctx.mode(), ThemeMode::Dark, "stored {raw:?}");
        // The fallback is not written back
        assert_eq!(stored(&storage).as_deref(), Some(raw));
    }
}

#[test]
fn financial_negative_differs_between_modes() {
    let storage = MemoryStorage::new();
    let ctx = context(&storage);

    let dark = ctx.snapshot();
    ctx.set_mode(ThemeMode::Light).unwrap();
    let light = ctx.snapshot();

    let dark_negative = dark.tokens.financial.negative;
    let light_negative = light.tokens.financial.negative;
    assert_ne!(dark_negative, light_negative);
    assert!(dark_negative.contrast_ratio(dark.tokens.surface.page) >= 3.0);
    assert!(light_negative.contrast_ratio(light.tokens.surface.page) >= 3.0);

    let names = |snapshot: &ThemeSnapshot| snapshot.variables.keys().cloned().collect::<Vec<_>>();
    assert_eq!(names(&dark), names(&light));
    assert_ne!(
        dark.variables["--financial-negative"],
        light.variables["--financial-negative"]
    );
}

#[test]
fn notifications_are_never_torn() {
    let storage = MemoryStorage::with_value("themeMode", "light");
    let ctx = Arc::new(context(&storage));
    let delivered = Arc::new(Mutex::new(Vec::new()));

    let weak: Weak<ThemeContext> = Arc::downgrade(&ctx);
    let seen = Arc::clone(&delivered);
    // Listener panics are contained by the context, so record instead of asserting here
    ctx.subscribe(move |snapshot| {
        let ctx = weak.upgrade().unwrap();
        let consistent = snapshot.tokens == *get_tokens(snapshot.mode)
            && snapshot.variables == project(get_tokens(snapshot.mode)).unwrap()
            && snapshot.theme.mode() == snapshot.mode
            && ctx.mode() == snapshot.mode
            && ctx.tokens() == snapshot.tokens;
        seen.lock().unwrap().push((snapshot.mode, consistent));
    });

    ctx.set_mode(ThemeMode::Dark).unwrap();
    ctx.set_mode(ThemeMode::Light).unwrap();
    ctx.set_mode(ThemeMode::Dark).unwrap();

    assert_eq!(
        *delivered.lock().unwrap(),
        vec![
            (ThemeMode::Dark, true),
            (ThemeMode::Light, true),
            (ThemeMode::Dark, true)
        ]
    );
}

#[test]
fn concurrent_readers_see_whole_snapshots() {
    let ctx = context(&MemoryStorage::new());
    let done = AtomicBool::new(false);

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                while !done.load(Ordering::Acquire) {
                    let snapshot = ctx.snapshot();
                    assert_eq!(&snapshot.tokens, get_tokens(snapshot.mode));
                    assert_eq!(
                        snapshot.variables["--surface-page"],
                        get_tokens(snapshot.mode).surface.page.to_css()
                    );
                }
            });
        }
        for _ in 0..200 {
            ctx.toggle().unwrap();
        }
        done.store(true, Ordering::Release);
    });

    assert_eq!(ctx.mode(), ThemeMode::Dark);
}

#[test]
fn failed_write_keeps_session_mode() {
    init_tracing();
    let ctx = ThemeContext::new(QuotaExceeded, ThemeSettings::default()).unwrap();
    assert_eq!(ctx.mode(), ThemeMode::Light);

    let notified = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&notified);
    ctx.subscribe(move |_| {
        seen.fetch_add(1, Ordering::SeqCst);
    });

    let change = ctx.toggle().unwrap();
    assert!(change.changed());
    assert!(!change.persisted());
    assert!(matches!(change.persist_error, Some(StorageError::Unavailable(_))));
    assert_eq!(ctx.mode(), ThemeMode::Dark);
    assert_eq!(ctx.snapshot().tokens, *get_tokens(ThemeMode::Dark));
    assert_eq!(notified.load(Ordering::SeqCst), 1);
}

#[test]
fn panicking_listener_does_not_block_others() {
    let ctx = context(&MemoryStorage::new());
    let reached = Arc::new(AtomicUsize::new(0));

    ctx.subscribe(|_| panic!("listener bug"));
    let seen = Arc::clone(&reached);
    ctx.subscribe(move |_| {
        seen.fetch_add(1, Ordering::SeqCst);
    });

    ctx.toggle().unwrap();
    ctx.toggle().unwrap();
    assert_eq!(reached.load(Ordering::SeqCst), 2);
    assert_eq!(ctx.mode(), ThemeMode::Dark);
}

#[test]
fn listener_may_switch_mode_reentrantly() {
    let storage = MemoryStorage::new();
    let ctx = Arc::new(context(&storage));
    let weak = Arc::downgrade(&ctx);

    // Light mode is immediately reverted to dark
    ctx.subscribe(move |snapshot| {
        if snapshot.mode == ThemeMode::Light {
            weak.upgrade().unwrap().set_mode(ThemeMode::Dark).unwrap();
        }
    });

    ctx.set_mode(ThemeMode::Light).unwrap();
    assert_eq!(ctx.mode(), ThemeMode::Dark);
    assert_eq!(stored(&storage).as_deref(), Some("dark"));
}

#[test]
fn later_listeners_never_see_a_superseded_mode() {
    let storage = MemoryStorage::new();
    let ctx = Arc::new(context(&storage));
    let weak = Arc::downgrade(&ctx);

    ctx.subscribe(move |snapshot| {
        if snapshot.mode == ThemeMode::Light {
            weak.upgrade().unwrap().set_mode(ThemeMode::Dark).unwrap();
        }
    });
    let seen = Arc::new(Mutex::new(Vec::new()));
    let log = Arc::clone(&seen);
    ctx.subscribe(move |snapshot| log.lock().unwrap().push(snapshot.mode));

    ctx.set_mode(ThemeMode::Light).unwrap();

    assert_eq!(ctx.mode(), ThemeMode::Dark);
    assert_eq!(*seen.lock().unwrap(), vec![ThemeMode::Dark]);
}

#[test]
fn every_listener_ends_on_the_current_mode() {
    let ctx = Arc::new(context(&MemoryStorage::new()));
    let logs: Vec<Arc<Mutex<Vec<ThemeMode>>>> =
        (0..3).map(|_| Arc::new(Mutex::new(Vec::new()))).collect();

    // The middle listener flips light back to dark once.
    let flipped = Arc::new(AtomicBool::new(false));
    for (index, log) in logs.iter().enumerate() {
        let log = Arc::clone(log);
        let weak = Arc::downgrade(&ctx);
        let flipped = Arc::clone(&flipped);
        ctx.subscribe(move |snapshot| {
            log.lock().unwrap().push(snapshot.mode);
            if index == 1
                && snapshot.mode == ThemeMode::Light
                && !flipped.swap(true, Ordering::SeqCst)
            {
                weak.upgrade().unwrap().set_mode(ThemeMode::Dark).unwrap();
            }
        });
    }

    ctx.set_mode(ThemeMode::Light).unwrap();

    let current = ctx.mode();
    assert_eq!(current, ThemeMode::Dark);
    for log in &logs {
        assert_eq!(log.lock().unwrap().last(), Some(&current));
    }
    assert_eq!(*logs[0].lock().unwrap(), vec![ThemeMode::Light, ThemeMode::Dark]);
    assert_eq!(*logs[2].lock().unwrap(), vec![ThemeMode::Dark]);
}

#[test]
fn concurrent_toggles_are_not_lost() {
    let storage = MemoryStorage::new();
    let ctx = context(&storage);

    std::thread::scope(|scope| {
        for _ in 0..8 {
            scope.spawn(|| {
                for _ in 0..50 {
                    ctx.toggle().unwrap();
                }
            });
        }
    });

    // 400 toggles from dark land on dark.
    assert_eq!(ctx.mode(), ThemeMode::Dark);
    assert_eq!(stored(&storage).as_deref(), Some("dark"));
}

/// Storage whose writes fail until `recover` is called
#[derive(Clone, Default)]
struct Recovering {
    inner: MemoryStorage,
    recovered: Arc<AtomicBool>,
}

impl PreferenceStorage for Recovering {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if !self.recovered.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable("quota exceeded".into()));
        }
        self.inner.set(key, value)
    }
}

#[test]
fn repeating_the_mode_retries_a_failed_write() {
    init_tracing();
    let storage = Recovering::default();
    let ctx = ThemeContext::new(storage.clone(), ThemeSettings::default()).unwrap();
    let notified = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&notified);
    ctx.subscribe(move |_| {
        seen.fetch_add(1, Ordering::SeqCst);
    });

    assert!(!ctx.set_mode(ThemeMode::Light).unwrap().persisted());
    assert_eq!(storage.get("themeMode").unwrap(), None);

    storage.recovered.store(true, Ordering::SeqCst);
    let change = ctx.set_mode(ThemeMode::Light).unwrap();
    assert!(!change.changed());
    assert!(change.persisted());
    assert_eq!(storage.get("themeMode").unwrap().as_deref(), Some("light"));
    assert_eq!(notified.load(Ordering::SeqCst), 1);
}

#[test]
fn every_token_reaches_the_variables() {
    let ctx = context(&MemoryStorage::new());
    let snapshot = ctx.snapshot();
    for entry in snapshot.tokens.entries() {
        let name = aurum_theme::variable_name(entry.group, entry.key);
        assert_eq!(snapshot.variables[&name], entry.value.to_css(), "{name}");
    }
    assert!(snapshot
        .variables
        .keys()
        .any(|name| name.starts_with(&format!("--{}-", TokenGroup::Financial))));
}
