use aurum_theme::{
    root_attribute, root_mode, set_root_marker_callback, MemoryStorage, ThemeContext, ThemeError,
    ThemeMode, ThemeSettings,
};
use std::sync::Mutex;

static MARKED: Mutex<Vec<(&'static str, &'static str)>> = Mutex::new(Vec::new());

fn record_marker(attribute: &'static str, value: &'static str) {
    MARKED.lock().unwrap().push((attribute, value));
}

// One test per binary: the global context can only be initialized once.
#[test]
fn global_context_lifecycle() {
    assert!(matches!(ThemeContext::try_get(), Err(ThemeError::NotInitialized)));
    assert!(!ThemeContext::is_initialized());
    let Err(panic) = std::panic::catch_unwind(ThemeContext::get) else {
        panic!("get() before init returned a context");
    };
    let message = panic
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| panic.downcast_ref::<String>().cloned())
        .unwrap();
    assert!(message.contains("ThemeContext not initialized"), "{message}");

    set_root_marker_callback(record_marker);
    let ctx = ThemeContext::init(MemoryStorage::new(), ThemeSettings::default()).unwrap();
    assert!(std::ptr::eq(ctx, ThemeContext::get()));
    assert_eq!(root_mode(), Some(ThemeMode::Dark));
    assert_eq!(root_attribute(), Some(("data-theme", "dark")));

    ThemeContext::get().toggle().unwrap();
    assert_eq!(root_attribute(), Some(("data-theme", "light")));
    assert_eq!(
        *MARKED.lock().unwrap(),
        vec![("data-theme", "dark"), ("data-theme", "light")]
    );

    // Re-setting the mode leaves the marker alone
    ThemeContext::get().set_mode(ThemeMode::Light).unwrap();
    assert_eq!(MARKED.lock().unwrap().len(), 2);

    let again = ThemeContext::init(MemoryStorage::new(), ThemeSettings::default());
    assert!(matches!(again, Err(ThemeError::AlreadyInitialized)));
    assert_eq!(ThemeContext::get().mode(), ThemeMode::Light);
    assert_eq!(root_mode(), Some(ThemeMode::Light));
    assert_eq!(MARKED.lock().unwrap().len(), 2);
}
