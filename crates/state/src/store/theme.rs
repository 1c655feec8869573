//! The display theme store.
//!
//! Theme state is the one place the core touches the outside world: a
//! key-value preference store (the persisted `"meena-theme"` entry) and a
//! system-level dark-mode query. Both sit behind traits so the transitions
//! stay pure and testable. Every state-changing operation commits the
//! in-memory state first, then performs exactly one persistence write.

use serde::{Deserialize, Serialize};

use super::Reduce;

/// Preference key under which the chosen theme is persisted.
pub const THEME_STORAGE_KEY: &str = "meena-theme";

/// Key-value persistence collaborator (e.g., browser local storage).
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// System-level appearance preference collaborator.
pub trait SystemTheme {
    /// `Some(true)` if the system prefers dark, `Some(false)` if it prefers
    /// light, `None` if no signal is available.
    fn prefers_dark(&self) -> Option<bool>;
}

/// In-memory [`PreferenceStore`], for composition roots without durable
/// storage and for tests.
#[derive(Debug, Default)]
pub struct MemoryPreferences {
    values: std::collections::HashMap<String, String>,
}

impl MemoryPreferences {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_owned(), value.to_owned());
    }
}

impl<F: Fn() -> Option<bool>> SystemTheme for F {
    fn prefers_dark(&self) -> Option<bool> {
        self()
    }
}

/// The two display themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(format!("invalid theme mode: {s}")),
        }
    }
}

/// Theme state. `initialized` flips false -> true exactly once per process
/// lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThemeState {
    pub mode: ThemeMode,
    pub initialized: bool,
}

/// Theme intents. `Initialize` carries the collaborator readings so the
/// reducer itself stays pure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeAction {
    /// First-call resolution: persisted value, else system preference, else
    /// dark. No-op once initialized.
    Initialize {
        stored: Option<ThemeMode>,
        prefers_dark: Option<bool>,
    },
    Set(ThemeMode),
    Toggle,
}

impl Reduce for ThemeState {
    type Action = ThemeAction;

    fn reduce(mut self, action: ThemeAction) -> Self {
        match action {
            ThemeAction::Initialize {
                stored,
                prefers_dark,
            } => {
                if self.initialized {
                    return self;
                }
                self.mode = stored.unwrap_or_else(|| match prefers_dark {
                    Some(true) | None => ThemeMode::Dark,
                    Some(false) => ThemeMode::Light,
                });
                self.initialized = true;
            }
            ThemeAction::Set(mode) => self.mode = mode,
            ThemeAction::Toggle => self.mode = self.mode.toggled(),
        }
        self
    }
}

/// Owning handle for the theme state plus its collaborators.
pub struct ThemeStore {
    state: ThemeState,
    preferences: Box<dyn PreferenceStore>,
    system: Box<dyn SystemTheme>,
}

impl std::fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeStore")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl ThemeStore {
    #[must_use]
    pub fn new(preferences: Box<dyn PreferenceStore>, system: Box<dyn SystemTheme>) -> Self {
        Self {
            state: ThemeState::default(),
            preferences,
            system,
        }
    }

    /// Resolve the initial theme: persisted value, else system preference,
    /// else dark. Idempotent - the second and later calls perform no
    /// collaborator reads or writes at all.
    pub fn initialize(&mut self) {
        if self.state.initialized {
            return;
        }

        let stored = self
            .preferences
            .get(THEME_STORAGE_KEY)
            .and_then(|value| value.parse().ok());
        let prefers_dark = self.system.prefers_dark();
        tracing::debug!(?stored, ?prefers_dark, "Initializing theme");

        self.state = self.state.reduce(ThemeAction::Initialize {
            stored,
            prefers_dark,
        });
        self.persist();
    }

    /// Set the mode and persist it.
    pub fn set(&mut self, mode: ThemeMode) {
        self.state = self.state.reduce(ThemeAction::Set(mode));
        self.persist();
    }

    /// Flip light <-> dark and persist the result.
    pub fn toggle(&mut self) {
        self.state = self.state.reduce(ThemeAction::Toggle);
        tracing::debug!(mode = %self.state.mode, "Toggled theme");
        self.persist();
    }

    // State is committed before this runs; persistence failures cannot leave
    // the in-memory mode stale.
    fn persist(&mut self) {
        self.preferences
            .set(THEME_STORAGE_KEY, self.state.mode.as_str());
    }

    #[must_use]
    pub const fn mode(&self) -> ThemeMode {
        self.state.mode
    }

    #[must_use]
    pub const fn is_initialized(&self) -> bool {
        self.state.initialized
    }

    #[must_use]
    pub const fn state(&self) -> ThemeState {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Preference store that counts reads and writes.
    #[derive(Debug, Default)]
    struct CountingPreferences {
        inner: MemoryPreferences,
        counts: Rc<RefCell<(u32, u32)>>,
    }

    impl PreferenceStore for CountingPreferences {
        fn get(&self, key: &str) -> Option<String> {
            self.counts.borrow_mut().0 += 1;
            self.inner.get(key)
        }

        fn set(&mut self, key: &str, value: &str) {
            self.counts.borrow_mut().1 += 1;
            self.inner.set(key, value);
        }
    }

    fn store_with(
        stored: Option<&str>,
        prefers_dark: Option<bool>,
    ) -> (ThemeStore, Rc<RefCell<(u32, u32)>>) {
        let counts = Rc::new(RefCell::new((0, 0)));
        let mut prefs = CountingPreferences {
            inner: MemoryPreferences::new(),
            counts: Rc::clone(&counts),
        };
        if let Some(value) = stored {
            prefs.inner.set(THEME_STORAGE_KEY, value);
        }
        let store = ThemeStore::new(Box::new(prefs), Box::new(move || prefers_dark));
        (store, counts)
    }

    #[test]
    fn test_initialize_prefers_persisted_value() {
        let (mut store, _) = store_with(Some("light"), Some(true));
        store.initialize();
        assert_eq!(store.mode(), ThemeMode::Light);
        assert!(store.is_initialized());
    }

    #[test]
    fn test_initialize_falls_back_to_system_preference() {
        let (mut store, _) = store_with(None, Some(false));
        store.initialize();
        assert_eq!(store.mode(), ThemeMode::Light);

        let (mut store, _) = store_with(None, Some(true));
        store.initialize();
        assert_eq!(store.mode(), ThemeMode::Dark);
    }

    #[test]
    fn test_initialize_defaults_to_dark_without_any_signal() {
        let (mut store, _) = store_with(None, None);
        store.initialize();
        assert_eq!(store.mode(), ThemeMode::Dark);
    }

    #[test]
    fn test_second_initialize_is_a_complete_noop() {
        let (mut store, counts) = store_with(Some("light"), None);
        store.initialize();
        let after_first = *counts.borrow();

        store.initialize();
        assert_eq!(*counts.borrow(), after_first, "no further reads or writes");
        assert_eq!(store.mode(), ThemeMode::Light);
    }

    #[test]
    fn test_initialize_writes_exactly_once() {
        let (mut store, counts) = store_with(None, None);
        store.initialize();
        assert_eq!(counts.borrow().1, 1);
    }

    #[test]
    fn test_set_persists_once() {
        let (mut store, counts) = store_with(Some("dark"), None);
        store.initialize();
        let writes_after_init = counts.borrow().1;

        store.set(ThemeMode::Light);
        assert_eq!(store.mode(), ThemeMode::Light);
        assert_eq!(counts.borrow().1, writes_after_init + 1);
    }

    #[test]
    fn test_toggle_flips_and_persists() {
        let (mut store, counts) = store_with(Some("dark"), None);
        store.initialize();
        let writes_after_init = counts.borrow().1;

        store.toggle();
        assert_eq!(store.mode(), ThemeMode::Light);
        store.toggle();
        assert_eq!(store.mode(), ThemeMode::Dark);
        assert_eq!(counts.borrow().1, writes_after_init + 2);
    }

    #[test]
    fn test_corrupt_persisted_value_falls_through() {
        let (mut store, _) = store_with(Some("sepia"), Some(false));
        store.initialize();
        assert_eq!(store.mode(), ThemeMode::Light);
    }
}
