//! Light/dark theme selection, persisted through a swappable key-value store.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing::{debug, warn};

use crate::error::StoreError;

/// Store key holding the theme mode.
pub const THEME_KEY: &str = "theme";

/// Persistent string key-value store.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Key-value store kept as a JSON object in a single file.
///
/// A missing file reads as an empty store; parent directories are created on
/// first write.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    // Serializes read-modify-write cycles within this process.
    lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    fn load(&self) -> Result<BTreeMap<String, String>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(text) if text.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(text) => Ok(serde_json::from_str(&text)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        Ok(self.load()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        let mut map = self.load()?;
        map.insert(key.to_string(), value.to_string());
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(&map)?)?;
        debug!(path = %self.path.display(), key, "store updated");
        Ok(())
    }
}

/// In-memory store for tests and `--no-persist` style setups.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let values = self.values.lock().unwrap_or_else(|e| e.into_inner());
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut values = self.values.lock().unwrap_or_else(|e| e.into_inner());
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Color scheme mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

/// Current theme mode plus the store it is persisted to.
pub struct Theme {
    mode: ThemeMode,
    store: Box<dyn KeyValueStore>,
}

impl Theme {
    /// Reads the persisted mode. Anything but `"dark"`, including a
    /// missing or unreadable store, means light.
    pub fn load(store: Box<dyn KeyValueStore>) -> Self {
        let mode = match store.get(THEME_KEY) {
            Ok(Some(value)) if value == ThemeMode::Dark.as_str() => ThemeMode::Dark,
            Ok(_) => ThemeMode::Light,
            Err(e) => {
                warn!(error = %e, "failed to read theme, using light");
                ThemeMode::Light
            }
        };
        Self { mode, store }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn is_dark_mode(&self) -> bool {
        self.mode.is_dark()
    }

    /// Flips the mode and persists it. A persistence failure is logged; the
    /// new mode still applies for this session.
    pub fn toggle(&mut self) -> ThemeMode {
        self.mode = self.mode.toggled();
        if let Err(e) = self.store.set(THEME_KEY, self.mode.as_str()) {
            warn!(error = %e, "failed to persist theme");
        }
        self.mode
    }
}

impl std::fmt::Debug for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Theme").field("mode", &self.mode).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    /// Shares one MemoryStore between a Theme and the test.
    struct Shared(Arc<MemoryStore>);

    impl KeyValueStore for Shared {
        fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
            self.0.get(key)
        }
        fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
            self.0.set(key, value)
        }
    }

    struct Broken;

    impl KeyValueStore for Broken {
        fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Err(std::io::Error::other("unavailable").into())
        }
        fn set(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(std::io::Error::other("unavailable").into())
        }
    }

    #[test]
    fn defaults_to_light() {
        let theme = Theme::load(Box::new(MemoryStore::new()));
        assert_eq!(theme.mode(), ThemeMode::Light);
    }

    #[test]
    fn toggle_persists_under_theme_key() {
        let store = Arc::new(MemoryStore::new());
        let mut theme = Theme::load(Box::new(Shared(store.clone())));

        assert_eq!(theme.toggle(), ThemeMode::Dark);
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("dark"));
        assert_eq!(theme.toggle(), ThemeMode::Light);
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("light"));

        store.set(THEME_KEY, "dark").unwrap();
        assert!(Theme::load(Box::new(Shared(store))).is_dark_mode());
    }

    #[test]
    fn broken_store_does_not_block_toggle() {
        let mut theme = Theme::load(Box::new(Broken));
        assert_eq!(theme.mode(), ThemeMode::Light);
        assert_eq!(theme.toggle(), ThemeMode::Dark);
    }

    #[test]
    fn json_file_store_round_trips_and_keeps_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("state.json");
        let store = JsonFileStore::new(&path);

        assert_eq!(store.get(THEME_KEY).unwrap(), None);
        store.set("other", "value").unwrap();
        store.set(THEME_KEY, "dark").unwrap();

        let reopened = JsonFileStore::new(&path);
        assert_eq!(reopened.get(THEME_KEY).unwrap().as_deref(), Some("dark"));
        assert_eq!(reopened.get("other").unwrap().as_deref(), Some("value"));
    }

    #[test]
    fn json_file_store_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        fs::write(&path, "not json").unwrap();
        let store = JsonFileStore::new(&path);
        assert!(matches!(store.get(THEME_KEY), Err(StoreError::Parse(_))));

        // Unreadable store falls back to light.
        assert_eq!(
            Theme::load(Box::new(JsonFileStore::new(&path))).mode(),
            ThemeMode::Light
        );
    }
}
