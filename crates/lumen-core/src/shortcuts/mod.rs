//! Keyboard shortcut help.
//!
//! Shortcuts are grouped into titled modes and registered on a
//! [`ShortcutRegistry`]. The [`HintPopup`] dialog model lists the registered
//! modes with platform-specific key symbols and narrows them by a search
//! query.
//!
//! ## Registry file
//!
//! ```json
//! {
//!   "modes": [
//!     {
//!       "id": "editing",
//!       "title": "Editing",
//!       "shortcuts": [
//!         { "key": "meta+enter", "action": "submit", "title": "Submit" }
//!       ]
//!     }
//!   ]
//! }
//! ```

mod hint;
mod keys;
mod search;

pub use hint::{DialogButton, HintPopup};
pub use keys::{present_keys, Platform};
pub use search::{matches, search};

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::LumenResult;

/// A single key binding shown in the help dialog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shortcut {
    /// `+`-joined key names, e.g. `ctrl+shift+down`
    pub key: String,
    /// Action identifier the key is bound to
    pub action: String,
    /// Human readable description
    pub title: String,
}

impl Shortcut {
    pub fn new(key: impl Into<String>, action: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
            title: title.into(),
        }
    }
}

/// A titled group of shortcuts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortcutMode {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub shortcuts: Vec<Shortcut>,
}

impl ShortcutMode {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            shortcuts: Vec::new(),
        }
    }

    /// Append a shortcut (builder style).
    pub fn shortcut(mut self, shortcut: Shortcut) -> Self {
        self.shortcuts.push(shortcut);
        self
    }
}

/// Registered shortcut modes, in registration order.
///
/// Deserialized modes go through [`ShortcutRegistry::register`], so a
/// repeated id in a file replaces the earlier entry.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RegistryFile")]
pub struct ShortcutRegistry {
    modes: Vec<ShortcutMode>,
}

/// On-disk form of a registry, before ids are deduplicated.
#[derive(Deserialize)]
struct RegistryFile {
    #[serde(default)]
    modes: Vec<ShortcutMode>,
}

impl From<RegistryFile> for ShortcutRegistry {
    fn from(file: RegistryFile) -> Self {
        file.modes.into_iter().fold(Self::new(), Self::mode)
    }
}

impl ShortcutRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a registry from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> LumenResult<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Register a mode (builder style).
    pub fn mode(mut self, mode: ShortcutMode) -> Self {
        self.register(mode);
        self
    }

    /// Register a mode. A mode whose id is already registered is replaced
    /// in place.
    pub fn register(&mut self, mode: ShortcutMode) {
        match self.modes.iter_mut().find(|m| m.id == mode.id) {
            Some(existing) => {
                tracing::debug!(id = %mode.id, "replacing shortcut mode");
                *existing = mode;
            }
            None => self.modes.push(mode),
        }
    }

    pub fn registered_modes(&self) -> &[ShortcutMode] {
        &self.modes
    }

    pub fn is_empty(&self) -> bool {
        self.modes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn registration_order_is_kept() {
        let registry = ShortcutRegistry::new()
            .mode(ShortcutMode::new("b", "B"))
            .mode(ShortcutMode::new("a", "A"));

        let ids: Vec<_> = registry.registered_modes().iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn reregistering_replaces_in_place() {
        let registry = ShortcutRegistry::new()
            .mode(ShortcutMode::new("a", "First"))
            .mode(ShortcutMode::new("b", "B"))
            .mode(ShortcutMode::new("a", "Second").shortcut(Shortcut::new("esc", "close", "Close")));

        let modes = registry.registered_modes();
        assert_eq!(modes.len(), 2);
        assert_eq!(modes[0].title, "Second");
        assert_eq!(modes[0].shortcuts.len(), 1);
    }

    #[test]
    fn load_from_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"modes": [{{"id": "nav", "title": "Navigation", "shortcuts": [{{"key": "up", "action": "prev", "title": "Previous"}}]}}]}}"#
        )
        .unwrap();

        let registry = ShortcutRegistry::load(file.path()).unwrap();
        let modes = registry.registered_modes();
        assert_eq!(modes.len(), 1);
        assert_eq!(modes[0].shortcuts[0], Shortcut::new("up", "prev", "Previous"));
    }

    #[test]
    fn load_replaces_repeated_ids() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"modes": [{{"id": "a", "title": "First"}}, {{"id": "b", "title": "B"}}, {{"id": "a", "title": "Second"}}]}}"#
        )
        .unwrap();

        let registry = ShortcutRegistry::load(file.path()).unwrap();
        let modes: Vec<_> = registry
            .registered_modes()
            .iter()
            .map(|m| (m.id.as_str(), m.title.as_str()))
            .collect();
        assert_eq!(modes, vec![("a", "Second"), ("b", "B")]);
    }

    #[test]
    fn empty_file_object_is_empty_registry() {
        let registry: ShortcutRegistry = serde_json::from_str("{}").unwrap();
        assert!(registry.is_empty());
    }
}
