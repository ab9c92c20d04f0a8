use super::keys::Platform;
use super::search::matches;
use super::{ShortcutMode, ShortcutRegistry};

/// A dialog button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DialogButton {
    pub label: String,
    /// Triggered by Enter
    pub default: bool,
}

/// Model of the shortcuts help dialog.
#[derive(Clone, Debug, PartialEq)]
pub struct HintPopup {
    pub title: String,
    pub modes: Vec<ShortcutMode>,
    pub wide: bool,
    pub buttons: Vec<DialogButton>,
}

impl HintPopup {
    /// Snapshot the registry's modes into a dialog with a single `OK` button.
    pub fn new(title: impl Into<String>, registry: &ShortcutRegistry) -> Self {
        Self {
            title: title.into(),
            modes: registry.registered_modes().to_vec(),
            wide: true,
            buttons: vec![DialogButton {
                label: "OK".to_string(),
                default: true,
            }],
        }
    }

    pub fn default_button(&self) -> Option<&DialogButton> {
        self.buttons.iter().find(|b| b.default)
    }

    /// Modes narrowed to shortcuts matching `query`.
    ///
    /// An empty query returns every mode unchanged; otherwise modes left
    /// without matches are dropped.
    pub fn filtered_modes(&self, query: &str, platform: Platform) -> Vec<ShortcutMode> {
        if query.is_empty() {
            return self.modes.clone();
        }

        self.modes
            .iter()
            .filter_map(|mode| {
                let shortcuts: Vec<_> = mode
                    .shortcuts
                    .iter()
                    .filter(|s| matches(s, query, platform))
                    .cloned()
                    .collect();

                (!shortcuts.is_empty()).then(|| ShortcutMode {
                    id: mode.id.clone(),
                    title: mode.title.clone(),
                    shortcuts,
                })
            })
            .collect()
    }
}
