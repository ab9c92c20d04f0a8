//! Platform-specific key symbols.

use std::fmt;
use std::str::FromStr;

/// Keyboard convention used when presenting shortcuts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Platform {
    /// Symbol glyphs joined by spaces
    MacOs,
    /// Key names joined by `" + "`
    #[default]
    Other,
}

impl Platform {
    /// Platform the binary was built for.
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Platform::MacOs
        } else {
            Platform::Other
        }
    }

    /// Separator placed between keys of a combination.
    pub fn separator(&self) -> &'static str {
        match self {
            Platform::MacOs => " ",
            Platform::Other => " + ",
        }
    }

    /// Display symbol for a key name, if it has one.
    pub fn symbol(&self, key: &str) -> Option<&'static str> {
        let key = key.to_ascii_lowercase();
        let symbol = match self {
            Platform::MacOs => match key.as_str() {
                "enter" => "⏎",
                "shift" => "⇧",
                "meta" => "⌘",
                "alt" => "⌥",
                "ctrl" => "⌃",
                "backspace" => "⌫",
                "esc" => "ESC",
                "left" => "←",
                "up" => "↑",
                "right" => "→",
                "down" => "↓",
                _ => return None,
            },
            Platform::Other => match key.as_str() {
                "enter" => "ENTER",
                "shift" => "Shift",
                "meta" => "Ctrl",
                "alt" => "Alt",
                "ctrl" => "Ctrl",
                "backspace" => "BACKSPACE",
                "esc" => "ESC",
                "left" => "LEFT",
                "up" => "UP",
                "right" => "RIGHT",
                "down" => "DOWN",
                _ => return None,
            },
        };
        Some(symbol)
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mac" | "macos" => Ok(Platform::MacOs),
            "other" | "windows" | "linux" => Ok(Platform::Other),
            _ => Err(format!("unknown platform: {}", s)),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::MacOs => f.write_str("macos"),
            Platform::Other => f.write_str("other"),
        }
    }
}

/// Render a `+`-joined key combination for display.
///
/// Unknown keys are kept as written.
///
/// ```
/// use lumen_core::shortcuts::{present_keys, Platform};
///
/// assert_eq!(present_keys("meta+enter", Platform::MacOs), "⌘ ⏎");
/// assert_eq!(present_keys("ctrl+alt+e", Platform::Other), "Ctrl + Alt + e");
/// ```
pub fn present_keys(key: &str, platform: Platform) -> String {
    key.split('+')
        .map(|part| platform.symbol(part).unwrap_or(part))
        .collect::<Vec<_>>()
        .join(platform.separator())
}
