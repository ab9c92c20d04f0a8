//! Settings context for the Lumen gallery.
//!
//! Provides the settings parsed from the command line to all components via
//! use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(get_settings);
//!
//! // In child components
//! let settings = use_settings();
//! ```

use dioxus::prelude::*;
use lumen_core::shortcuts::{Platform, ShortcutRegistry};
use lumen_core::LoaderConfig;

/// Everything the gallery needs to render its widgets.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GallerySettings {
    /// Configuration shared by the showcased loaders
    pub loader: LoaderConfig,
    /// Modes listed by the shortcuts hint
    pub registry: ShortcutRegistry,
    /// Key notation used by the shortcuts hint
    pub platform: Platform,
}

/// Get the settings set from command line args.
pub fn get_settings() -> GallerySettings {
    crate::get_settings()
}

/// Hook to access the gallery settings from context.
pub fn use_settings() -> GallerySettings {
    use_context::<GallerySettings>()
}
