//! Lumen UI Components
//!
//! Dioxus components for the Lumen widget library:
//!
//! - **ParticleLoader**: animated particle trail loading indicator
//! - **ShortcutsHint**: keyboard shortcuts help dialog with search
//! - **Sidebar** / **SidebarToggleButton**: side panel that stays open while
//!   a dialog is active
//!
//! Styling is class based (`lumen-*`, `hint-dialog*`); the host application
//! ships the stylesheet.

pub mod components;

pub use components::*;
