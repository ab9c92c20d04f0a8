//! Reusable Lumen components
//!
//! Components only render and forward events; animation, shortcut
//! presentation and sidebar state come from `lumen-core`.

mod button;
mod loader;
mod shortcuts_hint;
mod sidebar;

pub use button::*;
pub use loader::*;
pub use shortcuts_hint::*;
pub use sidebar::*;
