//! Lumen Core Library
//!
//! Framework-independent logic behind the Lumen widgets.
//!
//! ## Overview
//!
//! - [`loader`]: the particle trail loader animation, its render surface
//!   abstraction and the task that drives it frame by frame
//! - [`shortcuts`]: shortcut modes, platform key symbols, search and the
//!   help dialog model
//! - [`sidebar`]: sidebar visibility state
//!
//! ## Quick Start
//!
//! ```ignore
//! use lumen_core::{AnimationHandle, Loader, LoaderConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let loader = Loader::new(LoaderConfig::default())?;
//!     let handle = AnimationHandle::spawn(loader);
//!
//!     let mut frames = handle.frames();
//!     frames.changed().await?;
//!     println!("{} circles", frames.borrow().circles().count());
//!
//!     handle.stop().await?;
//!     Ok(())
//! }
//! ```

pub mod color;
pub mod config;
pub mod error;
pub mod loader;
pub mod logging;
pub mod shortcuts;
pub mod sidebar;
pub mod surface;

// Re-exports
pub use color::{Rgb, Rgba, DEFAULT_PALETTE};
pub use config::LoaderConfig;
pub use error::{LumenError, LumenResult};
pub use loader::{AnimationHandle, Emitter, Loader, Particle};
pub use shortcuts::{HintPopup, Platform, Shortcut, ShortcutMode, ShortcutRegistry};
pub use sidebar::SidebarState;
pub use surface::{DisplayList, DrawCommand, Frame, RenderSurface};
