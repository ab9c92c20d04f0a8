#![allow(non_snake_case)]

mod app;
pub mod context;
mod theme;

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::Context as _;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use lumen_core::shortcuts::{Platform, Shortcut, ShortcutMode, ShortcutRegistry};
use lumen_core::{LoaderConfig, Rgb};

use crate::context::GallerySettings;

/// Global settings, set from command line
static SETTINGS: OnceLock<GallerySettings> = OnceLock::new();

/// Get the gallery settings (set from command line or default)
pub fn get_settings() -> GallerySettings {
    SETTINGS.get().cloned().unwrap_or_default()
}

/// Lumen - widget gallery
#[derive(Parser, Debug)]
#[command(name = "lumen-gallery")]
#[command(about = "Lumen - particle loader, shortcuts hint and sidebar showcase")]
struct Args {
    /// Loader configuration file (JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Shortcut registry file (JSON)
    #[arg(short, long)]
    shortcuts: Option<PathBuf>,

    /// Loader size in pixels
    #[arg(long)]
    size: Option<u32>,

    /// Loader palette as comma separated hex colors, e.g. "#ff0000,#00ff00"
    #[arg(long, value_delimiter = ',')]
    palette: Vec<String>,

    /// Loader frames per second
    #[arg(long)]
    fps: Option<u32>,

    /// Key notation: mac or other (defaults to the build target)
    #[arg(long)]
    platform: Option<Platform>,

    /// Log filter, overridden by RUST_LOG
    #[arg(long, default_value = "info")]
    log: String,
}

/// Default location of a gallery file under the user's config directory.
fn default_file(name: &str) -> Option<PathBuf> {
    let path = dirs::config_dir()?.join("lumen").join(name);
    path.exists().then_some(path)
}

/// Loader config from `path` (or defaults) with the CLI overrides applied.
fn load_loader_config(args: &Args, path: Option<&Path>) -> anyhow::Result<LoaderConfig> {
    let mut config = match path {
        Some(path) => LoaderConfig::load(path)
            .with_context(|| format!("loading loader config from {}", path.display()))?,
        None => LoaderConfig::default(),
    };

    if let Some(size) = args.size {
        config.size = size;
    }
    if let Some(fps) = args.fps {
        config.fps = fps;
    }
    if !args.palette.is_empty() {
        config.palette = args
            .palette
            .iter()
            .map(|c| c.parse::<Rgb>())
            .collect::<Result<Vec<_>, _>>()?;
    }

    config.validate().context("invalid loader config")?;
    Ok(config)
}

fn load_registry(path: Option<&Path>) -> anyhow::Result<ShortcutRegistry> {
    match path {
        Some(path) => ShortcutRegistry::load(path)
            .with_context(|| format!("loading shortcuts from {}", path.display())),
        None => Ok(demo_registry()),
    }
}

/// Shortcuts shown when no registry file is given.
fn demo_registry() -> ShortcutRegistry {
    ShortcutRegistry::new()
        .mode(
            ShortcutMode::new("gallery", "Gallery")
                .shortcut(Shortcut::new("?", "showShortcuts", "Show this help"))
                .shortcut(Shortcut::new("esc", "closeDialog", "Close the dialog"))
                .shortcut(Shortcut::new("enter", "confirmDialog", "Confirm the dialog")),
        )
        .mode(
            ShortcutMode::new("some-kind-shortcuts", "Some Action Related Shortcuts")
                .shortcut(Shortcut::new("meta+enter", "someAction", "Do some action shortcut"))
                .shortcut(Shortcut::new(
                    "ctrl+shift+down",
                    "someAction",
                    "Another action shortcut with a long text description",
                ))
                .shortcut(Shortcut::new("ctrl+alt+e", "someAction", "Another action shortcut")),
        )
        .mode(
            ShortcutMode::new("some-other-shortcuts", "Shortcuts for other actions")
                .shortcut(Shortcut::new("meta+=", "someAction", "Do some action shortcut"))
                .shortcut(Shortcut::new("alt+N", "someAction", "Another action shortcut"))
                .shortcut(Shortcut::new("shift+left+down", "someAction", "Another action shortcut")),
        )
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    lumen_core::logging::init(&args.log)?;

    let config_path = args.config.clone().or_else(|| default_file("loader.json"));
    let loader = load_loader_config(&args, config_path.as_deref())?;
    let shortcuts_path = args.shortcuts.clone().or_else(|| default_file("shortcuts.json"));
    let registry = load_registry(shortcuts_path.as_deref())?;
    let platform = args.platform.unwrap_or_else(Platform::current);

    tracing::info!(
        size = loader.size,
        colors = loader.palette.len(),
        modes = registry.registered_modes().len(),
        %platform,
        "Starting Lumen gallery"
    );

    let window_size = f64::from(loader.size.max(96)) * 2.0 + 560.0;
    let _ = SETTINGS.set(GallerySettings {
        loader,
        registry,
        platform,
    });

    // Configure desktop window
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Lumen")
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_size, 640.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}
