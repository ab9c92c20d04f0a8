use dioxus::prelude::*;
use lumen_core::LoaderConfig;
use lumen_ui::{
    use_sidebar, Button, ButtonVariant, ParticleLoader, ShortcutsHint, Sidebar, SidebarToggleButton,
};

use crate::context::{get_settings, use_settings};
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles and settings context, and wires the shortcuts
/// hint to the sidebar so the sidebar stays open while the dialog is shown.
#[component]
pub fn App() -> Element {
    use_context_provider(get_settings);
    let settings = use_settings();

    let mut show_hint = use_signal(|| false);
    let mut sidebar = use_sidebar(false);

    use_effect(move || {
        let active = show_hint();
        sidebar.write().set_dialog_active(active);
    });

    let on_keydown = move |evt: KeyboardEvent| {
        if let Key::Character(c) = evt.key() {
            if c == "?" && !show_hint() {
                show_hint.set(true);
            }
        }
    };

    rsx! {
        style { {GLOBAL_STYLES} }
        div {
            class: "gallery",
            tabindex: "0",
            onkeydown: on_keydown,

            header { class: "gallery__toolbar",
                SidebarToggleButton { state: sidebar, "☰ Widgets" }
                h1 { class: "gallery__title", "Lumen" }
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| show_hint.set(true),
                    "Shortcuts ?"
                }
            }

            Sidebar { state: sidebar, top_offset: 56.0,
                nav { class: "gallery__nav",
                    p { class: "gallery__nav-title", "Widgets" }
                    ul {
                        li { "Loader" }
                        li { "Shortcuts hint" }
                        li { "Sidebar" }
                    }
                }
            }

            main { class: "gallery__content",
                LoaderShowcase { config: settings.loader.clone() }
            }

            ShortcutsHint {
                show: show_hint(),
                title: "Shortcuts".to_string(),
                registry: settings.registry.clone(),
                platform: settings.platform,
                on_close: move |_| show_hint.set(false),
            }
        }
    }
}

/// The loader on a light and on a dark background.
#[component]
fn LoaderShowcase(config: LoaderConfig) -> Element {
    rsx! {
        section { class: "gallery__section",
            h2 { class: "gallery__section-title", "Loader" }
            div { class: "gallery__row",
                div { class: "loader-container",
                    ParticleLoader { config: config.clone() }
                }
                div { class: "loader-container loader-container_black",
                    ParticleLoader { config: config }
                }
            }
        }
    }
}
