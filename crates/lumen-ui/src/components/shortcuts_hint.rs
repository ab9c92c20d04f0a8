//! Shortcuts Hint Dialog Component
//!
//! Help popup listing every registered shortcut mode, with keys shown in
//! the platform's notation and a search box to narrow the list.

use dioxus::prelude::*;
use lumen_core::shortcuts::{present_keys, HintPopup, Platform, ShortcutRegistry};

use super::button::{Button, ButtonVariant, CloseButton};

/// One mode as displayed: id, title and `(keys, description)` rows.
#[derive(Clone, Debug, PartialEq)]
pub struct ModeSection {
    pub id: String,
    pub title: String,
    pub rows: Vec<(String, String)>,
}

/// Sections for `popup` narrowed by `query`, keys in `platform` notation.
pub fn mode_sections(popup: &HintPopup, query: &str, platform: Platform) -> Vec<ModeSection> {
    popup
        .filtered_modes(query, platform)
        .into_iter()
        .map(|mode| ModeSection {
            rows: mode
                .shortcuts
                .iter()
                .map(|s| (present_keys(&s.key, platform), s.title.clone()))
                .collect(),
            id: mode.id,
            title: mode.title,
        })
        .collect()
}

/// Shortcuts Hint Dialog
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     ShortcutsHint {
///         show: show_hint(),
///         title: "Shortcuts".to_string(),
///         registry: registry.clone(),
///         on_close: move |_| show_hint.set(false),
///     }
/// }
/// ```
#[component]
pub fn ShortcutsHint(
    /// Whether to show the dialog
    show: bool,
    /// Dialog title
    #[props(default = "Keyboard Shortcuts".to_string())]
    title: String,
    /// Modes to list
    registry: ShortcutRegistry,
    /// Key notation; defaults to the platform the app was built for
    #[props(default)]
    platform: Option<Platform>,
    /// Callback when the dialog is dismissed
    on_close: EventHandler<()>,
) -> Element {
    let mut query = use_signal(String::new);

    let mut close = move || {
        query.set(String::new());
        on_close.call(());
    };

    if !show {
        return rsx! {};
    }

    let platform = platform.unwrap_or_else(Platform::current);
    let popup = HintPopup::new(title, &registry);
    let sections = mode_sections(&popup, &query.read(), platform);
    let dialog_class = if popup.wide { "hint-dialog hint-dialog_wide" } else { "hint-dialog" };

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| close(),

            div {
                class: "{dialog_class}",
                role: "dialog",
                "aria-modal": "true",
                tabindex: "-1",
                onclick: move |e| e.stop_propagation(),
                onkeydown: move |evt: KeyboardEvent| {
                    match evt.key() {
                        Key::Escape | Key::Enter => close(),
                        _ => {}
                    }
                },

                header { class: "hint-dialog__header",
                    h2 { class: "hint-dialog__title", "{popup.title}" }
                    CloseButton { onclick: move |_| close() }
                }

                input {
                    class: "hint-dialog__search",
                    r#type: "search",
                    placeholder: "Search shortcuts",
                    value: "{query()}",
                    oninput: move |e| query.set(e.value()),
                    autofocus: true,
                }

                div { class: "hint-dialog__content",
                    if sections.is_empty() {
                        p { class: "hint-dialog__empty", "No shortcuts match" }
                    }
                    for mode in sections {
                        section {
                            key: "{mode.id}",
                            class: "hint-dialog__mode",
                            h3 { class: "hint-dialog__mode-title", "{mode.title}" }
                            for (keys, description) in mode.rows {
                                div {
                                    class: "hint-dialog__shortcut",
                                    kbd { class: "hint-dialog__keys", "{keys}" }
                                    span { class: "hint-dialog__shortcut-title", "{description}" }
                                }
                            }
                        }
                    }
                }

                div { class: "modal-actions",
                    for button in popup.buttons {
                        Button {
                            variant: if button.default { ButtonVariant::Primary } else { ButtonVariant::Secondary },
                            onclick: move |_| close(),
                            "{button.label}"
                        }
                    }
                }
            }
        }
    }
}
