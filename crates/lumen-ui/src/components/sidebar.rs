//! Sidebar Components
//!
//! A side panel and its toggle button sharing one [`SidebarState`] signal.
//! While a dialog is active the sidebar is forced open:
//!
//! ```rust,ignore
//! let mut sidebar = use_sidebar(false);
//! use_effect(move || sidebar.write().set_dialog_active(show_hint()));
//! ```

use dioxus::prelude::*;
use lumen_core::SidebarState;

use super::button::{Button, ButtonVariant};

/// Hook creating the shared sidebar state.
pub fn use_sidebar(show: bool) -> Signal<SidebarState> {
    use_signal(|| SidebarState::new(show))
}

/// CSS class list for a sidebar in `state`.
pub fn sidebar_class(state: &SidebarState) -> &'static str {
    if state.is_shown() {
        "lumen-sidebar lumen-sidebar_active"
    } else {
        "lumen-sidebar"
    }
}

/// Inline style placing the sidebar `top_offset` pixels from the top.
pub fn sidebar_style(top_offset: Option<f64>) -> String {
    match top_offset {
        Some(offset) => format!("top: {}px;", offset),
        None => String::new(),
    }
}

/// Side panel that slides in when shown
#[component]
pub fn Sidebar(
    state: Signal<SidebarState>,
    /// Distance from the top of the viewport, e.g. below a toolbar
    #[props(default)]
    top_offset: Option<f64>,
    children: Element,
) -> Element {
    let current = *state.read();
    let class = sidebar_class(&current);
    let style = sidebar_style(top_offset);

    rsx! {
        aside {
            class: "{class}",
            style: "{style}",
            "aria-hidden": if current.is_shown() { "false" } else { "true" },
            div { class: "lumen-sidebar__content", {children} }
        }
    }
}

/// Button toggling the sidebar
#[component]
pub fn SidebarToggleButton(state: Signal<SidebarState>, children: Element) -> Element {
    let mut state = state;
    let shown = state.read().is_shown();

    rsx! {
        Button {
            variant: ButtonVariant::Ghost,
            active: shown,
            class: "lumen-sidebar-toggle".to_string(),
            onclick: move |_| state.write().toggle(),
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_follows_visibility() {
        let mut state = SidebarState::new(false);
        assert_eq!(sidebar_class(&state), "lumen-sidebar");

        state.set_dialog_active(true);
        assert_eq!(sidebar_class(&state), "lumen-sidebar lumen-sidebar_active");
    }

    #[test]
    fn style_with_offset() {
        assert_eq!(sidebar_style(Some(48.0)), "top: 48px;");
        assert_eq!(sidebar_style(None), "");
    }
}
