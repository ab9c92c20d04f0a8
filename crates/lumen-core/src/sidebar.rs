//! Sidebar visibility.
//!
//! The sidebar has a user-controlled visibility (`showed`) and an effective
//! one (`show`). While a dialog is active the sidebar is forced open; when
//! the dialog closes it returns to whatever the user last chose.

/// Visibility state machine for a sidebar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct SidebarState {
    show: bool,
    showed: bool,
    dialog_is_active: bool,
}

impl SidebarState {
    pub fn new(show: bool) -> Self {
        Self {
            show,
            showed: show,
            dialog_is_active: false,
        }
    }

    /// Whether the sidebar is currently visible.
    pub fn is_shown(&self) -> bool {
        self.show
    }

    /// Visibility last chosen outside of a dialog.
    pub fn user_choice(&self) -> bool {
        self.showed
    }

    pub fn dialog_is_active(&self) -> bool {
        self.dialog_is_active
    }

    pub fn set_dialog_active(&mut self, active: bool) {
        self.dialog_is_active = active;
        if active {
            self.show = true;
        } else if !self.showed {
            self.show = false;
        }
    }

    /// Set the visibility. Outside of a dialog this is also remembered as
    /// the user's choice.
    pub fn set_show(&mut self, show: bool) {
        self.show = show;
        if !self.dialog_is_active {
            self.showed = show;
        }
    }

    pub fn toggle(&mut self) {
        self.set_show(!self.show);
    }
}
