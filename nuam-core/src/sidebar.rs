//! Sidebar visibility toggle.

const BASE_CLASS: &str = "sidebar";
const HIDDEN_CLASS: &str = "is-hidden";

/// Visibility of the sidebar. Not persisted across page loads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SidebarState {
    hidden: bool,
}

impl SidebarState {
    pub fn toggle(&mut self) {
        self.hidden = !self.hidden;
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn class(&self) -> String {
        if self.hidden {
            format!("{} {}", BASE_CLASS, HIDDEN_CLASS)
        } else {
            BASE_CLASS.to_string()
        }
    }
}
