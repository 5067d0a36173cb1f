// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

/// Screens the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    Upload,
    Editor,
}

impl Screen {
    /// Screens that accept files dropped on the window.
    #[must_use]
    pub fn accepts_drops(self) -> bool {
        matches!(self, Screen::Home | Screen::Upload)
    }
}
