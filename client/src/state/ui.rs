//! Local UI chrome state (navigation drawer, display mode).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of domain state (`auth`,
//! `progress`, `tour`) so chrome controls can evolve independently of
//! protocol data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::util::display_mode::DisplayMode;

/// UI state for the mobile navigation drawer and the detected display mode.
#[derive(Clone, Copy, Debug, Default)]
pub struct UiState {
    /// Whether the mobile navigation drawer is open.
    pub nav_open: bool,
    /// Display mode detected at startup (PWA / mobile browser / browser).
    pub display_mode: DisplayMode,
}

impl UiState {
    pub fn toggle_nav(&mut self) {
        self.nav_open = !self.nav_open;
    }

    pub fn close_nav(&mut self) {
        self.nav_open = false;
    }
}
