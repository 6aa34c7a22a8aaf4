//! Local UI chrome state (navigation panel, theme).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of record state so the sidebar
//! and theme toggle can evolve without touching editor logic.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::util::dark_mode::Theme;

/// Entry in the navigation panel's static link list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

/// Links shown in the navigation panel. Only Home routes anywhere yet.
pub const NAV_LINKS: [NavLink; 3] = [
    NavLink { label: "Home", href: "/", icon: "⌂" },
    NavLink { label: "Posts", href: "/", icon: "✎" },
    NavLink { label: "Analytics", href: "/", icon: "▤" },
];

/// UI state for the navigation panel and theme.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub nav_open: bool,
    pub theme: Theme,
}

impl UiState {
    pub fn toggle_nav(&mut self) {
        self.nav_open = !self.nav_open;
    }
}
