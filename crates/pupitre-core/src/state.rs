//! Sidebar interaction state.
//!
//! Two user-facing toggles mutate this state: collapsing the sidebar to its
//! icon-only layout, and expanding/closing individual groups. Everything is
//! synchronous; the host UI re-renders after each reducer call.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Interaction state for the sidebar.
///
/// Created with the sidebar expanded and every group closed, mutated only by
/// [`toggle_sidebar`](Self::toggle_sidebar) and
/// [`toggle_group`](Self::toggle_group), and discarded on unmount. Nothing
/// is persisted across sessions.
///
/// `open_groups` holds titles from the static navigation tree. Membership is
/// preserved while the sidebar is collapsed so that re-expanding restores
/// the previous open/closed layout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarState {
    /// Whether the sidebar is in its icon-only collapsed layout.
    pub collapsed: bool,
    /// Titles of the groups currently expanded. Insertion order carries no
    /// meaning; the render order always comes from the tree.
    pub open_groups: Vec<String>,
}

impl SidebarState {
    /// Initial state: expanded sidebar, all groups closed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip between the expanded and icon-only layouts.
    ///
    /// Open-group membership is untouched: collapsing hides children without
    /// forgetting which groups were open.
    pub fn toggle_sidebar(&mut self) {
        self.collapsed = !self.collapsed;
        debug!(collapsed = self.collapsed, "sidebar layout toggled");
    }

    /// Toggle a group's open state.
    ///
    /// No-op while the sidebar is collapsed; group toggling is disabled in
    /// the icon-only layout.
    pub fn toggle_group(&mut self, title: &str) {
        if self.collapsed {
            debug!(title, "group toggle ignored while collapsed");
            return;
        }
        if let Some(pos) = self.open_groups.iter().position(|t| t == title) {
            self.open_groups.remove(pos);
        } else {
            self.open_groups.push(title.to_string());
        }
        debug!(title, open = self.is_group_open(title), "group toggled");
    }

    /// Raw open-group membership, independent of the collapsed flag.
    #[must_use]
    pub fn is_group_open(&self, title: &str) -> bool {
        self.open_groups.iter().any(|t| t == title)
    }

    /// Whether a group's children should be rendered: the group is open and
    /// the sidebar is not collapsed.
    #[must_use]
    pub fn shows_children(&self, title: &str) -> bool {
        !self.collapsed && self.is_group_open(title)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = SidebarState::new();
        assert!(!state.collapsed);
        assert!(state.open_groups.is_empty());
    }

    #[test]
    fn test_toggle_group_twice_restores_membership() {
        let mut state = SidebarState::new();
        state.toggle_group("Programmes");
        assert_eq!(state.open_groups, vec!["Programmes".to_string()]);
        state.toggle_group("Programmes");
        assert!(state.open_groups.is_empty());
    }

    #[test]
    fn test_toggle_sidebar_twice_restores_layout() {
        let mut state = SidebarState::new();
        state.toggle_sidebar();
        assert!(state.collapsed);
        state.toggle_sidebar();
        assert!(!state.collapsed);
    }

    #[test]
    fn test_toggle_group_is_noop_while_collapsed() {
        let mut state = SidebarState::new();
        state.toggle_group("Configuration");
        state.toggle_sidebar();

        state.toggle_group("Configuration");
        state.toggle_group("Paramètres");
        assert_eq!(state.open_groups, vec!["Configuration".to_string()]);
    }

    #[test]
    fn test_collapse_hides_children_but_keeps_membership() {
        let mut state = SidebarState::new();
        state.toggle_group("Programmes");
        assert!(state.shows_children("Programmes"));

        state.toggle_sidebar();
        assert!(!state.shows_children("Programmes"));
        assert!(state.is_group_open("Programmes"));

        // Re-expanding restores the previous layout without re-toggling.
        state.toggle_sidebar();
        assert!(state.shows_children("Programmes"));
    }

    #[test]
    fn test_independent_groups() {
        let mut state = SidebarState::new();
        state.toggle_group("Programmes");
        state.toggle_group("Customisation");
        state.toggle_group("Programmes");
        assert!(!state.is_group_open("Programmes"));
        assert!(state.is_group_open("Customisation"));
    }

    #[test]
    fn test_closed_group_shows_no_children() {
        let state = SidebarState::new();
        assert!(!state.shows_children("Programmes"));
    }
}
