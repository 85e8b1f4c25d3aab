//! Route matching for active-link highlighting.
//!
//! A sub-item is highlighted when its destination equals the current path
//! exactly. No prefix or pattern matching: `/settings` does not highlight
//! `/settings/profile`. An unmatched route simply highlights nothing.

/// Highlight state of a navigation link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkState {
    /// The link's destination equals the current path.
    Active,
    /// Every other link.
    Inactive,
}

impl LinkState {
    /// Compare the current path against a destination. Pure and stateless;
    /// evaluated at render time for every sub-item.
    #[must_use]
    pub fn for_path(current: &str, destination: &str) -> Self {
        if current == destination {
            Self::Active
        } else {
            Self::Inactive
        }
    }

    /// Whether this link should receive active styling.
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }

    /// CSS class for the renderer. Empty for inactive links so class lists
    /// stay clean.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "",
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::menu::MENU;

    #[test]
    fn test_exact_match_is_active() {
        assert_eq!(
            LinkState::for_path("/programmes/apps", "/programmes/apps"),
            LinkState::Active
        );
    }

    #[test]
    fn test_no_prefix_matching() {
        assert_eq!(
            LinkState::for_path("/settings", "/settings/profile"),
            LinkState::Inactive
        );
        assert_eq!(
            LinkState::for_path("/settings/profile/extra", "/settings/profile"),
            LinkState::Inactive
        );
    }

    #[test]
    fn test_css_class() {
        assert_eq!(LinkState::Active.css_class(), "active");
        assert_eq!(LinkState::Inactive.css_class(), "");
    }

    #[test]
    fn test_exactly_one_active_item_for_known_path() {
        let active: Vec<&str> = MENU
            .iter()
            .flat_map(|g| g.items.iter())
            .filter(|i| LinkState::for_path("/settings/profile", i.destination).is_active())
            .map(|i| i.title)
            .collect();
        assert_eq!(active, vec!["Profil"]);
    }

    #[test]
    fn test_zero_active_items_for_unknown_path() {
        let count = MENU
            .iter()
            .flat_map(|g| g.items.iter())
            .filter(|i| LinkState::for_path("/nowhere", i.destination).is_active())
            .count();
        assert_eq!(count, 0);
    }
}
