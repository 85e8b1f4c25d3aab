//! Static navigation tree for the dashboard sidebar.
//!
//! The tree is a compile-time constant: four top-level groups, each holding
//! two or three sub-items bound to one destination path. There is no dynamic
//! add or remove; lookups are linear scans over the constant slice.

use serde::Serialize;

/// Identifier for a known glyph.
///
/// A closed enumeration instead of free-form icon references: the renderer
/// maps each variant to SVG path data with an exhaustive `match`, so a new
/// variant without artwork fails to compile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Glyph {
    /// Screen with a play overlay.
    MonitorPlay,
    /// Laptop computer.
    Laptop,
    /// Pair of user silhouettes.
    Users,
    /// Notification bell.
    Bell,
    /// Dashboard panels.
    Layout,
    /// Stacked boxes.
    Boxes,
    /// Tuning sliders.
    Sliders,
    /// Painter's palette.
    Palette,
    /// Paint brush.
    Paintbrush,
    /// Gear wheel.
    Settings,
    /// User avatar in a circle.
    UserCircle,
    /// Right-pointing chevron (sidebar collapse toggle).
    ChevronRight,
    /// Down-pointing chevron (group expand indicator).
    ChevronDown,
}

/// Leaf navigation entry bound to one destination path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    /// Display label.
    pub title: &'static str,
    /// Destination path, matched exactly against the current route.
    pub destination: &'static str,
    /// Glyph shown next to the label.
    pub glyph: Glyph,
}

/// Top-level collapsible menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MenuGroup {
    /// Display label, also the key used in `SidebarState::open_groups`.
    pub title: &'static str,
    /// Glyph shown next to the label.
    pub glyph: Glyph,
    /// Direct destination for groups without sub-items.
    pub destination: Option<&'static str>,
    /// Ordered sub-items.
    pub items: &'static [MenuItem],
}

impl MenuGroup {
    /// Whether this group expands into sub-items rather than linking
    /// directly to a destination.
    #[must_use]
    pub const fn has_children(&self) -> bool {
        !self.items.is_empty()
    }
}

/// The navigation tree.
pub const MENU: &[MenuGroup] = &[
    MenuGroup {
        title: "Programmes",
        glyph: Glyph::MonitorPlay,
        destination: None,
        items: &[
            MenuItem {
                title: "Applications",
                destination: "/programmes/apps",
                glyph: Glyph::Laptop,
            },
            MenuItem {
                title: "Utilisateurs",
                destination: "/programmes/users",
                glyph: Glyph::Users,
            },
            MenuItem {
                title: "Notifications",
                destination: "/programmes/notifications",
                glyph: Glyph::Bell,
            },
        ],
    },
    MenuGroup {
        title: "Configuration",
        glyph: Glyph::Layout,
        destination: None,
        items: &[
            MenuItem {
                title: "Système",
                destination: "/configuration/system",
                glyph: Glyph::Boxes,
            },
            MenuItem {
                title: "Intégrations",
                destination: "/configuration/integrations",
                glyph: Glyph::Sliders,
            },
        ],
    },
    MenuGroup {
        title: "Customisation",
        glyph: Glyph::Palette,
        destination: None,
        items: &[
            MenuItem {
                title: "Thèmes",
                destination: "/customisation/themes",
                glyph: Glyph::Paintbrush,
            },
            MenuItem {
                title: "Styles",
                destination: "/customisation/styles",
                glyph: Glyph::Palette,
            },
        ],
    },
    MenuGroup {
        title: "Paramètres",
        glyph: Glyph::Settings,
        destination: None,
        items: &[
            MenuItem {
                title: "Profil",
                destination: "/settings/profile",
                glyph: Glyph::UserCircle,
            },
            MenuItem {
                title: "Préférences",
                destination: "/settings/preferences",
                glyph: Glyph::Settings,
            },
        ],
    },
];

/// Look up a group by title.
#[must_use]
pub fn group(title: &str) -> Option<&'static MenuGroup> {
    MENU.iter().find(|g| g.title == title)
}

/// Look up the sub-item bound to a destination path.
#[must_use]
pub fn item_for(destination: &str) -> Option<&'static MenuItem> {
    MENU.iter()
        .flat_map(|g| g.items.iter())
        .find(|i| i.destination == destination)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_tree_shape() {
        assert_eq!(MENU.len(), 4);
        for g in MENU {
            assert!(
                (2..=3).contains(&g.items.len()),
                "group {} has {} items",
                g.title,
                g.items.len()
            );
        }
    }

    #[test]
    fn test_group_titles_are_unique() {
        for (i, a) in MENU.iter().enumerate() {
            for b in &MENU[i + 1..] {
                assert_ne!(a.title, b.title);
            }
        }
    }

    #[test]
    fn test_destinations_are_unique_absolute_paths() {
        let destinations: Vec<&str> = MENU
            .iter()
            .flat_map(|g| g.items.iter())
            .map(|i| i.destination)
            .collect();
        for (i, a) in destinations.iter().enumerate() {
            assert!(a.starts_with('/'), "destination {a} is not absolute");
            for b in &destinations[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_group_lookup() {
        let g = group("Paramètres").expect("group should exist");
        assert_eq!(g.glyph, Glyph::Settings);
        assert!(g.has_children());
        assert!(group("Inconnu").is_none());
    }

    #[test]
    fn test_item_lookup_by_destination() {
        let item = item_for("/settings/profile").expect("item should exist");
        assert_eq!(item.title, "Profil");
        assert!(item_for("/nowhere").is_none());
    }
}
