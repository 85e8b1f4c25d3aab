//! Theme configuration for `Pupitre`.
//!
//! Light admin-console palette with an indigo accent. Values are emitted as
//! CSS custom properties so the stylesheet stays free of literals.

/// Color palette for the application.
pub mod colors {
    /// Background colors.
    pub mod background {
        /// Page background.
        pub const PRIMARY: &str = "#f8fafc";
        /// Sidebar and header background.
        pub const SURFACE: &str = "#ffffff";
        /// Hover state background.
        pub const HOVER: &str = "#f1f5f9";
        /// Active navigation entry background.
        pub const ACTIVE: &str = "#e0e7ff";
    }

    /// Text colors.
    pub mod text {
        /// Primary text color.
        pub const PRIMARY: &str = "#0f172a";
        /// Secondary/muted text.
        pub const SECONDARY: &str = "#64748b";
        /// Text on active navigation entries.
        pub const ACTIVE: &str = "#3730a3";
    }

    /// Accent colors.
    pub mod accent {
        /// Primary accent - indigo.
        pub const PRIMARY: &str = "#4f46e5";
        /// Primary accent darker variant for hover states.
        pub const PRIMARY_DIM: &str = "#4338ca";
    }

    /// Border colors.
    pub mod border {
        /// Default border.
        pub const DEFAULT: &str = "#e2e8f0";
        /// Focused border.
        pub const FOCUSED: &str = "#4f46e5";
    }
}

/// Typography configuration.
pub mod typography {
    /// Font family - system stack.
    pub const FONT_FAMILY: &str =
        "'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif";

    /// Font sizes.
    pub mod sizes {
        /// Small text (navigation labels).
        pub const SM: &str = "0.875rem";
        /// Base text.
        pub const BASE: &str = "1rem";
        /// Section headings.
        pub const LG: &str = "1.25rem";
    }
}

/// Spacing values.
pub mod spacing {
    /// Extra small spacing.
    pub const XS: &str = "0.25rem";
    /// Small spacing.
    pub const SM: &str = "0.5rem";
    /// Medium spacing.
    pub const MD: &str = "1rem";
    /// Large spacing.
    pub const LG: &str = "1.5rem";
}

/// Border radius values.
pub mod radius {
    /// Small radius (navigation entries).
    pub const SM: &str = "0.375rem";
    /// Medium radius (cards, sections).
    pub const MD: &str = "0.625rem";
    /// Full/pill radius (collapse toggle).
    pub const FULL: &str = "9999px";
}

/// Fixed layout dimensions.
pub mod layout {
    /// Sidebar width in the expanded layout.
    pub const SIDEBAR_WIDTH: &str = "240px";
    /// Sidebar width in the icon-only collapsed layout.
    pub const SIDEBAR_WIDTH_COLLAPSED: &str = "60px";
    /// Header height.
    pub const HEADER_HEIGHT: &str = "56px";
}

/// Animation/transition configuration.
pub mod animation {
    /// Fast transition for interactive elements.
    pub const FAST: &str = "0.15s cubic-bezier(0.4, 0, 0.2, 1)";
    /// Smooth transition for the sidebar width change.
    pub const SMOOTH: &str = "0.3s cubic-bezier(0.4, 0, 0.2, 1)";
}

/// Generate CSS custom properties for the theme.
pub fn generate_css_variables() -> String {
    format!(
        r":root {{
  /* Background colors */
  --bg-primary: {bg_primary};
  --bg-surface: {bg_surface};
  --bg-hover: {bg_hover};
  --bg-active: {bg_active};

  /* Text colors */
  --text-primary: {text_primary};
  --text-secondary: {text_secondary};
  --text-active: {text_active};

  /* Accent colors */
  --accent-primary: {accent_primary};
  --accent-primary-dim: {accent_primary_dim};

  /* Border colors */
  --border-default: {border_default};
  --border-focused: {border_focused};

  /* Typography */
  --font-family: {font_family};
  --font-size-sm: {font_sm};
  --font-size-base: {font_base};
  --font-size-lg: {font_lg};

  /* Spacing */
  --spacing-xs: {spacing_xs};
  --spacing-sm: {spacing_sm};
  --spacing-md: {spacing_md};
  --spacing-lg: {spacing_lg};

  /* Border radius */
  --radius-sm: {radius_sm};
  --radius-md: {radius_md};
  --radius-full: {radius_full};

  /* Layout */
  --sidebar-width: {sidebar_width};
  --sidebar-width-collapsed: {sidebar_width_collapsed};
  --header-height: {header_height};

  /* Transitions */
  --transition-fast: {transition_fast};
  --transition-smooth: {transition_smooth};
}}",
        bg_primary = colors::background::PRIMARY,
        bg_surface = colors::background::SURFACE,
        bg_hover = colors::background::HOVER,
        bg_active = colors::background::ACTIVE,
        text_primary = colors::text::PRIMARY,
        text_secondary = colors::text::SECONDARY,
        text_active = colors::text::ACTIVE,
        accent_primary = colors::accent::PRIMARY,
        accent_primary_dim = colors::accent::PRIMARY_DIM,
        border_default = colors::border::DEFAULT,
        border_focused = colors::border::FOCUSED,
        font_family = typography::FONT_FAMILY,
        font_sm = typography::sizes::SM,
        font_base = typography::sizes::BASE,
        font_lg = typography::sizes::LG,
        spacing_xs = spacing::XS,
        spacing_sm = spacing::SM,
        spacing_md = spacing::MD,
        spacing_lg = spacing::LG,
        radius_sm = radius::SM,
        radius_md = radius::MD,
        radius_full = radius::FULL,
        sidebar_width = layout::SIDEBAR_WIDTH,
        sidebar_width_collapsed = layout::SIDEBAR_WIDTH_COLLAPSED,
        header_height = layout::HEADER_HEIGHT,
        transition_fast = animation::FAST,
        transition_smooth = animation::SMOOTH,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_css_variables() {
        let css = generate_css_variables();
        assert!(css.contains(":root"));
        assert!(css.contains("--bg-primary"));
        assert!(css.contains("--sidebar-width"));
        assert!(css.contains("--sidebar-width-collapsed"));
    }

    #[test]
    fn test_color_values() {
        assert!(colors::background::PRIMARY.starts_with('#'));
        assert!(colors::accent::PRIMARY.starts_with('#'));
    }

    #[test]
    fn test_layout_widths_differ() {
        assert_ne!(layout::SIDEBAR_WIDTH, layout::SIDEBAR_WIDTH_COLLAPSED);
    }
}
