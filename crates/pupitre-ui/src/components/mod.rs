//! UI components for the dashboard shell.

pub mod icon;
pub mod layout;
pub mod sidebar;

pub use icon::Icon;
pub use layout::{ContentSection, Layout, LayoutMain};
pub use sidebar::Sidebar;
