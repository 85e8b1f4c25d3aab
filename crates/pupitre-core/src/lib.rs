//! `Pupitre` Core Library
//!
//! Framework-free logic for the dashboard navigation sidebar:
//! - The static navigation tree (groups, sub-items, glyph identifiers)
//! - Sidebar interaction state (collapsed flag, open groups)
//! - Route matching for active-link highlighting
//!
//! Everything here is pure, synchronous, and WASM-compatible. Rendering
//! lives in `pupitre-ui`; this crate never touches the DOM.

pub mod menu;
pub mod route;
pub mod state;

pub use menu::{Glyph, MENU, MenuGroup, MenuItem};
pub use route::LinkState;
pub use state::SidebarState;
