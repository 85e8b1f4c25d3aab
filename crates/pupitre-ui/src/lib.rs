//! `Pupitre` UI - Leptos-based dashboard shell.
//!
//! This crate renders the collapsible navigation sidebar inside a minimal
//! dashboard layout with client-side routing. All interaction logic lives in
//! `pupitre-core`; components here only wire reducers to click events and
//! map state to markup.

// Component files tend to be large by nature - they contain view logic
#![allow(clippy::too_many_lines)]

pub mod app;
pub mod components;
pub mod theme;

pub use app::App;
