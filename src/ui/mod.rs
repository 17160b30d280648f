//! UI module - GPUI views and components
//!
//! This module contains all UI-related code:
//! - `components/` - The converter window, its controls and the About box
//! - `theme` - OS-aware light and dark mode color schemes

pub mod components;
pub mod theme;

pub use theme::Theme;
