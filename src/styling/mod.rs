//! Styling system for the showcase overlay
//!
//! - [`colors`] - Color constants and palette management
//! - [`layout`] - Spacing, padding, and border radius
//! - [`style`] - Per-element style configuration
//! - [`theme`] - Global theme and construction-time defaults

pub mod colors;
pub mod layout;
pub mod style;
pub mod theme;

// Re-export commonly used items for convenience
pub use colors::{
    COLOR_ACCENT, COLOR_BACKDROP, COLOR_PRESSED, COLOR_STROKE, COLOR_SURFACE, ColorPalette,
    DARK_GRAY, GRAY, LIGHT_GRAY, WHITE,
};
pub use layout::{BorderRadius, Padding, Spacing};
pub use style::Style;
pub use theme::{InstructionDefaults, Theme};
