//! Global theme management
//!
//! Combines color palette, spacing, and border radii into a unified theme,
//! and derives from it the immutable defaults record handed to an
//! [`InstructionView`](crate::instruction::InstructionView) at construction.

use crate::components::text::TextSize;

use super::colors::ColorPalette;
use super::layout::{BorderRadius, Spacing};

// ============================================================================
// Theme
// ============================================================================

/// Global theme configuration
///
/// Aggregates all styling parameters (colors, spacing, border radii) into
/// a single cohesive theme that can be passed throughout the overlay.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// The active color palette (dark or light)
    pub palette: ColorPalette,

    /// Spacing scale for the bubble's vertical gaps
    pub spacing: Spacing,

    /// Border radius options for rounded corners
    pub border_radius: BorderRadius,
}

impl Default for Theme {
    /// Returns the default theme (dark backdrop)
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Creates a dark-backdrop theme
    pub fn dark() -> Self {
        Self {
            palette: ColorPalette::dark(),
            spacing: Spacing::default(),
            border_radius: BorderRadius::default(),
        }
    }

    /// Creates a light-backdrop theme
    pub fn light() -> Self {
        Self {
            palette: ColorPalette::light(),
            spacing: Spacing::default(),
            border_radius: BorderRadius::default(),
        }
    }
}

// ============================================================================
// Instruction Defaults
// ============================================================================

/// Immutable defaults applied to a freshly constructed instruction bubble
///
/// Carries the default strings, text sizes, and colors the bubble starts
/// with before the caller configures it. Passed by value at construction so
/// no process-wide shared state is involved.
#[derive(Debug, Clone, Copy)]
pub struct InstructionDefaults {
    /// Default title text
    pub primary_text: &'static str,

    /// Default description text
    pub secondary_text: &'static str,

    /// Default title color
    pub primary_color: embedded_graphics::pixelcolor::Rgb565,

    /// Default description color (dimmed relative to the title)
    pub secondary_color: embedded_graphics::pixelcolor::Rgb565,

    /// Default action-button title color
    pub button_text_color: embedded_graphics::pixelcolor::Rgb565,

    /// Default title text size
    pub primary_size: TextSize,

    /// Default description text size
    pub secondary_size: TextSize,

    /// Default badge text size
    pub badge_size: TextSize,

    /// Default action-button text size
    pub button_size: TextSize,

    /// Vertical gaps between the bubble's children
    pub spacing: Spacing,

    /// Corner radius of the badge pill
    pub badge_corner_radius: u32,
}

impl InstructionDefaults {
    /// Derives the defaults from a theme
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            primary_text: "Awesome action",
            secondary_text: "Tap here to do some awesome thing",
            primary_color: theme.palette.text_primary,
            secondary_color: theme.palette.text_secondary,
            button_text_color: theme.palette.text_primary,
            primary_size: TextSize::Large,
            secondary_size: TextSize::Medium,
            badge_size: TextSize::Small,
            button_size: TextSize::Medium,
            spacing: theme.spacing,
            badge_corner_radius: theme.border_radius.tiny,
        }
    }
}

impl Default for InstructionDefaults {
    fn default() -> Self {
        Self::from_theme(&Theme::dark())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::styling::colors::{LIGHT_GRAY, WHITE};

    #[test]
    fn dark_defaults_use_dimmed_secondary() {
        let defaults = InstructionDefaults::default();
        assert_eq!(defaults.primary_color, WHITE);
        assert_eq!(defaults.secondary_color, LIGHT_GRAY);
        assert_eq!(defaults.primary_size, TextSize::Large);
        assert_eq!(defaults.secondary_size, TextSize::Medium);
    }
}
