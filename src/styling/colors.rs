//! Color definitions and palette management
//!
//! Colors are RGB565, the native format of 16-bit embedded displays.
//!
//! To convert from 8-bit RGB: R>>3, G>>2, B>>3

use embedded_graphics::pixelcolor::Rgb565;

// ============================================================================
// Base Colors
// ============================================================================

/// Backdrop color behind showcase overlays - very dark gray-blue
pub const COLOR_BACKDROP: Rgb565 = Rgb565::new(18 >> 3, 23 >> 2, 24 >> 3);

/// Surface color for elevated overlay elements
pub const COLOR_SURFACE: Rgb565 = Rgb565::new(26 >> 3, 32 >> 2, 33 >> 3);

/// Border/stroke color - medium gray
pub const COLOR_STROKE: Rgb565 = Rgb565::new(43 >> 3, 55 >> 2, 57 >> 3);

/// Accent color for badges and call-to-action chrome - material blue
pub const COLOR_ACCENT: Rgb565 = Rgb565::new(33 >> 3, 150 >> 2, 243 >> 3);

/// Fill drawn behind a pressed action button
pub const COLOR_PRESSED: Rgb565 = Rgb565::new(64 >> 3, 64 >> 2, 64 >> 3);

// ============================================================================
// Text Colors
// ============================================================================

/// Pure white - maximum brightness in RGB565
pub const WHITE: Rgb565 = Rgb565::new(31, 63, 31);

/// Light gray - for secondary/description text (white at ~87% intensity)
pub const LIGHT_GRAY: Rgb565 = Rgb565::new(27, 55, 27);

/// Medium gray - for tertiary text
pub const GRAY: Rgb565 = Rgb565::new(16, 32, 16);

/// Dark gray - for subtle text on light backdrops
pub const DARK_GRAY: Rgb565 = Rgb565::new(10, 20, 10);

// ============================================================================
// Color Palette
// ============================================================================

/// A cohesive color palette for showcase overlays.
///
/// Groups the overlay colors together so the bubble, badge, and button pull
/// from one consistent source. Supports both dark and light backdrops.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorPalette {
    /// Accent color - badges and call-to-action emphasis
    pub accent: Rgb565,

    /// Backdrop color behind the overlay
    pub backdrop: Rgb565,

    /// Surface color for elevated elements
    pub surface: Rgb565,

    /// Primary text color - high contrast
    pub text_primary: Rgb565,

    /// Secondary text color - lower contrast for descriptions
    pub text_secondary: Rgb565,

    /// Border color for button outlines
    pub border: Rgb565,
}

impl Default for ColorPalette {
    /// Returns the default dark-backdrop palette
    fn default() -> Self {
        Self::dark()
    }
}

impl ColorPalette {
    /// Creates a dark-backdrop palette (default)
    ///
    /// Light text on a dark overlay, the standard look for feature
    /// showcases dimming the screen behind the highlighted target.
    pub fn dark() -> Self {
        Self {
            accent: COLOR_ACCENT,
            backdrop: COLOR_BACKDROP,
            surface: COLOR_SURFACE,
            text_primary: WHITE,
            text_secondary: LIGHT_GRAY,
            border: COLOR_STROKE,
        }
    }

    /// Creates a light-backdrop palette
    ///
    /// Dark text on a light overlay, for apps that showcase against a
    /// bright background.
    pub fn light() -> Self {
        Self {
            accent: COLOR_ACCENT,
            backdrop: WHITE,
            surface: LIGHT_GRAY,
            text_primary: COLOR_BACKDROP,
            text_secondary: DARK_GRAY,
            border: COLOR_STROKE,
        }
    }
}
