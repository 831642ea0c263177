//! Style configuration for UI elements
//!
//! Provides the core `Style` struct and builder methods for defining the
//! visual appearance of the bubble's children (colors, borders, padding).

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::primitives::{PrimitiveStyle, PrimitiveStyleBuilder};

use super::colors::WHITE;
use super::layout::Padding;

/// Visual style configuration for a UI element
///
/// Defines appearance properties such as colors, borders, and padding.
/// Use the builder pattern to construct styles incrementally.
///
/// # Examples
///
/// ```ignore
/// // Title text style
/// let text_style = Style::new().with_foreground(WHITE);
///
/// // Outlined call-to-action with insets
/// let button_style = Style::new()
///     .with_border(COLOR_STROKE, 1)
///     .with_padding(Padding::symmetric(10, 16));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Style {
    /// Background fill color (if any)
    pub background_color: Option<Rgb565>,

    /// Foreground/text color (if any)
    pub foreground_color: Option<Rgb565>,

    /// Border color (if any)
    pub border_color: Option<Rgb565>,

    /// Border width in pixels (0 = no border)
    pub border_width: u32,

    /// Internal padding around content
    pub padding: Padding,
}

impl Default for Style {
    /// Returns a minimal default style with white text and no background or border
    fn default() -> Self {
        Self {
            background_color: None,
            foreground_color: Some(WHITE),
            border_color: None,
            border_width: 0,
            padding: Padding::default(),
        }
    }
}

impl Style {
    /// Creates a new empty style with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the background color
    pub fn with_background(mut self, color: Rgb565) -> Self {
        self.background_color = Some(color);
        self
    }

    /// Sets the foreground (text) color
    pub fn with_foreground(mut self, color: Rgb565) -> Self {
        self.foreground_color = Some(color);
        self
    }

    /// Sets the border color and width
    ///
    /// A width of 0 effectively disables the border.
    pub fn with_border(mut self, color: Rgb565, width: u32) -> Self {
        self.border_color = Some(color);
        self.border_width = width;
        self
    }

    /// Sets the padding around the element
    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    /// Converts this style to a `PrimitiveStyle` for embedded-graphics drawing
    ///
    /// Used internally when rendering styled shapes and backgrounds.
    pub fn to_primitive_style(&self) -> PrimitiveStyle<Rgb565> {
        let mut builder = PrimitiveStyleBuilder::new();

        if let Some(bg) = self.background_color {
            builder = builder.fill_color(bg);
        }

        if let Some(border) = self.border_color
            && self.border_width > 0
        {
            builder = builder.stroke_color(border).stroke_width(self.border_width);
        }

        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::styling::colors::COLOR_STROKE;

    #[test]
    fn zero_width_border_has_no_stroke() {
        let style = Style::new().with_border(COLOR_STROKE, 0);
        let primitive = style.to_primitive_style();
        assert!(primitive.stroke_color.is_none());
    }

    #[test]
    fn border_translates_to_stroke() {
        let style = Style::new().with_border(COLOR_STROKE, 2);
        let primitive = style.to_primitive_style();
        assert_eq!(primitive.stroke_color, Some(COLOR_STROKE));
        assert_eq!(primitive.stroke_width, 2);
    }
}
