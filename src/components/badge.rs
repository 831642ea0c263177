// src/components/badge.rs
//! Pill-shaped badge label used as a step/category marker

use crate::core::{DirtyRegion, Drawable};
use crate::styling::{Padding, Style, WHITE};
use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Rectangle, RoundedRectangle};
use embedded_graphics::text::{Alignment as TextAlignment, Baseline, Text, TextStyleBuilder};

/// Small pill-shaped label drawn above the bubble's title
///
/// The badge sizes itself to its text plus fixed padding and always renders
/// white, centered text over an optional rounded background. It is purely
/// decorative and never interactive.
pub struct Badge {
    bounds: Rectangle,
    text: heapless::String<32>,
    font: &'static MonoFont<'static>,
    style: Style,
    corner_radius: u32,
    dirty: bool,
}

impl Badge {
    /// Creates a badge at `top_left` sized to fit `text` plus `padding`.
    pub fn sized_to_fit(
        top_left: Point,
        text: &str,
        font: &'static MonoFont<'static>,
        background: Option<Rgb565>,
        padding: Padding,
        corner_radius: u32,
    ) -> Self {
        let mut text_string = heapless::String::new();
        text_string.push_str(text).ok();

        let size = Size::new(
            super::text::text_width(font, text) + padding.horizontal(),
            font.character_size.height + padding.vertical(),
        );

        let mut style = Style::new().with_foreground(WHITE);
        if let Some(bg) = background {
            style = style.with_background(bg);
        }

        Self {
            bounds: Rectangle::new(top_left, size),
            text: text_string,
            font,
            style,
            corner_radius,
            dirty: true,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Drawable for Badge {
    fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        // Pill background (no-op when no background color is set)
        let corner = Size::new(self.corner_radius, self.corner_radius);
        RoundedRectangle::with_equal_corners(self.bounds, corner)
            .into_styled(self.style.to_primitive_style())
            .draw(display)?;

        let text_color = self.style.foreground_color.unwrap_or(WHITE);
        let character_style = MonoTextStyle::new(self.font, text_color);
        let text_style = TextStyleBuilder::new()
            .alignment(TextAlignment::Center)
            .baseline(Baseline::Middle)
            .build();

        Text::with_text_style(&self.text, self.bounds.center(), character_style, text_style)
            .draw(display)?;

        Ok(())
    }

    fn bounds(&self) -> Rectangle {
        self.bounds
    }

    fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn mark_clean(&mut self) {
        self.dirty = false;
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    fn dirty_region(&self) -> Option<DirtyRegion> {
        if self.dirty {
            Some(DirtyRegion::new(self.bounds))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::styling::COLOR_ACCENT;
    use embedded_graphics::mono_font::ascii::FONT_6X10;

    #[test]
    fn badge_sizes_to_text_plus_padding() {
        let badge = Badge::sized_to_fit(
            Point::zero(),
            "NEW",
            &FONT_6X10,
            Some(COLOR_ACCENT),
            Padding::symmetric(3, 6),
            2,
        );

        // 3 glyphs x 6px + 12px horizontal padding, 10px glyph + 6px vertical
        assert_eq!(badge.bounds().size, Size::new(30, 16));
        assert_eq!(badge.text(), "NEW");
    }
}
