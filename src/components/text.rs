// src/components/text.rs
//! Wrapped text labels and text measurement

use crate::core::{DirtyRegion, Drawable};
use crate::styling::Style;
use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle, ascii::FONT_6X10};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::{Alignment, Baseline, Text as EgText};

/// Text size variants
///
/// Preset text sizes with corresponding embedded-graphics fonts:
/// - `Small`: 6x10 font (badge text)
/// - `Medium`: 9x15 font (description, button title)
/// - `Large`: 10x20 font (title)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TextSize {
    Small,
    Medium,
    Large,
}

impl TextSize {
    pub fn font(&self) -> &'static MonoFont<'static> {
        match self {
            TextSize::Small => &FONT_6X10,
            TextSize::Medium => &embedded_graphics::mono_font::ascii::FONT_9X15,
            TextSize::Large => &embedded_graphics::mono_font::ascii::FONT_10X20,
        }
    }
}

/// Horizontal advance of one glyph, in pixels.
pub fn glyph_advance(font: &MonoFont<'_>) -> u32 {
    font.character_size.width + font.character_spacing
}

/// Pixel width of a single-line string in the given font.
pub fn text_width(font: &MonoFont<'_>, text: &str) -> u32 {
    text.chars().count() as u32 * glyph_advance(font)
}

/// Multi-line text label with word wrapping and a measured natural height
///
/// The label wraps its text to the width it was given and sizes its own
/// height to the wrapped line count. Re-setting the text re-wraps and
/// re-measures, so the label always fits its visible content exactly.
pub struct MultiLineText {
    bounds: Rectangle,
    lines: heapless::Vec<heapless::String<64>, 16>,
    font: &'static MonoFont<'static>,
    alignment: Alignment,
    line_spacing: u32,
    style: Style,
    dirty: bool,
}

impl MultiLineText {
    /// Creates a label at `top_left`, wrapped to `width`, with height sized
    /// to fit the wrapped text.
    pub fn sized_to_fit(
        top_left: Point,
        width: u32,
        text: &str,
        font: &'static MonoFont<'static>,
    ) -> Self {
        let mut label = Self {
            bounds: Rectangle::new(top_left, Size::new(width, 0)),
            lines: heapless::Vec::new(),
            font,
            alignment: Alignment::Left,
            line_spacing: 2,
            style: Style::default(),
            dirty: true,
        };

        label.set_text(text);
        label
    }

    /// Set the text alignment (Left, Center, or Right).
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn with_line_spacing(mut self, spacing: u32) -> Self {
        self.line_spacing = spacing;
        self.resize_to_content();
        self
    }

    /// Replace the text, re-wrap it, and resize the label's height.
    pub fn set_text(&mut self, text: &str) {
        self.lines.clear();

        if !text.is_empty() {
            // Wrap by newlines first, then by character budget per line
            let max_chars =
                (self.bounds.size.width / (self.font.character_size.width + 1)) as usize;

            for line in text.split('\n') {
                if line.len() <= max_chars {
                    let mut line_string = heapless::String::new();
                    line_string.push_str(line).ok();
                    self.lines.push(line_string).ok();
                } else {
                    let mut current_line = heapless::String::<64>::new();
                    for word in line.split_whitespace() {
                        if current_line.len() + word.len() < max_chars {
                            if !current_line.is_empty() {
                                current_line.push(' ').ok();
                            }
                            current_line.push_str(word).ok();
                        } else {
                            if !current_line.is_empty() {
                                self.lines.push(current_line.clone()).ok();
                            }
                            current_line.clear();
                            current_line.push_str(word).ok();
                        }
                    }
                    if !current_line.is_empty() {
                        self.lines.push(current_line).ok();
                    }
                }
            }
        }

        self.resize_to_content();
        self.dirty = true;
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn line_height(&self) -> u32 {
        self.font.character_size.height + self.line_spacing
    }

    fn resize_to_content(&mut self) {
        self.bounds.size.height = self.lines.len() as u32 * self.line_height();
    }

    fn line_anchor_x(&self) -> i32 {
        let width = self.bounds.size.width as i32;
        match self.alignment {
            Alignment::Left => self.bounds.top_left.x,
            Alignment::Center => self.bounds.top_left.x + width / 2,
            Alignment::Right => self.bounds.top_left.x + width,
        }
    }
}

impl Drawable for MultiLineText {
    fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        let text_color = self.style.foreground_color.unwrap_or(Rgb565::WHITE);
        let character_style = MonoTextStyle::new(self.font, text_color);
        let text_style = embedded_graphics::text::TextStyleBuilder::new()
            .alignment(self.alignment)
            .baseline(Baseline::Top)
            .build();

        let x = self.line_anchor_x();
        let mut y = self.bounds.top_left.y;

        for line in &self.lines {
            EgText::with_text_style(line, Point::new(x, y), character_style, text_style)
                .draw(display)?;
            y += self.line_height() as i32;
        }

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

    #[test]
    fn single_line_fits_without_wrapping() {
        let label = MultiLineText::sized_to_fit(Point::zero(), 100, "hello", &FONT_6X10);
        assert_eq!(label.line_count(), 1);
        assert_eq!(label.bounds().size.height, 12); // 10px glyph + 2px spacing
    }

    #[test]
    fn long_text_wraps_by_words() {
        // width 100 with a 6px font allows 14 characters per line
        let label =
            MultiLineText::sized_to_fit(Point::zero(), 100, "the quick brown fox jumps", &FONT_6X10);
        assert_eq!(label.line_count(), 3);
        assert_eq!(label.bounds().size.height, 36);
    }

    #[test]
    fn empty_text_has_zero_height() {
        let label = MultiLineText::sized_to_fit(Point::zero(), 100, "", &FONT_6X10);
        assert_eq!(label.line_count(), 0);
        assert_eq!(label.bounds().size.height, 0);
    }

    #[test]
    fn zero_width_puts_each_word_on_its_own_line() {
        let label = MultiLineText::sized_to_fit(Point::zero(), 0, "one two three", &FONT_6X10);
        assert_eq!(label.line_count(), 3);
    }

    #[test]
    fn set_text_remeasures_height() {
        let mut label = MultiLineText::sized_to_fit(Point::zero(), 100, "hello", &FONT_6X10);
        label.mark_clean();
        label.set_text("the quick brown fox jumps");
        assert_eq!(label.bounds().size.height, 36);
        assert!(label.is_dirty());
    }

    #[test]
    fn text_width_uses_glyph_advance() {
        assert_eq!(text_width(&FONT_6X10, "NEW"), 18);
    }
}
