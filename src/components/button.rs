// src/components/button.rs
//! Call-to-action button for the instruction bubble

use crate::core::{DirtyRegion, Drawable, TouchEvent, TouchPoint, TouchResult, Touchable};
use crate::styling::{COLOR_PRESSED, Padding, Style};
use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Rectangle, RoundedRectangle};
use embedded_graphics::text::{Alignment as TextAlignment, Baseline, Text, TextStyleBuilder};

/// Content insets around the button title
const CONTENT_INSETS: Padding = Padding {
    top: 10,
    right: 16,
    bottom: 10,
    left: 16,
};

/// Button state
#[derive(Debug, Clone, Copy, PartialEq)]
enum ButtonState {
    Normal,
    Pressed,
}

/// Outlined call-to-action button
///
/// Sizes itself to its title plus fixed content insets, draws an optional
/// border with rounded corners, and reports a completed tap when pressed.
/// The bubble is the only dispatcher; the button itself holds no listener.
pub struct ActionButton {
    bounds: Rectangle,
    title: heapless::String<32>,
    font: &'static MonoFont<'static>,
    style: Style,
    corner_radius: u32,
    state: ButtonState,
    dirty: bool,
}

impl ActionButton {
    /// Creates a button at `top_left` sized to fit `title` plus the content
    /// insets.
    pub fn sized_to_fit(
        top_left: Point,
        title: &str,
        font: &'static MonoFont<'static>,
        title_color: Rgb565,
        border_color: Option<Rgb565>,
        border_width: u32,
        corner_radius: u32,
    ) -> Self {
        let mut title_string = heapless::String::new();
        title_string.push_str(title).ok();

        let size = Size::new(
            super::text::text_width(font, title) + CONTENT_INSETS.horizontal(),
            font.character_size.height + CONTENT_INSETS.vertical(),
        );

        let mut style = Style::new()
            .with_foreground(title_color)
            .with_padding(CONTENT_INSETS);
        if let Some(border) = border_color {
            style = style.with_border(border, border_width);
        }

        Self {
            bounds: Rectangle::new(top_left, size),
            title: title_string,
            font,
            style,
            corner_radius,
            state: ButtonState::Normal,
            dirty: true,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn is_pressed(&self) -> bool {
        self.state == ButtonState::Pressed
    }

    fn current_style(&self) -> Style {
        match self.state {
            ButtonState::Normal => self.style,
            // Pressed state gets a darkened fill behind the title
            ButtonState::Pressed => self.style.with_background(COLOR_PRESSED),
        }
    }
}

impl Drawable for ActionButton {
    fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        let style = self.current_style();

        let corner = Size::new(self.corner_radius, self.corner_radius);
        RoundedRectangle::with_equal_corners(self.bounds, corner)
            .into_styled(style.to_primitive_style())
            .draw(display)?;

        let text_color = style.foreground_color.unwrap_or(Rgb565::WHITE);
        let character_style = MonoTextStyle::new(self.font, text_color);
        let text_style = TextStyleBuilder::new()
            .alignment(TextAlignment::Center)
            .baseline(Baseline::Middle)
            .build();

        Text::with_text_style(&self.title, self.bounds.center(), character_style, text_style)
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

impl Touchable for ActionButton {
    fn contains_point(&self, point: TouchPoint) -> bool {
        let p = point.to_point();
        self.bounds.contains(p)
    }

    fn handle_touch(&mut self, event: TouchEvent) -> TouchResult {
        match event {
            TouchEvent::Press(point) if self.contains_point(point) => {
                self.state = ButtonState::Pressed;
                self.dirty = true;

                // The tap completes on press
                TouchResult::Tapped
            }
            TouchEvent::Drag(point) => {
                // Keep the pressed highlight only while the drag stays inside
                let new_state = if self.contains_point(point) {
                    ButtonState::Pressed
                } else {
                    ButtonState::Normal
                };

                if self.state != new_state {
                    self.state = new_state;
                    self.dirty = true;
                }
                TouchResult::Handled
            }
            _ => TouchResult::NotHandled,
        }
    }
}
