// src/instruction.rs
//! The instruction bubble: badge, title, description, and call-to-action

use crate::components::badge::Badge;
use crate::components::button::ActionButton;
use crate::components::text::{MultiLineText, TextSize};
use crate::core::{Drawable, TouchEvent, TouchPoint, TouchResult, Touchable};
use crate::styling::{InstructionDefaults, Padding, Spacing, Style};
use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::Alignment;
use log::{debug, trace};

/// Badge padding: 12px horizontal / 6px vertical in total
const BADGE_PADDING: Padding = Padding {
    top: 3,
    right: 6,
    bottom: 3,
    left: 6,
};

/// Listener notified when the bubble's action button is tapped
///
/// Registration is non-owning: the bubble holds a plain borrow, so the
/// borrow checker guarantees the listener outlives it. No listener means
/// taps are silently dropped.
pub trait InstructionViewDelegate {
    /// Called synchronously, once per tap, with the tapped button.
    fn on_action_button_tapped(&self, button: &ActionButton);
}

/// Tooltip-style instruction bubble for showcase overlays
///
/// Owns four child elements stacked top to bottom with fixed gaps: an
/// optional badge, a title, a description, and an optional action button.
/// Child widths derive from the bubble's horizontal position relative to
/// the display, and the bubble resizes itself to the cumulative height of
/// its children.
///
/// The view is configured by mutating its public properties, then laid out
/// with [`layout`](Self::layout). Layout destroys and rebuilds all children,
/// so re-running it with unchanged properties is idempotent.
pub struct InstructionView<'a> {
    frame: Rectangle,
    display_width: u32,
    delegate: Option<&'a dyn InstructionViewDelegate>,

    // Badge properties
    pub badge_text: Option<heapless::String<32>>,
    pub badge_background: Option<Rgb565>,
    pub badge_font: Option<&'static MonoFont<'static>>,
    pub badge_size: TextSize,
    pub badge_corner_radius: u32,

    // Title properties
    pub primary_text: heapless::String<128>,
    pub primary_color: Rgb565,
    pub primary_size: TextSize,
    pub primary_font: Option<&'static MonoFont<'static>>,
    pub primary_alignment: Alignment,

    // Description properties
    pub secondary_text: heapless::String<128>,
    pub secondary_color: Rgb565,
    pub secondary_size: TextSize,
    pub secondary_font: Option<&'static MonoFont<'static>>,
    pub secondary_alignment: Alignment,

    // Action button properties
    pub button_text: Option<heapless::String<32>>,
    pub button_text_color: Rgb565,
    pub button_size: TextSize,
    pub button_font: Option<&'static MonoFont<'static>>,
    pub button_border_color: Option<Rgb565>,
    pub button_border_width: u32,
    pub button_corner_radius: u32,

    /// Vertical gaps between children (`large`/`medium`/`xlarge`)
    pub spacing: Spacing,

    // Children, rebuilt on every layout pass
    badge: Option<Badge>,
    primary_label: Option<MultiLineText>,
    secondary_label: Option<MultiLineText>,
    action_button: Option<ActionButton>,

    dirty: bool,
}

impl<'a> InstructionView<'a> {
    /// Creates a bubble at origin zero spanning the display width, with
    /// zero height until the first layout pass.
    pub fn new(display_width: u32, defaults: InstructionDefaults) -> Self {
        let mut primary_text = heapless::String::new();
        primary_text.push_str(defaults.primary_text).ok();
        let mut secondary_text = heapless::String::new();
        secondary_text.push_str(defaults.secondary_text).ok();

        Self {
            frame: Rectangle::new(Point::zero(), Size::new(display_width, 0)),
            display_width,
            delegate: None,

            badge_text: None,
            badge_background: None,
            badge_font: None,
            badge_size: defaults.badge_size,
            badge_corner_radius: defaults.badge_corner_radius,

            primary_text,
            primary_color: defaults.primary_color,
            primary_size: defaults.primary_size,
            primary_font: None,
            primary_alignment: Alignment::Left,

            secondary_text,
            secondary_color: defaults.secondary_color,
            secondary_size: defaults.secondary_size,
            secondary_font: None,
            secondary_alignment: Alignment::Left,

            button_text: None,
            button_text_color: defaults.button_text_color,
            button_size: defaults.button_size,
            button_font: None,
            button_border_color: None,
            button_border_width: 0,
            button_corner_radius: 0,

            spacing: defaults.spacing,

            badge: None,
            primary_label: None,
            secondary_label: None,
            action_button: None,

            dirty: true,
        }
    }

    /// Registers the tap listener. The previous listener, if any, is replaced.
    pub fn set_delegate(&mut self, delegate: &'a dyn InstructionViewDelegate) {
        self.delegate = Some(delegate);
    }

    pub fn clear_delegate(&mut self) {
        self.delegate = None;
    }

    pub fn frame(&self) -> Rectangle {
        self.frame
    }

    /// Moves the bubble; width is preserved, height is recomputed on the
    /// next layout pass.
    pub fn set_origin(&mut self, origin: Point) {
        self.frame.top_left = origin;
        self.dirty = true;
    }

    pub fn set_frame(&mut self, frame: Rectangle) {
        self.frame = frame;
        self.dirty = true;
    }

    pub fn set_badge_text(&mut self, text: Option<&str>) {
        self.badge_text = text.map(|text| {
            let mut s = heapless::String::new();
            s.push_str(text).ok();
            s
        });
    }

    pub fn set_primary_text(&mut self, text: &str) {
        self.primary_text.clear();
        self.primary_text.push_str(text).ok();
    }

    pub fn set_secondary_text(&mut self, text: &str) {
        self.secondary_text.clear();
        self.secondary_text.push_str(text).ok();
    }

    pub fn set_button_text(&mut self, text: Option<&str>) {
        self.button_text = text.map(|text| {
            let mut s = heapless::String::new();
            s.push_str(text).ok();
            s
        });
    }

    pub fn badge(&self) -> Option<&Badge> {
        self.badge.as_ref()
    }

    pub fn primary_label(&self) -> Option<&MultiLineText> {
        self.primary_label.as_ref()
    }

    pub fn secondary_label(&self) -> Option<&MultiLineText> {
        self.secondary_label.as_ref()
    }

    pub fn action_button(&self) -> Option<&ActionButton> {
        self.action_button.as_ref()
    }

    /// Usable child width derived from the bubble's horizontal position.
    ///
    /// Off-left placements widen by half the negative origin; placements
    /// whose right edge passes the display halve the remaining width. The
    /// off-right branch can go negative when the origin alone exceeds the
    /// display width; child bounds clamp it to zero, but the raw value is
    /// exposed unchanged because sibling placement code in the overlay
    /// relies on the same arithmetic.
    pub fn usable_width(&self) -> i32 {
        let x = self.frame.top_left.x;
        let width = self.frame.size.width as i32;

        if x < 0 {
            width - x / 2
        } else if x + width > self.display_width as i32 {
            (width - x) / 2
        } else {
            width - x
        }
    }

    /// Destroys and rebuilds all children, then resizes the frame to the
    /// cumulative content height.
    ///
    /// Children stack top to bottom in a fixed order, each offset by the
    /// heights of everything above it plus a fixed gap. The three gaps are
    /// applied unconditionally, whether or not the optional badge and
    /// button exist.
    pub fn layout(&mut self) {
        let content_width = self.usable_width().max(0) as u32;

        let badge = match &self.badge_text {
            Some(text) if !text.is_empty() => Some(Badge::sized_to_fit(
                Point::zero(),
                text,
                self.badge_font.unwrap_or(self.badge_size.font()),
                self.badge_background,
                BADGE_PADDING,
                self.badge_corner_radius,
            )),
            _ => None,
        };
        let badge_height = badge.as_ref().map_or(0, |b| b.bounds().size.height);

        let primary_y = badge_height as i32 + self.spacing.large as i32;
        let primary = MultiLineText::sized_to_fit(
            Point::new(0, primary_y),
            content_width,
            &self.primary_text,
            self.primary_font.unwrap_or(self.primary_size.font()),
        )
        .with_alignment(self.primary_alignment)
        .with_style(Style::new().with_foreground(self.primary_color));
        let primary_height = primary.bounds().size.height;

        let secondary_y = primary_y + primary_height as i32 + self.spacing.medium as i32;
        let secondary = MultiLineText::sized_to_fit(
            Point::new(0, secondary_y),
            content_width,
            &self.secondary_text,
            self.secondary_font.unwrap_or(self.secondary_size.font()),
        )
        .with_alignment(self.secondary_alignment)
        .with_style(Style::new().with_foreground(self.secondary_color));
        let secondary_height = secondary.bounds().size.height;

        let button_y = secondary_y + secondary_height as i32 + self.spacing.xlarge as i32;
        let button = match &self.button_text {
            Some(title) if !title.is_empty() => Some(ActionButton::sized_to_fit(
                Point::new(0, button_y),
                title,
                self.button_font.unwrap_or(self.button_size.font()),
                self.button_text_color,
                self.button_border_color,
                self.button_border_width,
                self.button_corner_radius,
            )),
            _ => None,
        };
        let button_height = button.as_ref().map_or(0, |b| b.bounds().size.height);

        self.badge = badge;
        self.primary_label = Some(primary);
        self.secondary_label = Some(secondary);
        self.action_button = button;

        self.frame.size.height = badge_height
            + primary_height
            + secondary_height
            + button_height
            + self.spacing.large
            + self.spacing.medium
            + self.spacing.xlarge;
        self.dirty = true;

        debug!(
            "instruction bubble laid out: width={} badge={} title={} description={} button={} height={}",
            content_width,
            badge_height,
            primary_height,
            secondary_height,
            button_height,
            self.frame.size.height
        );
    }

    /// Translates a display-space touch event into the bubble's local
    /// coordinate space. Events left of or above the bubble have no local
    /// representation.
    fn to_local(&self, event: TouchEvent) -> Option<TouchEvent> {
        let origin = self.frame.top_left;
        let translate = |p: TouchPoint| {
            let local = p.to_point() - origin;
            (local.x >= 0 && local.y >= 0)
                .then(|| TouchPoint::new(local.x as u16, local.y as u16))
        };

        match event {
            TouchEvent::Press(p) => translate(p).map(TouchEvent::Press),
            TouchEvent::Drag(p) => translate(p).map(TouchEvent::Drag),
        }
    }
}

impl Drawable for InstructionView<'_> {
    fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        let mut translated = display.translated(self.frame.top_left);

        if let Some(badge) = &self.badge {
            badge.draw(&mut translated)?;
        }
        if let Some(primary) = &self.primary_label {
            primary.draw(&mut translated)?;
        }
        if let Some(secondary) = &self.secondary_label {
            secondary.draw(&mut translated)?;
        }
        if let Some(button) = &self.action_button {
            button.draw(&mut translated)?;
        }

        Ok(())
    }

    fn bounds(&self) -> Rectangle {
        self.frame
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
}

impl Touchable for InstructionView<'_> {
    fn contains_point(&self, point: TouchPoint) -> bool {
        self.frame.contains(point.to_point())
    }

    /// Only the action button is interactive; every other child ignores
    /// touch input entirely.
    fn handle_touch(&mut self, event: TouchEvent) -> TouchResult {
        let Some(local) = self.to_local(event) else {
            return TouchResult::NotHandled;
        };

        let result = match self.action_button.as_mut() {
            Some(button) => button.handle_touch(local),
            None => return TouchResult::NotHandled,
        };

        if result == TouchResult::Tapped {
            trace!("action button tapped");
            if let Some(delegate) = self.delegate
                && let Some(button) = self.action_button.as_ref()
            {
                delegate.on_action_button_tapped(button);
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;
    use embedded_graphics::mock_display::MockDisplay;

    // Default fonts: title 10x20, description 9x15, badge 6x10. At 350px
    // both default strings fit on one line, so the title measures 22px
    // (20px glyphs + 2px line spacing) and the description 17px.
    fn bubble<'a>() -> InstructionView<'a> {
        InstructionView::new(350, InstructionDefaults::default())
    }

    struct TapRecorder {
        taps: Cell<usize>,
        last_bounds: Cell<Option<Rectangle>>,
    }

    impl TapRecorder {
        fn new() -> Self {
            Self {
                taps: Cell::new(0),
                last_bounds: Cell::new(None),
            }
        }
    }

    impl InstructionViewDelegate for TapRecorder {
        fn on_action_button_tapped(&self, button: &ActionButton) {
            self.taps.set(self.taps.get() + 1);
            self.last_bounds.set(Some(button.bounds()));
        }
    }

    #[test]
    fn starts_with_default_texts() {
        let view = bubble();
        assert_eq!(view.primary_text.as_str(), "Awesome action");
        assert_eq!(view.secondary_text.as_str(), "Tap here to do some awesome thing");
    }

    #[test]
    fn no_children_before_first_layout() {
        let view = bubble();
        assert!(view.badge().is_none());
        assert!(view.primary_label().is_none());
        assert!(view.secondary_label().is_none());
        assert!(view.action_button().is_none());
    }

    #[test]
    fn missing_badge_contributes_zero_height() {
        let mut view = bubble();
        view.layout();

        assert!(view.badge().is_none());
        assert_eq!(view.primary_label().unwrap().bounds().top_left.y, 16);
    }

    #[test]
    fn badge_offsets_the_title() {
        let mut view = bubble();
        view.set_badge_text(Some("NEW"));
        view.layout();

        let badge = view.badge().unwrap();
        assert_eq!(badge.bounds().size, Size::new(30, 16));
        assert_eq!(view.primary_label().unwrap().bounds().top_left.y, 32);
    }

    #[test]
    fn empty_badge_text_suppresses_the_badge() {
        let mut view = bubble();
        view.set_badge_text(Some(""));
        view.layout();

        assert!(view.badge().is_none());
        assert_eq!(view.primary_label().unwrap().bounds().top_left.y, 16);
    }

    #[test]
    fn vertical_offsets_follow_the_fixed_gaps() {
        let mut view = bubble();
        view.set_badge_text(Some("STEP 1"));
        view.set_button_text(Some("GOT IT"));
        view.layout();

        let badge_h = view.badge().unwrap().bounds().size.height as i32;
        let primary = view.primary_label().unwrap().bounds();
        let secondary = view.secondary_label().unwrap().bounds();
        let button = view.action_button().unwrap().bounds();

        assert_eq!(primary.top_left.y, badge_h + 16);
        assert_eq!(secondary.top_left.y, primary.top_left.y + primary.size.height as i32 + 8);
        assert_eq!(button.top_left.y, secondary.top_left.y + secondary.size.height as i32 + 24);
    }

    #[test]
    fn frame_height_sums_children_and_gaps() {
        let mut view = bubble();
        view.set_badge_text(Some("STEP 1"));
        view.set_button_text(Some("GOT IT"));
        view.layout();

        let badge_h = view.badge().unwrap().bounds().size.height;
        let primary_h = view.primary_label().unwrap().bounds().size.height;
        let secondary_h = view.secondary_label().unwrap().bounds().size.height;
        let button_h = view.action_button().unwrap().bounds().size.height;

        assert_eq!(
            view.frame().size.height,
            badge_h + primary_h + secondary_h + button_h + 16 + 8 + 24
        );
    }

    #[test]
    fn gaps_apply_even_without_optional_children() {
        let mut view = bubble();
        view.layout();

        // badge and button absent: 22 + 17 + 16 + 8 + 24
        assert_eq!(view.frame().size.height, 87);
    }

    #[test]
    fn off_left_placement_widens_the_content() {
        let mut view = bubble();
        view.set_frame(Rectangle::new(Point::new(-20, 0), Size::new(100, 0)));
        assert_eq!(view.usable_width(), 110);
    }

    #[test]
    fn off_right_placement_can_go_negative() {
        let mut view = bubble();
        view.set_frame(Rectangle::new(Point::new(300, 0), Size::new(100, 0)));
        assert_eq!(view.usable_width(), -100);

        // Negative width degrades to zero-width children, not a panic
        view.layout();
        assert_eq!(view.primary_label().unwrap().bounds().size.width, 0);
    }

    #[test]
    fn in_bounds_placement_subtracts_the_origin() {
        let mut view = bubble();
        view.set_frame(Rectangle::new(Point::new(40, 0), Size::new(200, 0)));
        assert_eq!(view.usable_width(), 160);
    }

    #[test]
    fn relayout_is_idempotent() {
        let mut view = bubble();
        view.set_badge_text(Some("STEP 1"));
        view.set_button_text(Some("GOT IT"));
        view.set_origin(Point::new(10, 20));

        view.layout();
        let first = (
            view.frame(),
            view.badge().unwrap().bounds(),
            view.primary_label().unwrap().bounds(),
            view.secondary_label().unwrap().bounds(),
            view.action_button().unwrap().bounds(),
        );

        view.layout();
        let second = (
            view.frame(),
            view.badge().unwrap().bounds(),
            view.primary_label().unwrap().bounds(),
            view.secondary_label().unwrap().bounds(),
            view.action_button().unwrap().bounds(),
        );

        assert_eq!(first, second);
    }

    #[test]
    fn tap_notifies_delegate_once_with_the_button() {
        let recorder = TapRecorder::new();
        let mut view = bubble();
        view.set_button_text(Some("GOT IT"));
        view.set_delegate(&recorder);
        view.layout();

        let button_bounds = view.action_button().unwrap().bounds();
        let center = button_bounds.center();
        let result = view.handle_touch(TouchEvent::Press(TouchPoint::new(
            center.x as u16,
            center.y as u16,
        )));

        assert_eq!(result, TouchResult::Tapped);
        assert_eq!(recorder.taps.get(), 1);
        assert_eq!(recorder.last_bounds.get(), Some(button_bounds));
    }

    #[test]
    fn tap_without_delegate_is_a_silent_noop() {
        let mut view = bubble();
        view.set_button_text(Some("GOT IT"));
        view.layout();

        let center = view.action_button().unwrap().bounds().center();
        let result = view.handle_touch(TouchEvent::Press(TouchPoint::new(
            center.x as u16,
            center.y as u16,
        )));

        assert_eq!(result, TouchResult::Tapped);
    }

    #[test]
    fn no_button_means_no_tap_path() {
        let recorder = TapRecorder::new();
        let mut view = bubble();
        view.set_delegate(&recorder);
        view.layout();

        let result = view.handle_touch(TouchEvent::Press(TouchPoint::new(5, 20)));
        assert_eq!(result, TouchResult::NotHandled);
        assert_eq!(recorder.taps.get(), 0);
    }

    #[test]
    fn labels_are_not_interactive() {
        let recorder = TapRecorder::new();
        let mut view = bubble();
        view.set_button_text(Some("GOT IT"));
        view.set_delegate(&recorder);
        view.layout();

        let title = view.primary_label().unwrap().bounds().center();
        let result = view.handle_touch(TouchEvent::Press(TouchPoint::new(
            title.x as u16,
            title.y as u16,
        )));

        assert_eq!(result, TouchResult::NotHandled);
        assert_eq!(recorder.taps.get(), 0);
    }

    #[test]
    fn all_four_children_exist_after_layout() {
        let mut view = bubble();
        view.set_badge_text(Some("STEP 1"));
        view.set_button_text(Some("GOT IT"));
        view.layout();

        assert!(view.badge().is_some());
        assert!(view.primary_label().is_some());
        assert!(view.secondary_label().is_some());
        assert!(view.action_button().is_some());
    }

    #[test]
    fn draw_renders_all_children() {
        let mut view = bubble();
        view.set_badge_text(Some("STEP 1"));
        view.set_button_text(Some("GOT IT"));
        view.badge_background = Some(crate::styling::COLOR_ACCENT);
        view.button_border_color = Some(crate::styling::COLOR_STROKE);
        view.button_border_width = 1;
        view.layout();

        let mut display = MockDisplay::<Rgb565>::new();
        display.set_allow_overdraw(true);
        display.set_allow_out_of_bounds_drawing(true);

        view.draw(&mut display).unwrap();
    }
}
