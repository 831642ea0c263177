//! showcase-rs - instruction bubbles for guided-tour overlays on embedded displays
//!
//! This crate provides the informational half of a feature-showcase overlay:
//! a bubble that stacks a badge, a title, a description, and an optional
//! call-to-action button, laid out against a dynamically measured width.
//!
//! The crate is built on `embedded-graphics` and provides:
//! - Core traits for drawable and touchable elements
//! - Styled components (badge, wrapped text, action button)
//! - A styling system (colors, spacing, padding, themes)
//! - [`InstructionView`], the bubble itself, with a delegate callback for
//!   action-button taps

#![cfg_attr(not(test), no_std)]

pub mod components;
pub mod core;
pub mod instruction;
pub mod styling;

// Re-export commonly used items
pub use components::{ActionButton, Badge, MultiLineText, TextSize};
pub use self::core::{
    DirtyRegion, Drawable, Interactive, TouchEvent, TouchPoint, TouchResult, Touchable,
};
pub use instruction::{InstructionView, InstructionViewDelegate};
pub use styling::{
    BorderRadius, ColorPalette, InstructionDefaults, Padding, Spacing, Style, Theme,
};
