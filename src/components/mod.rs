//! Styled components composing the instruction bubble

pub mod badge;
pub mod button;
pub mod text;

pub use badge::Badge;
pub use button::ActionButton;
pub use text::{MultiLineText, TextSize};
