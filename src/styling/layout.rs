//! Layout primitives for consistent spacing and dimensions
//!
//! Spacing constants, padding utilities, and border radii used by the
//! instruction bubble and its child elements.

// ============================================================================
// Spacing
// ============================================================================

/// Standard spacing scale for the bubble's vertical rhythm
///
/// The instruction bubble stacks its children with fixed gaps drawn from this
/// scale: `large` above the title, `medium` above the description, and
/// `xlarge` above the action button.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spacing {
    /// Minimal spacing (2px) - fine adjustments, line spacing
    pub tiny: u32,

    /// Small spacing (4px) - compact layouts
    pub small: u32,

    /// Medium spacing (8px) - gap above the description text
    pub medium: u32,

    /// Large spacing (16px) - gap above the title text
    pub large: u32,

    /// Extra large spacing (24px) - gap above the action button
    pub xlarge: u32,
}

impl Default for Spacing {
    fn default() -> Self {
        Self {
            tiny: 2,
            small: 4,
            medium: 8,
            large: 16,
            xlarge: 24,
        }
    }
}

// ============================================================================
// Border Radius
// ============================================================================

/// Border radius options for rounded corners
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BorderRadius {
    /// No rounding (0px) - sharp corners
    pub none: u32,

    /// Subtle rounding (2px) - the badge pill
    pub tiny: u32,

    /// Small rounding (4px)
    pub small: u32,

    /// Medium rounding (8px) - standard rounded corners
    pub medium: u32,

    /// Large rounding (16px) - pronounced curves
    pub large: u32,
}

impl Default for BorderRadius {
    fn default() -> Self {
        Self {
            none: 0,
            tiny: 2,
            small: 4,
            medium: 8,
            large: 16,
        }
    }
}

// ============================================================================
// Padding
// ============================================================================

/// Padding around an element (top, right, bottom, left)
///
/// # Examples
///
/// ```ignore
/// // Equal padding on all sides (8px)
/// let p = Padding::all(8);
///
/// // Different vertical (10px) and horizontal (16px), the button insets
/// let p = Padding::symmetric(10, 16);
///
/// // Calculate total space consumed
/// let total_width = p.horizontal();  // left + right
/// let total_height = p.vertical();   // top + bottom
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Padding {
    /// Top padding (pixels)
    pub top: u32,

    /// Right padding (pixels)
    pub right: u32,

    /// Bottom padding (pixels)
    pub bottom: u32,

    /// Left padding (pixels)
    pub left: u32,
}

impl Padding {
    /// Creates equal padding on all sides
    pub fn all(value: u32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Creates symmetric padding (vertical and horizontal)
    pub fn symmetric(vertical: u32, horizontal: u32) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    /// Creates padding with individual control for each side
    pub fn new(top: u32, right: u32, bottom: u32, left: u32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Returns total horizontal padding (left + right)
    pub fn horizontal(&self) -> u32 {
        self.left + self.right
    }

    /// Returns total vertical padding (top + bottom)
    pub fn vertical(&self) -> u32 {
        self.top + self.bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padding_totals() {
        let p = Padding::symmetric(10, 16);
        assert_eq!(p.horizontal(), 32);
        assert_eq!(p.vertical(), 20);

        let p = Padding::new(1, 2, 3, 4);
        assert_eq!(p.horizontal(), 6);
        assert_eq!(p.vertical(), 4);
    }

    #[test]
    fn spacing_matches_bubble_gaps() {
        let s = Spacing::default();
        assert_eq!(s.large, 16);
        assert_eq!(s.medium, 8);
        assert_eq!(s.xlarge, 24);
    }
}
