//! Styling primitives shared by the widgets
//!
//! Colors are RGB565 (16-bit) to match the displays the widgets are drawn on.
//! To convert from 8-bit RGB: R>>3, G>>2, B>>3

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

// ============================================================================
// Colors
// ============================================================================

/// Needle and frame black.
pub const COLOR_INK: Rgb565 = Rgb565::BLACK;

/// Second needle red.
pub const COLOR_SECOND_NEEDLE: Rgb565 = Rgb565::RED;

/// Progress fill - light green
pub const COLOR_FILL: Rgb565 = Rgb565::new(144 >> 3, 238 >> 2, 144 >> 3);

/// Progress background - white smoke
pub const COLOR_TRACK: Rgb565 = Rgb565::new(245 >> 3, 245 >> 2, 245 >> 3);

/// Progress border - dark gray
pub const COLOR_BORDER: Rgb565 = Rgb565::new(169 >> 3, 169 >> 2, 169 >> 3);

/// Label text
pub const COLOR_TEXT: Rgb565 = Rgb565::BLACK;

// ============================================================================
// Padding
// ============================================================================

/// Padding around an element (top, right, bottom, left)
///
/// # Examples
///
/// ```ignore
/// // Equal padding on all sides (2px)
/// let p = Padding::all(2);
///
/// // Calculate total space consumed
/// let total_width = p.horizontal();  // left + right
/// let total_height = p.vertical();   // top + bottom
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
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
    pub const fn all(value: u32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Creates padding with individual control for each side
    pub const fn new(top: u32, right: u32, bottom: u32, left: u32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Returns total horizontal padding (left + right)
    pub const fn horizontal(&self) -> u32 {
        self.left + self.right
    }

    /// Returns total vertical padding (top + bottom)
    pub const fn vertical(&self) -> u32 {
        self.top + self.bottom
    }

    /// Content area left inside `bounds` once the padding is removed.
    ///
    /// Padding larger than the bounds collapses the area to zero size.
    pub fn shrink(&self, bounds: Rectangle) -> Rectangle {
        Rectangle::new(
            bounds.top_left + Point::new(self.left as i32, self.top as i32),
            Size::new(
                bounds.size.width.saturating_sub(self.horizontal()),
                bounds.size.height.saturating_sub(self.vertical()),
            ),
        )
    }
}

// ============================================================================
// Text
// ============================================================================

/// Copy `text` into a fixed-capacity label, cutting at a character boundary.
pub fn truncated<const N: usize>(text: &str) -> heapless::String<N> {
    let mut label = heapless::String::new();
    for ch in text.chars() {
        if label.push(ch).is_err() {
            break;
        }
    }
    label
}
