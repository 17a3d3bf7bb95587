//! Geometry kernel shared by the widgets
//!
//! Pure helpers for turning polar coordinates into display points and for
//! fitting shapes inside widget bounds. Nothing here can fail: degenerate
//! input (zero-size bounds, zero radius) produces degenerate output.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

/// A point with sub-pixel precision.
///
/// Needle geometry is computed in floating point and only snapped to the
/// pixel grid when a drawing command is issued.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointF {
    pub x: f32,
    pub y: f32,
}

impl PointF {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Round to the nearest pixel.
    pub fn to_point(self) -> Point {
        Point::new(libm::roundf(self.x) as i32, libm::roundf(self.y) as i32)
    }
}

impl From<Point> for PointF {
    fn from(point: Point) -> Self {
        Self::new(point.x as f32, point.y as f32)
    }
}

/// Exact center of a rectangle.
///
/// Unlike [`Rectangle::center`] this keeps the half-pixel for even sizes.
pub fn center_of(bounds: &Rectangle) -> PointF {
    PointF::new(
        bounds.top_left.x as f32 + bounds.size.width as f32 / 2.0,
        bounds.top_left.y as f32 + bounds.size.height as f32 / 2.0,
    )
}

/// Convert an angle on an ellipse of the given radii into a point.
///
/// `x = radius_x * cos(angle) + center.x`, `y = radius_y * sin(angle) + center.y`.
/// The y axis points down, so positive angles turn clockwise on screen.
pub fn angle_to_point(center: PointF, radius_x: f32, radius_y: f32, angle: f32) -> PointF {
    PointF::new(
        radius_x * libm::cosf(angle) + center.x,
        radius_y * libm::sinf(angle) + center.y,
    )
}

/// Shrink a rectangle symmetrically by fractions of its width and height.
///
/// `fraction_x` of the width is removed from both the left and the right
/// side, `fraction_y` of the height from the top and the bottom.
pub fn inset_rect(bounds: Rectangle, fraction_x: f32, fraction_y: f32) -> Rectangle {
    let width = bounds.size.width;
    let height = bounds.size.height;

    let dx = (libm::roundf(width as f32 * fraction_x) as u32).min(width / 2);
    let dy = (libm::roundf(height as f32 * fraction_y) as u32).min(height / 2);

    Rectangle::new(
        bounds.top_left + Point::new(dx as i32, dy as i32),
        Size::new(width - 2 * dx, height - 2 * dy),
    )
}

/// Rectangle of the given size centered on a point.
pub fn centered_rect(center: PointF, size: Size) -> Rectangle {
    let top_left = PointF::new(
        center.x - size.width as f32 / 2.0,
        center.y - size.height as f32 / 2.0,
    );
    Rectangle::new(top_left.to_point(), size)
}
