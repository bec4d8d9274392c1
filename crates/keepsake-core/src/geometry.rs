//! Geometric primitives for card layout and positioning.
//!
//! This module provides the fundamental geometric types used throughout
//! keepsake for placing, sizing, and rotating card elements.
//!
//! # Coordinate System
//!
//! Keepsake uses a coordinate system consistent with screens and SVG:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! - **Origin**: Top-left corner at `(0, 0)`
//! - **X-axis**: Increases rightward
//! - **Y-axis**: Increases downward
//!
//! All values are in canvas-local units; a canvas is later scaled uniformly
//! to a viewport without changing any stored coordinates.

/// A 2D point representing a position in canvas coordinate space.
///
/// # Examples
///
/// ```
/// # use keepsake_core::geometry::Point;
/// let p1 = Point::new(10.0, 20.0);
/// let p2 = Point::new(5.0, 5.0);
///
/// let sum = p1.add(p2);
/// assert_eq!(sum.x, 15.0);
/// assert_eq!(sum.y, 25.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Adds another point to this point, returning a new point
    pub fn add(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Subtracts another point from this point, returning a new point
    pub fn sub(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Calculates the hypotenuse (Euclidean distance from origin)
    pub fn hypot(self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Distance between this point and another point
    pub fn distance_to(self, other: Point) -> f32 {
        other.sub(self).hypot()
    }

    /// Angle in degrees from this point to another point.
    ///
    /// Zero degrees points along +X; angles increase clockwise in screen
    /// coordinates (because +Y points down).
    pub fn angle_to_degrees(self, other: Point) -> f32 {
        let delta = other.sub(self);
        delta.y.atan2(delta.x).to_degrees()
    }

    /// Multiplies both coordinates by the given factor
    pub fn scale(self, factor: f32) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }

    /// Returns a new point with absolute values of both coordinates
    pub fn abs(self) -> Self {
        Self {
            x: self.x.abs(),
            y: self.y.abs(),
        }
    }
}

/// Represents the dimensions of an element or canvas with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns a new Size with the maximum width and height between this size and another
    pub fn max(self, other: Size) -> Self {
        Self {
            width: self.width.max(other.width),
            height: self.height.max(other.height),
        }
    }

    /// Multiplies both dimensions by the given factor
    pub fn scale(self, factor: f32) -> Self {
        Self {
            width: self.width * factor,
            height: self.height * factor,
        }
    }

    /// Width divided by height. Callers must ensure a non-zero height.
    pub fn aspect_ratio(self) -> f32 {
        self.width / self.height
    }
}

/// The placement of one element: top-left position, size, and rotation.
///
/// Rotation is stored in degrees and is unbounded; it is normalized only at
/// paint time (see [`Frame::paint_rotation`]). Rotation never affects the
/// stored `x`/`y`/`width`/`height`, and the canvas-containment clamp ignores
/// it: a rotated element's visual bounding box may extend outside the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Rotation in degrees, applied around the frame's center at paint time.
    pub rotation: f32,
}

impl Frame {
    /// Creates an axis-aligned frame with no rotation
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            rotation: 0.0,
        }
    }

    /// Builder-style rotation setter
    pub fn with_rotation(mut self, degrees: f32) -> Self {
        self.rotation = degrees;
        self
    }

    /// Top-left corner as a point
    pub fn origin(self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Width and height as a size
    pub fn size(self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Geometric center of the frame, ignoring rotation
    pub fn center(self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Clamps the frame's position so it lies inside the given canvas.
    ///
    /// The constraint is `0 <= x <= canvas.width - width` (and likewise for
    /// `y`). When the frame is larger than the canvas on an axis, the
    /// position pins to zero on that axis. Rotation is deliberately ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// # use keepsake_core::geometry::{Frame, Size};
    /// let frame = Frame::new(60.0, -10.0, 200.0, 60.0);
    /// let clamped = frame.clamp_to_canvas(Size::new(220.0, 476.0));
    /// assert_eq!(clamped.x, 20.0); // 220 - 200
    /// assert_eq!(clamped.y, 0.0);
    /// ```
    pub fn clamp_to_canvas(mut self, canvas: Size) -> Self {
        self.x = self.x.clamp(0.0, (canvas.width - self.width).max(0.0));
        self.y = self.y.clamp(0.0, (canvas.height - self.height).max(0.0));
        self
    }

    /// Rotation normalized into `[0, 360)` for paint-time transforms
    pub fn paint_rotation(self) -> f32 {
        self.rotation.rem_euclid(360.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_add_sub() {
        let p1 = Point::new(5.0, 8.0);
        let p2 = Point::new(2.0, 3.0);
        assert_eq!(p1.add(p2), Point::new(7.0, 11.0));
        assert_eq!(p1.sub(p2), Point::new(3.0, 5.0));
    }

    #[test]
    fn test_point_hypot() {
        assert_eq!(Point::new(3.0, 4.0).hypot(), 5.0);
        assert_eq!(Point::default().hypot(), 0.0);
    }

    #[test]
    fn test_point_distance() {
        let a = Point::new(1.0, 1.0);
        let b = Point::new(4.0, 5.0);
        assert_eq!(a.distance_to(b), 5.0);
    }

    #[test]
    fn test_angle_to_degrees() {
        let center = Point::new(10.0, 10.0);
        // Straight right: 0 degrees
        assert_eq!(center.angle_to_degrees(Point::new(20.0, 10.0)), 0.0);
        // Straight down: +90 degrees (screen coordinates)
        assert_eq!(center.angle_to_degrees(Point::new(10.0, 20.0)), 90.0);
        // Straight up: -90 degrees
        assert_eq!(center.angle_to_degrees(Point::new(10.0, 0.0)), -90.0);
    }

    #[test]
    fn test_size_max() {
        let max = Size::new(10.0, 20.0).max(Size::new(15.0, 18.0));
        assert_eq!(max, Size::new(15.0, 20.0));
    }

    #[test]
    fn test_size_aspect_ratio() {
        assert_eq!(Size::new(70.0, 70.0).aspect_ratio(), 1.0);
        assert_eq!(Size::new(100.0, 50.0).aspect_ratio(), 2.0);
    }

    #[test]
    fn test_frame_center() {
        let frame = Frame::new(10.0, 20.0, 40.0, 60.0);
        assert_eq!(frame.center(), Point::new(30.0, 50.0));
    }

    #[test]
    fn test_clamp_inside_is_noop() {
        let canvas = Size::new(220.0, 476.0);
        let frame = Frame::new(30.0, 50.0, 70.0, 70.0);
        assert_eq!(frame.clamp_to_canvas(canvas), frame);
    }

    #[test]
    fn test_clamp_each_edge() {
        let canvas = Size::new(220.0, 476.0);

        let left = Frame::new(-5.0, 100.0, 70.0, 70.0).clamp_to_canvas(canvas);
        assert_eq!((left.x, left.y), (0.0, 100.0));

        let right = Frame::new(300.0, 100.0, 70.0, 70.0).clamp_to_canvas(canvas);
        assert_eq!((right.x, right.y), (150.0, 100.0));

        let top = Frame::new(100.0, -20.0, 70.0, 70.0).clamp_to_canvas(canvas);
        assert_eq!((top.x, top.y), (100.0, 0.0));

        let bottom = Frame::new(100.0, 500.0, 70.0, 70.0).clamp_to_canvas(canvas);
        assert_eq!((bottom.x, bottom.y), (100.0, 406.0));
    }

    #[test]
    fn test_clamp_oversized_pins_to_origin() {
        let canvas = Size::new(220.0, 476.0);
        let frame = Frame::new(50.0, 50.0, 300.0, 600.0).clamp_to_canvas(canvas);
        assert_eq!((frame.x, frame.y), (0.0, 0.0));
    }

    #[test]
    fn test_clamp_ignores_rotation() {
        let canvas = Size::new(220.0, 476.0);
        // At 45 degrees the visual bounding box sticks out, but the stored
        // frame is what gets clamped.
        let frame = Frame::new(150.0, 0.0, 70.0, 70.0).with_rotation(45.0);
        let clamped = frame.clamp_to_canvas(canvas);
        assert_eq!((clamped.x, clamped.y), (150.0, 0.0));
        assert_eq!(clamped.rotation, 45.0);
    }

    #[test]
    fn test_paint_rotation_normalizes() {
        assert_eq!(Frame::new(0.0, 0.0, 50.0, 50.0).paint_rotation(), 0.0);
        assert_eq!(
            Frame::new(0.0, 0.0, 50.0, 50.0)
                .with_rotation(370.0)
                .paint_rotation(),
            10.0
        );
        assert_eq!(
            Frame::new(0.0, 0.0, 50.0, 50.0)
                .with_rotation(-5.0)
                .paint_rotation(),
            355.0
        );
        assert_eq!(
            Frame::new(0.0, 0.0, 50.0, 50.0)
                .with_rotation(-725.0)
                .paint_rotation(),
            355.0
        );
    }
}
