//! Geometric primitives for canvas positioning.
//!
//! This module provides the small set of geometric types used to place graph
//! marks on a fixed-size canvas.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in canvas space
//! - [`Size`] - Width and height dimensions
//! - [`Bounds`] - A rectangular region defined by minimum and maximum coordinates
//!
//! # Coordinate System
//!
//! Stillgraph uses the SVG coordinate system:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! Node positions are supplied by the caller in this space and are never
//! transformed.

/// A 2D point representing a position in canvas coordinate space.
///
/// # Examples
///
/// ```
/// # use stillgraph_core::geometry::Point;
/// let node = Point::new(267.0, 200.0);
/// let label = node.offset_y(25.0);
/// assert_eq!(label.x(), 267.0);
/// assert_eq!(label.y(), 225.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Returns a new point moved down by `dy`.
    pub fn offset_y(self, dy: f32) -> Self {
        Self {
            x: self.x,
            y: self.y + dy,
        }
    }

    /// Calculates the midpoint between this point and another point
    pub fn midpoint(self, other: Point) -> Self {
        Self {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }

    /// Returns `true` if both coordinates are finite numbers.
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Represents the dimensions of a canvas or element.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }

    /// Returns the center of a region of this size anchored at the origin.
    pub fn center(self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// Returns `true` if both dimensions are finite and strictly positive.
    pub fn is_drawable(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Represents a rectangular region with minimum and maximum coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    /// Creates a new bounds from a top-left point and a size
    pub fn new_from_top_left(top_left: Point, size: Size) -> Self {
        Self {
            min_x: top_left.x,
            min_y: top_left.y,
            max_x: top_left.x + size.width,
            max_y: top_left.y + size.height,
        }
    }

    /// Returns `true` if the point lies inside the bounds, edges included.
    ///
    /// # Examples
    ///
    /// ```
    /// # use stillgraph_core::geometry::{Bounds, Point, Size};
    /// let canvas = Bounds::new_from_top_left(Point::default(), Size::new(800.0, 600.0));
    /// assert!(canvas.contains(Point::new(800.0, 0.0)));
    /// assert!(!canvas.contains(Point::new(-1.0, 10.0)));
    /// ```
    pub fn contains(self, point: Point) -> bool {
        point.x >= self.min_x
            && point.x <= self.max_x
            && point.y >= self.min_y
            && point.y <= self.max_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_new() {
        let point = Point::new(10.0, 20.0);
        assert_eq!(point.x(), 10.0);
        assert_eq!(point.y(), 20.0);
    }

    #[test]
    fn test_point_default() {
        let point = Point::default();
        assert_eq!(point.x(), 0.0);
        assert_eq!(point.y(), 0.0);
    }

    #[test]
    fn test_point_offset_y() {
        let point = Point::new(400.0, 300.0).offset_y(30.0);
        assert_eq!(point, Point::new(400.0, 330.0));
    }

    #[test]
    fn test_point_midpoint() {
        let mid = Point::new(0.0, 0.0).midpoint(Point::new(10.0, 20.0));
        assert_eq!(mid, Point::new(5.0, 10.0));
    }

    #[test]
    fn test_point_is_finite() {
        assert!(Point::new(1.0, 2.0).is_finite());
        assert!(!Point::new(f32::NAN, 2.0).is_finite());
        assert!(!Point::new(1.0, f32::INFINITY).is_finite());
    }

    #[test]
    fn test_size_center() {
        let center = Size::new(800.0, 600.0).center();
        assert_eq!(center, Point::new(400.0, 300.0));
    }

    #[test]
    fn test_size_is_drawable() {
        assert!(Size::new(800.0, 600.0).is_drawable());
        assert!(!Size::new(0.0, 600.0).is_drawable());
        assert!(!Size::new(800.0, -1.0).is_drawable());
        assert!(!Size::new(f32::NAN, 600.0).is_drawable());
    }

    #[test]
    fn test_bounds_new_from_top_left() {
        let bounds = Bounds::new_from_top_left(Point::new(10.0, 20.0), Size::new(30.0, 40.0));
        assert!(bounds.contains(Point::new(10.0, 20.0)));
        assert!(bounds.contains(Point::new(40.0, 60.0)));
        assert!(!bounds.contains(Point::new(9.9, 20.0)));
        assert!(!bounds.contains(Point::new(40.0, 60.1)));
    }

    #[test]
    fn test_bounds_contains_edges() {
        let bounds = Bounds::new_from_top_left(Point::default(), Size::new(100.0, 50.0));
        assert!(bounds.contains(Point::new(0.0, 0.0)));
        assert!(bounds.contains(Point::new(100.0, 50.0)));
        assert!(!bounds.contains(Point::new(100.1, 50.0)));
        assert!(!bounds.contains(Point::new(50.0, -0.1)));
    }
}

#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    fn point_strategy() -> impl Strategy<Value = Point> {
        (-1000.0f32..1000.0, -1000.0f32..1000.0).prop_map(|(x, y)| Point::new(x, y))
    }

    fn check_midpoint_is_between_points(p1: Point, p2: Point) -> Result<(), TestCaseError> {
        let mid = p1.midpoint(p2);
        prop_assert!(mid.x() >= p1.x().min(p2.x()) && mid.x() <= p1.x().max(p2.x()));
        prop_assert!(mid.y() >= p1.y().min(p2.y()) && mid.y() <= p1.y().max(p2.y()));
        Ok(())
    }

    fn check_midpoint_is_symmetric(p1: Point, p2: Point) -> Result<(), TestCaseError> {
        prop_assert_eq!(p1.midpoint(p2), p2.midpoint(p1));
        Ok(())
    }

    fn check_bounds_contains_top_left(p: Point) -> Result<(), TestCaseError> {
        let bounds = Bounds::new_from_top_left(p, Size::new(10.0, 10.0));
        prop_assert!(bounds.contains(p));
        Ok(())
    }

    proptest! {
        #[test]
        fn midpoint_is_between_points(p1 in point_strategy(), p2 in point_strategy()) {
            check_midpoint_is_between_points(p1, p2)?;
        }

        #[test]
        fn midpoint_is_symmetric(p1 in point_strategy(), p2 in point_strategy()) {
            check_midpoint_is_symmetric(p1, p2)?;
        }

        #[test]
        fn bounds_contains_top_left(p in point_strategy()) {
            check_bounds_contains_top_left(p)?;
        }
    }
}
