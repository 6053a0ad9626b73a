//! Geometric primitives for text reconstruction.
//!
//! This module provides the point/vector maths and baseline segments used
//! by the chunk, line and word algorithms. Coordinates are in document
//! space, where y grows upward.

use serde::{Deserialize, Serialize};
use std::ops::Sub;

/// A 2D point (or vector) in document space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate
    pub x: f32,
    /// Y coordinate
    pub y: f32,
}

impl Point {
    /// Create a new point.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_locate::geometry::Point;
    ///
    /// let point = Point::new(10.0, 20.0);
    /// assert_eq!(point.x, 10.0);
    /// assert_eq!(point.y, 20.0);
    /// ```
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Length of the vector from the origin to this point.
    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Unit vector in the same direction.
    ///
    /// A zero vector has no direction; it is returned unchanged.
    pub fn normalize(&self) -> Point {
        let len = self.length();
        if len == 0.0 {
            return *self;
        }
        Point::new(self.x / len, self.y / len)
    }

    /// Dot product.
    pub fn dot(&self, other: &Point) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Z component of the 3D cross product of two in-plane vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_locate::geometry::Point;
    ///
    /// let a = Point::new(0.0, 5.0);
    /// let x_axis = Point::new(1.0, 0.0);
    /// assert_eq!(a.cross_z(&x_axis), -5.0);
    /// ```
    pub fn cross_z(&self, other: &Point) -> f32 {
        self.x * other.y - self.y * other.x
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// A straight segment between two points, e.g. a text baseline.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LineSegment {
    /// Start point
    pub start: Point,
    /// End point
    pub end: Point,
}

impl LineSegment {
    /// Create a new segment.
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_vector_ops() {
        let a = Point::new(3.0, 4.0);
        assert_eq!(a.length(), 5.0);

        let n = a.normalize();
        assert!((n.x - 0.6).abs() < 1e-6);
        assert!((n.y - 0.8).abs() < 1e-6);

        let b = Point::new(1.0, 2.0);
        assert_eq!(a.dot(&b), 11.0);
        assert_eq!(a - b, Point::new(2.0, 2.0));
    }

    #[test]
    fn test_normalize_zero_vector() {
        let zero = Point::default();
        assert_eq!(zero.normalize(), zero);
    }

    #[test]
    fn test_cross_z_sign() {
        let x_axis = Point::new(1.0, 0.0);
        assert_eq!(Point::new(0.0, 1.0).cross_z(&x_axis), -1.0);
        assert_eq!(x_axis.cross_z(&Point::new(0.0, 1.0)), 1.0);
    }
}
