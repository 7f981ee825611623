//! Geometric primitives: Vector, Size, Rect

use std::ops::{Add, Neg, Sub};

/// A 2D vector in logical (CSS) pixels.
///
/// Used both for positions (page or element relative) and for derived
/// quantities such as displacement and velocity.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Vector {
    pub x: f32,
    pub y: f32,
}

impl Vector {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const ZERO: Vector = Vector { x: 0.0, y: 0.0 };

    pub fn abs(self) -> Self {
        Self {
            x: self.x.abs(),
            y: self.y.abs(),
        }
    }

    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Self) -> Self::Output {
        Vector::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Self) -> Self::Output {
        Vector::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Self::Output {
        Vector::new(-self.x, -self.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Axis-aligned rectangle, matching the shape of a DOM bounding rect.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn from_origin_size(origin: Vector, size: Size) -> Self {
        Self {
            left: origin.x,
            top: origin.y,
            width: size.width,
            height: size.height,
        }
    }

    pub fn top_left(&self) -> Vector {
        Vector::new(self.left, self.top)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    pub fn translate(&self, dx: f32, dy: f32) -> Self {
        Self {
            left: self.left + dx,
            top: self.top + dy,
            width: self.width,
            height: self.height,
        }
    }

    pub fn contains(&self, point: Vector) -> bool {
        point.x >= self.left
            && point.y >= self.top
            && point.x <= self.right()
            && point.y <= self.bottom()
    }

    /// Converts a page position into this rectangle's local frame.
    pub fn to_local(&self, point: Vector) -> Vector {
        point - self.top_left()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vector_arithmetic() {
        let a = Vector::new(3.0, -4.0);
        let b = Vector::new(1.0, 2.0);
        assert_eq!(a + b, Vector::new(4.0, -2.0));
        assert_eq!(a - b, Vector::new(2.0, -6.0));
        assert_eq!(-a, Vector::new(-3.0, 4.0));
        assert_eq!(a.abs(), Vector::new(3.0, 4.0));
        assert!(Vector::ZERO.is_zero());
        assert!(!Vector::new(f32::INFINITY, 0.0).is_finite());
    }

    #[test]
    fn rect_local_coordinates_subtract_top_left() {
        let rect = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(rect.to_local(Vector::new(50.0, 70.0)), Vector::new(40.0, 50.0));
        assert_eq!(rect.right(), 110.0);
        assert_eq!(rect.bottom(), 70.0);
    }

    #[test]
    fn rect_contains_is_inclusive() {
        let rect = Rect::from_origin_size(Vector::new(0.0, 0.0), Size::new(10.0, 10.0));
        assert!(rect.contains(Vector::new(10.0, 10.0)));
        assert!(!rect.contains(Vector::new(10.5, 0.0)));
        assert_eq!(rect.translate(5.0, 5.0).top_left(), Vector::new(5.0, 5.0));
    }

    #[test]
    fn empty_size() {
        assert!(Size::ZERO.is_empty());
        assert!(!Size::new(1.0, 1.0).is_empty());
    }
}
