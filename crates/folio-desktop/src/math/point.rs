//! Screen offsets

use serde::{Deserialize, Serialize};

/// Top-left offset of a window on the desktop
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Origin of the desktop surface
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    /// Create a new point
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Offset both axes by the same amount
    #[inline]
    pub fn offset(self, amount: f32) -> Self {
        Self::new(self.x + amount, self.y + amount)
    }
}

impl std::ops::Add for Point {
    type Output = Point;
    #[inline]
    fn add(self, other: Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }
}

impl std::ops::Sub for Point {
    type Output = Point;
    #[inline]
    fn sub(self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }
}
