//! Window dimensions

use serde::{Deserialize, Serialize};

/// Width and height of a window
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    /// Create a new size
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Check if either dimension is zero or negative
    #[inline]
    pub fn is_empty(self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Grow each dimension to at least `min`
    #[inline]
    pub fn clamp_min(self, min: Size) -> Self {
        Self::new(self.width.max(min.width), self.height.max(min.height))
    }
}
