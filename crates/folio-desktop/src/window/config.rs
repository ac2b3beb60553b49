//! Window configuration for creation

use crate::math::{Point, Size};

/// Optional overrides applied when a window is first opened
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WindowConfig {
    /// Initial position (None = cascade from the settings default)
    pub position: Option<Point>,
    /// Initial size (None = settings default size)
    pub size: Option<Size>,
}
