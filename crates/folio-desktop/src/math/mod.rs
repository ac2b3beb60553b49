//! Geometry types for window placement
//!
//! Coordinates are CSS pixels relative to the top-left of the desktop surface.

mod point;
mod rect;
mod size;

pub use point::Point;
pub use rect::Rect;
pub use size::Size;
