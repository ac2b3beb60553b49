//! Gesture routing module
//!
//! Tracks an in-progress drag or resize and commits the final geometry to
//! the window manager when the pointer is released.

mod drag;
mod handle;
mod router;

pub use drag::DragState;
pub use handle::ResizeHandle;
pub use router::GestureRouter;

use crate::math::{Point, Rect, Size};

/// Calculate the new frame after dragging a resize handle by `delta`
///
/// Handles on the north and west edges move the anchor corner, so the
/// opposite edge stays put even when the size is clamped to `min`.
pub fn calculate_resize(
    handle: ResizeHandle,
    start_pos: Point,
    start_size: Size,
    delta: Point,
    min: Size,
) -> Rect {
    let mut width = start_size.width;
    let mut height = start_size.height;

    if handle.moves_east() {
        width = (start_size.width + delta.x).max(min.width);
    }
    if handle.moves_west() {
        width = (start_size.width - delta.x).max(min.width);
    }
    if handle.moves_south() {
        height = (start_size.height + delta.y).max(min.height);
    }
    if handle.moves_north() {
        height = (start_size.height - delta.y).max(min.height);
    }

    let x = if handle.moves_west() {
        start_pos.x + start_size.width - width
    } else {
        start_pos.x
    };
    let y = if handle.moves_north() {
        start_pos.y + start_size.height - height
    } else {
        start_pos.y
    };

    Rect::new(x, y, width, height)
}
