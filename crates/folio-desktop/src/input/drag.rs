//! In-progress gesture state

use crate::app::AppId;
use crate::math::{Point, Size};
use super::ResizeHandle;

/// Current gesture on a window
#[derive(Clone, Debug, PartialEq)]
pub enum DragState {
    /// Moving a window by its title bar
    Move {
        /// Window being moved
        window: AppId,
        /// Window position at start
        start_pos: Point,
        /// Pointer position at start
        start_pointer: Point,
    },
    /// Resizing a window by an edge or corner
    Resize {
        /// Window being resized
        window: AppId,
        /// Which resize handle
        handle: ResizeHandle,
        /// Window position at start
        start_pos: Point,
        /// Window size at start
        start_size: Size,
        /// Pointer position at start
        start_pointer: Point,
    },
}

impl DragState {
    /// Check if this is a move gesture
    #[inline]
    pub fn is_move(&self) -> bool {
        matches!(self, DragState::Move { .. })
    }

    /// Check if this is a resize gesture
    #[inline]
    pub fn is_resize(&self) -> bool {
        matches!(self, DragState::Resize { .. })
    }

    /// Window targeted by the gesture
    pub fn window(&self) -> AppId {
        match self {
            DragState::Move { window, .. } | DragState::Resize { window, .. } => *window,
        }
    }

    /// Pointer travel since the gesture began
    pub fn delta(&self, pointer: Point) -> Point {
        match self {
            DragState::Move { start_pointer, .. } | DragState::Resize { start_pointer, .. } => {
                pointer - *start_pointer
            }
        }
    }
}
