//! Resize handles on the window border

use serde::{Deserialize, Serialize};

/// Edge or corner grabbed to resize a window
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeHandle {
    N,
    S,
    E,
    W,
    NE,
    NW,
    SE,
    SW,
}

impl ResizeHandle {
    /// Whether the top edge follows the pointer
    #[inline]
    pub fn moves_north(self) -> bool {
        matches!(self, ResizeHandle::N | ResizeHandle::NE | ResizeHandle::NW)
    }

    /// Whether the bottom edge follows the pointer
    #[inline]
    pub fn moves_south(self) -> bool {
        matches!(self, ResizeHandle::S | ResizeHandle::SE | ResizeHandle::SW)
    }

    /// Whether the right edge follows the pointer
    #[inline]
    pub fn moves_east(self) -> bool {
        matches!(self, ResizeHandle::E | ResizeHandle::NE | ResizeHandle::SE)
    }

    /// Whether the left edge follows the pointer
    #[inline]
    pub fn moves_west(self) -> bool {
        matches!(self, ResizeHandle::W | ResizeHandle::NW | ResizeHandle::SW)
    }

    /// CSS cursor for this handle
    pub fn cursor(self) -> &'static str {
        match self {
            ResizeHandle::N | ResizeHandle::S => "ns-resize",
            ResizeHandle::E | ResizeHandle::W => "ew-resize",
            ResizeHandle::NE | ResizeHandle::SW => "nesw-resize",
            ResizeHandle::NW | ResizeHandle::SE => "nwse-resize",
        }
    }
}
