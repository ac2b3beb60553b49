//! Browser viewport dimensions

use crate::math::{Rect, Size};

/// Visible area of the desktop surface
///
/// Updated by the host on every browser resize, so maximized frames always
/// follow the current viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    /// Screen size in pixels
    pub screen_size: Size,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            screen_size: Size::new(1920.0, 1080.0),
        }
    }
}

impl Viewport {
    /// Create a new viewport with the given screen size
    pub fn new(screen_width: f32, screen_height: f32) -> Self {
        Self {
            screen_size: Size::new(screen_width, screen_height),
        }
    }

    /// Area available to windows above the taskbar
    pub fn work_area(&self, taskbar_height: f32) -> Rect {
        Rect::new(
            0.0,
            0.0,
            self.screen_size.width,
            (self.screen_size.height - taskbar_height).max(0.0),
        )
    }
}
