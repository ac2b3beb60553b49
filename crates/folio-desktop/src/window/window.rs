//! Window record and display state

use serde::{Deserialize, Serialize};

use crate::app::AppId;
use crate::math::{Point, Rect, Size};

/// Display mode of an open window
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowState {
    #[default]
    Normal,
    Minimized,
    Maximized,
}

/// An open window on the desktop
///
/// `position` and `size` hold the normal-mode geometry. They are kept as-is
/// while the window is minimized or maximized so restoring is lossless.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Window {
    /// Hosted application
    pub id: AppId,
    /// Current display mode
    pub state: WindowState,
    /// Top-left offset in normal mode
    pub position: Point,
    /// Size in normal mode
    pub size: Size,
    /// Stacking order (higher = on top)
    pub z_index: u64,
}

impl Window {
    /// Normal-mode bounding rectangle
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.position, self.size)
    }

    /// Whether the window is painted at all
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.state != WindowState::Minimized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_window() -> Window {
        Window {
            id: AppId::Blog,
            state: WindowState::Normal,
            position: Point::new(100.0, 100.0),
            size: Size::new(800.0, 600.0),
            z_index: 1,
        }
    }

    #[test]
    fn test_window_rect() {
        let w = create_test_window();
        let r = w.rect();
        assert!((r.x - 100.0).abs() < 0.001);
        assert!((r.y - 100.0).abs() < 0.001);
        assert!((r.width - 800.0).abs() < 0.001);
        assert!((r.height - 600.0).abs() < 0.001);
    }

    #[test]
    fn test_window_visibility() {
        let mut w = create_test_window();
        assert!(w.is_visible());

        w.state = WindowState::Maximized;
        assert!(w.is_visible());

        w.state = WindowState::Minimized;
        assert!(!w.is_visible());
    }

    #[test]
    fn test_window_json_shape() {
        let json = serde_json::to_value(create_test_window()).unwrap();
        assert_eq!(json["id"], "blog");
        assert_eq!(json["state"], "normal");
        assert_eq!(json["zIndex"], 1);
        assert_eq!(json["size"]["width"], 800.0);
    }
}
