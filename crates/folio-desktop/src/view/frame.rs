//! Window frames in paint order

use serde::Serialize;

use crate::app::{AppId, AppRegistry};
use crate::math::{Point, Rect};
use crate::viewport::Viewport;
use crate::window::{WindowManager, WindowState};

/// A window as painted on screen
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowFrame {
    pub id: AppId,
    pub title: String,
    pub icon: String,
    pub state: WindowState,
    /// On-screen rectangle (work area when maximized)
    pub rect: Rect,
    pub z_index: u64,
    pub focused: bool,
    /// Whether drag and resize are enabled
    pub interactive: bool,
}

/// Frames for every visible, registered window, back to front
pub fn render_frames<R>(
    windows: &WindowManager,
    registry: &AppRegistry<R>,
    viewport: &Viewport,
) -> Vec<WindowFrame> {
    let focused = windows.focused();
    let work_area = viewport.work_area(windows.settings().taskbar_height);

    windows
        .windows_by_z()
        .into_iter()
        .filter(|w| w.is_visible())
        .filter_map(|w| {
            let app = registry.get(w.id)?;
            let maximized = w.state == WindowState::Maximized;
            Some(WindowFrame {
                id: w.id,
                title: app.title.clone(),
                icon: app.icon.clone(),
                state: w.state,
                rect: if maximized { work_area } else { w.rect() },
                z_index: w.z_index,
                focused: focused == Some(w.id),
                interactive: !maximized,
            })
        })
        .collect()
}

/// Topmost frame under a point
pub fn frame_at(frames: &[WindowFrame], point: Point) -> Option<AppId> {
    frames
        .iter()
        .rev()
        .find(|frame| frame.rect.contains(point))
        .map(|frame| frame.id)
}
