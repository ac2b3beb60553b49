//! WASM exports for the desktop window manager
//!
//! This module provides wasm-bindgen exports for the DesktopSession,
//! allowing React to drive window state directly. App ids cross the
//! boundary as strings; unknown ids are logged and ignored.

use tracing::warn;
use wasm_bindgen::prelude::*;

use crate::app::{AppId, AppRegistry};
use crate::input::ResizeHandle;
use crate::math::{Point, Size};
use crate::session::DesktopSession;
use crate::settings::DesktopSettings;

/// Desktop controller for WASM - wraps DesktopSession with JS-friendly API
#[wasm_bindgen]
pub struct DesktopController {
    session: DesktopSession,
}

impl Default for DesktopController {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl DesktopController {
    /// Create a controller with the portfolio apps and default layout
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            session: DesktopSession::with_default_apps(),
        }
    }

    /// Create a controller with layout settings given as JSON
    #[wasm_bindgen]
    pub fn with_settings(settings_json: &str) -> Result<DesktopController, JsValue> {
        let session = DesktopSettings::from_json(settings_json)
            .and_then(|settings| DesktopSession::new(AppRegistry::portfolio(), settings))
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self { session })
    }

    // =========================================================================
    // Viewport
    // =========================================================================

    /// Resize the desktop viewport
    #[wasm_bindgen]
    pub fn resize(&mut self, width: f32, height: f32) {
        self.session.resize(width, height);
    }

    // =========================================================================
    // Windows
    // =========================================================================

    /// Open an app, or restore/focus its window
    #[wasm_bindgen]
    pub fn open_window(&mut self, app_id: &str) {
        if let Some(id) = parse_app(app_id) {
            self.session.open_window(id);
        }
    }

    /// Close a window
    #[wasm_bindgen]
    pub fn close_window(&mut self, app_id: &str) {
        if let Some(id) = parse_app(app_id) {
            self.session.close_window(id);
        }
    }

    /// Focus a window
    #[wasm_bindgen]
    pub fn focus_window(&mut self, app_id: &str) {
        if let Some(id) = parse_app(app_id) {
            self.session.focus_window(id);
        }
    }

    /// Minimize a window
    #[wasm_bindgen]
    pub fn minimize_window(&mut self, app_id: &str) {
        if let Some(id) = parse_app(app_id) {
            self.session.minimize_window(id);
        }
    }

    /// Maximize a window
    #[wasm_bindgen]
    pub fn maximize_window(&mut self, app_id: &str) {
        if let Some(id) = parse_app(app_id) {
            self.session.maximize_window(id);
        }
    }

    /// Restore a window
    #[wasm_bindgen]
    pub fn restore_window(&mut self, app_id: &str) {
        if let Some(id) = parse_app(app_id) {
            self.session.restore_window(id);
        }
    }

    /// Minimize every window
    #[wasm_bindgen]
    pub fn minimize_all_windows(&mut self) {
        self.session.minimize_all_windows();
    }

    /// Move a window
    #[wasm_bindgen]
    pub fn update_window_position(&mut self, app_id: &str, x: f32, y: f32) {
        if let Some(id) = parse_app(app_id) {
            self.session.update_window_position(id, Point::new(x, y));
        }
    }

    /// Resize a window
    #[wasm_bindgen]
    pub fn update_window_size(&mut self, app_id: &str, width: f32, height: f32) {
        if let Some(id) = parse_app(app_id) {
            self.session.update_window_size(id, Size::new(width, height));
        }
    }

    /// Get the focused window's app id
    #[wasm_bindgen]
    pub fn get_focused_window(&self) -> Option<String> {
        self.session.windows().focused().map(|id| id.to_string())
    }

    /// Get all window records as JSON, back to front
    #[wasm_bindgen]
    pub fn get_windows_json(&self) -> String {
        serde_json::to_string(&self.session.windows().windows_by_z())
            .unwrap_or_else(|_| "[]".to_string())
    }

    /// Get painted frames as JSON, back to front
    #[wasm_bindgen]
    pub fn get_frames_json(&self) -> String {
        serde_json::to_string(&self.session.frames()).unwrap_or_else(|_| "[]".to_string())
    }

    // =========================================================================
    // Desktop and taskbar
    // =========================================================================

    /// Get desktop icons as JSON
    #[wasm_bindgen]
    pub fn get_icons_json(&self) -> String {
        serde_json::to_string(&self.session.icons()).unwrap_or_else(|_| "[]".to_string())
    }

    /// Get taskbar buttons as JSON
    #[wasm_bindgen]
    pub fn get_taskbar_json(&self) -> String {
        serde_json::to_string(&self.session.taskbar_buttons())
            .unwrap_or_else(|_| "[]".to_string())
    }

    /// Single click on a desktop icon
    #[wasm_bindgen]
    pub fn click_icon(&mut self, app_id: &str) {
        if let Some(id) = parse_app(app_id) {
            self.session.click_icon(id);
        }
    }

    /// Double click on a desktop icon
    #[wasm_bindgen]
    pub fn double_click_icon(&mut self, app_id: &str) {
        if let Some(id) = parse_app(app_id) {
            self.session.double_click_icon(id);
        }
    }

    /// Click on empty desktop space
    #[wasm_bindgen]
    pub fn click_desktop(&mut self) {
        self.session.click_desktop();
    }

    /// Click on a taskbar button
    #[wasm_bindgen]
    pub fn click_taskbar(&mut self, app_id: &str) {
        if let Some(id) = parse_app(app_id) {
            self.session.click_taskbar(id);
        }
    }

    /// Click on the taskbar OS icon
    #[wasm_bindgen]
    pub fn click_os_icon(&mut self) -> bool {
        self.session.click_os_icon()
    }

    // =========================================================================
    // Gestures
    // =========================================================================

    /// Pointer down on a title bar
    #[wasm_bindgen]
    pub fn begin_drag(&mut self, app_id: &str, x: f32, y: f32) -> bool {
        parse_app(app_id)
            .map(|id| self.session.begin_drag(id, Point::new(x, y)))
            .unwrap_or(false)
    }

    /// Pointer down on a resize handle ("n", "se", ...)
    #[wasm_bindgen]
    pub fn begin_resize(&mut self, app_id: &str, handle: &str, x: f32, y: f32) -> bool {
        let Some(id) = parse_app(app_id) else {
            return false;
        };
        let handle: ResizeHandle = match serde_json::from_value(handle.into()) {
            Ok(handle) => handle,
            Err(_) => {
                warn!(handle, "ignoring unknown resize handle");
                return false;
            }
        };
        self.session.begin_resize(id, handle, Point::new(x, y))
    }

    /// Pointer move during a gesture; returns the preview rect as JSON
    #[wasm_bindgen]
    pub fn pointer_move(&self, x: f32, y: f32) -> Option<String> {
        self.session
            .pointer_move(Point::new(x, y))
            .and_then(|rect| serde_json::to_string(&rect).ok())
    }

    /// Pointer up, committing the gesture
    #[wasm_bindgen]
    pub fn pointer_up(&mut self, x: f32, y: f32) -> Option<String> {
        self.session
            .pointer_up(Point::new(x, y))
            .map(|id| id.to_string())
    }

    /// Abandon the current gesture
    #[wasm_bindgen]
    pub fn cancel_gesture(&mut self) {
        self.session.cancel_gesture();
    }
}

fn parse_app(app_id: &str) -> Option<AppId> {
    match app_id.parse() {
        Ok(id) => Some(id),
        Err(e) => {
            warn!(error = %e, "ignoring command");
            None
        }
    }
}
