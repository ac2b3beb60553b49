//! Window manager for lifecycle, display modes and z-order

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::app::AppId;
use crate::math::{Point, Size};
use crate::settings::DesktopSettings;
use super::{Window, WindowConfig, WindowState};

/// Window manager handling window lifecycle, z-order, and focus
///
/// Holds at most one window per `AppId`. Every operation is synchronous and
/// infallible: commands naming a window that is not open are ignored.
pub struct WindowManager {
    /// Open windows by application
    windows: HashMap<AppId, Window>,
    /// Next z-index value, never reused within a session
    next_z: u64,
    /// Placement defaults for new windows
    settings: DesktopSettings,
}

impl Default for WindowManager {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowManager {
    /// Create a new window manager with default settings
    pub fn new() -> Self {
        Self::with_settings(DesktopSettings::default())
    }

    /// Create a new window manager with the given placement settings
    pub fn with_settings(settings: DesktopSettings) -> Self {
        Self {
            windows: HashMap::new(),
            next_z: 1,
            settings,
        }
    }

    /// Placement settings in use
    pub fn settings(&self) -> &DesktopSettings {
        &self.settings
    }

    /// Open a window with default geometry
    pub fn open(&mut self, id: AppId) {
        self.open_with(id, WindowConfig::default());
    }

    /// Open a window, or bring an already open one to the front
    ///
    /// `config` only applies when the window is created. An open but
    /// minimized window is restored; a visible one is focused.
    pub fn open_with(&mut self, id: AppId, config: WindowConfig) {
        match self.windows.get(&id).map(|w| w.state) {
            Some(WindowState::Minimized) => self.restore(id),
            Some(_) => self.focus(id),
            None => self.create(id, config),
        }
    }

    fn create(&mut self, id: AppId, config: WindowConfig) {
        let position = config.position.unwrap_or_else(|| {
            let occupied: Vec<Point> = self.windows.values().map(|w| w.position).collect();
            self.settings.cascade_position(&occupied)
        });
        let size = config
            .size
            .unwrap_or(self.settings.default_size)
            .clamp_min(self.settings.min_size);
        let z_index = self.take_z();

        debug!(app = %id, ?position, ?size, z_index, "window opened");
        self.windows.insert(
            id,
            Window {
                id,
                state: WindowState::Normal,
                position,
                size,
                z_index,
            },
        );
    }

    /// Close a window
    pub fn close(&mut self, id: AppId) {
        if self.windows.remove(&id).is_some() {
            debug!(app = %id, "window closed");
        } else {
            trace!(app = %id, "close ignored, window not open");
        }
    }

    /// Focus a window (brings to top)
    pub fn focus(&mut self, id: AppId) {
        if !self.windows.contains_key(&id) {
            trace!(app = %id, "focus ignored, window not open");
            return;
        }

        let z_index = self.take_z();
        if let Some(window) = self.windows.get_mut(&id) {
            window.z_index = z_index;
            debug!(app = %id, z_index, "window focused");
        }
    }

    /// Minimize a window, keeping its geometry and z-index
    pub fn minimize(&mut self, id: AppId) {
        if let Some(window) = self.windows.get_mut(&id) {
            window.state = WindowState::Minimized;
            debug!(app = %id, "window minimized");
        }
    }

    /// Maximize a window
    ///
    /// Stored geometry is left alone; the maximized frame is derived from the
    /// viewport when rendering. A minimized window has to be restored first.
    pub fn maximize(&mut self, id: AppId) {
        if let Some(window) = self.windows.get_mut(&id) {
            if window.state == WindowState::Minimized {
                trace!(app = %id, "maximize ignored, window minimized");
                return;
            }
            window.state = WindowState::Maximized;
            debug!(app = %id, "window maximized");
        }
    }

    /// Return a minimized or maximized window to normal and focus it
    pub fn restore(&mut self, id: AppId) {
        let Some(window) = self.windows.get_mut(&id) else {
            trace!(app = %id, "restore ignored, window not open");
            return;
        };
        if window.state == WindowState::Normal {
            return;
        }

        window.state = WindowState::Normal;
        debug!(app = %id, "window restored");
        self.focus(id);
    }

    /// Minimize every visible window
    ///
    /// Returns how many windows changed state.
    pub fn minimize_all(&mut self) -> usize {
        let mut count = 0;
        for window in self.windows.values_mut().filter(|w| w.is_visible()) {
            window.state = WindowState::Minimized;
            count += 1;
        }
        if count > 0 {
            debug!(count, "all windows minimized");
        }
        count
    }

    /// Move a window without touching its state or z-index
    pub fn update_position(&mut self, id: AppId, position: Point) {
        if let Some(window) = self.windows.get_mut(&id) {
            window.position = position;
        }
    }

    /// Resize a window without touching its state or z-index
    ///
    /// Sizes below the configured minimum are clamped up.
    pub fn update_size(&mut self, id: AppId, size: Size) {
        let min = self.settings.min_size;
        if let Some(window) = self.windows.get_mut(&id) {
            window.size = size.clamp_min(min);
        }
    }

    /// Get a window by application
    pub fn get(&self, id: AppId) -> Option<&Window> {
        self.windows.get(&id)
    }

    /// Check if an application has an open window
    pub fn is_open(&self, id: AppId) -> bool {
        self.windows.contains_key(&id)
    }

    /// The topmost visible window
    pub fn focused(&self) -> Option<AppId> {
        self.windows
            .values()
            .filter(|w| w.is_visible())
            .max_by_key(|w| w.z_index)
            .map(|w| w.id)
    }

    /// Check if any window is painted
    pub fn has_visible_windows(&self) -> bool {
        self.windows.values().any(|w| w.is_visible())
    }

    /// Get windows sorted by z-index (back to front)
    pub fn windows_by_z(&self) -> Vec<&Window> {
        let mut windows: Vec<&Window> = self.windows.values().collect();
        windows.sort_by_key(|w| w.z_index);
        windows
    }

    /// Get all windows
    pub fn all_windows(&self) -> impl Iterator<Item = &Window> {
        self.windows.values()
    }

    /// Get the number of open windows
    pub fn count(&self) -> usize {
        self.windows.len()
    }

    fn take_z(&mut self) -> u64 {
        let z = self.next_z;
        self.next_z += 1;
        z
    }
}
