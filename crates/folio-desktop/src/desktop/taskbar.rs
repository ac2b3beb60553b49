//! Taskbar buttons

use serde::Serialize;
use tracing::{debug, trace};

use crate::app::{AppId, AppRegistry};
use crate::window::{WindowManager, WindowState};

/// Visual state of a taskbar button
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonStatus {
    /// Window open and painted
    Open,
    /// Window open but minimized
    Minimized,
    /// No window
    Closed,
}

/// A taskbar button as shown to the user
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TaskbarButton {
    pub id: AppId,
    pub title: String,
    pub icon: String,
    pub status: ButtonStatus,
    pub focused: bool,
}

/// Taskbar listing every registered app
pub struct Taskbar<'a, R = ()> {
    registry: &'a AppRegistry<R>,
}

impl<'a, R> Taskbar<'a, R> {
    /// Create a taskbar over a registry
    pub fn new(registry: &'a AppRegistry<R>) -> Self {
        Self { registry }
    }

    /// One button per registered app, open or not
    pub fn buttons(&self, windows: &WindowManager) -> Vec<TaskbarButton> {
        let focused = windows.focused();
        self.registry
            .iter()
            .map(|app| TaskbarButton {
                id: app.id,
                title: app.title.clone(),
                icon: app.icon.clone(),
                status: status_of(windows, app.id),
                focused: focused == Some(app.id),
            })
            .collect()
    }

    /// Open, restore or focus the app behind a button
    pub fn click(&self, windows: &mut WindowManager, id: AppId) {
        let Some(app) = self.registry.get(id) else {
            trace!(app = %id, "taskbar click ignored, app not registered");
            return;
        };

        match status_of(windows, id) {
            ButtonStatus::Closed => windows.open_with(id, app.window_config()),
            ButtonStatus::Minimized => windows.restore(id),
            ButtonStatus::Open => windows.focus(id),
        }
    }

    /// Show the desktop by minimizing every window
    ///
    /// Does nothing when no window is visible. Returns whether any window
    /// changed state.
    pub fn click_os_icon(&self, windows: &mut WindowManager) -> bool {
        if !windows.has_visible_windows() {
            trace!("show desktop ignored, nothing visible");
            return false;
        }
        let count = windows.minimize_all();
        debug!(count, "show desktop");
        true
    }
}

fn status_of(windows: &WindowManager, id: AppId) -> ButtonStatus {
    match windows.get(id).map(|w| w.state) {
        None => ButtonStatus::Closed,
        Some(WindowState::Minimized) => ButtonStatus::Minimized,
        Some(_) => ButtonStatus::Open,
    }
}
