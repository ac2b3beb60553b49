//! Desktop session coordinating all components

use tracing::{debug, trace};

use crate::app::{AppId, AppRegistry};
use crate::desktop::{Desktop, DesktopIcon, Taskbar, TaskbarButton};
use crate::error::Result;
use crate::input::{GestureRouter, ResizeHandle};
use crate::math::{Point, Rect, Size};
use crate::settings::DesktopSettings;
use crate::view::{frame_at, render_frames, WindowFrame};
use crate::viewport::Viewport;
use crate::window::WindowManager;

/// Desktop session coordinating all desktop components
///
/// This is the main entry point for the front end, owning:
/// - App registry (icons, taskbar buttons, renderers)
/// - Window manager (lifecycle, focus, z-order)
/// - Desktop icon selection
/// - Gesture router (drag/resize in progress)
/// - Viewport size for maximized frames
///
/// Commands naming an app that is not registered are ignored.
pub struct DesktopSession<R = ()> {
    registry: AppRegistry<R>,
    windows: WindowManager,
    desktop: Desktop,
    gestures: GestureRouter,
    viewport: Viewport,
}

impl DesktopSession<()> {
    /// Session over the portfolio apps with default settings
    pub fn with_default_apps() -> Self {
        Self::build(AppRegistry::portfolio(), DesktopSettings::default())
    }
}

impl<R> DesktopSession<R> {
    /// Create a session, validating the settings
    pub fn new(registry: AppRegistry<R>, settings: DesktopSettings) -> Result<Self> {
        settings.validate()?;
        Ok(Self::build(registry, settings))
    }

    fn build(registry: AppRegistry<R>, settings: DesktopSettings) -> Self {
        Self {
            registry,
            windows: WindowManager::with_settings(settings),
            desktop: Desktop::new(),
            gestures: GestureRouter::new(),
            viewport: Viewport::default(),
        }
    }

    // =========================================================================
    // Read side
    // =========================================================================

    /// Window manager state
    pub fn windows(&self) -> &WindowManager {
        &self.windows
    }

    /// Registered apps
    pub fn registry(&self) -> &AppRegistry<R> {
        &self.registry
    }

    /// Current viewport
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Gesture router state
    pub fn gestures(&self) -> &GestureRouter {
        &self.gestures
    }

    /// Frames to paint, back to front
    pub fn frames(&self) -> Vec<WindowFrame> {
        render_frames(&self.windows, &self.registry, &self.viewport)
    }

    /// Topmost painted window under a point
    pub fn window_at(&self, point: Point) -> Option<AppId> {
        frame_at(&self.frames(), point)
    }

    /// Desktop icons
    pub fn icons(&self) -> Vec<DesktopIcon> {
        self.desktop.icons(&self.registry)
    }

    /// Taskbar buttons
    pub fn taskbar_buttons(&self) -> Vec<TaskbarButton> {
        Taskbar::new(&self.registry).buttons(&self.windows)
    }

    // =========================================================================
    // Viewport
    // =========================================================================

    /// Resize the viewport
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Viewport::new(width, height);
        debug!(width, height, "viewport resized");
    }

    /// Rectangle a maximized window fills
    pub fn work_area(&self) -> Rect {
        self.viewport
            .work_area(self.windows.settings().taskbar_height)
    }

    // =========================================================================
    // Window commands
    // =========================================================================

    /// Open an app, or restore/focus its existing window
    pub fn open_window(&mut self, id: AppId) {
        match self.registry.get(id) {
            Some(app) => self.windows.open_with(id, app.window_config()),
            None => trace!(app = %id, "open ignored, app not registered"),
        }
    }

    /// Close a window, abandoning any gesture on it
    pub fn close_window(&mut self, id: AppId) {
        self.gestures.cancel_for(id);
        self.windows.close(id);
    }

    /// Bring a window to the front
    pub fn focus_window(&mut self, id: AppId) {
        self.windows.focus(id);
    }

    /// Minimize a window
    pub fn minimize_window(&mut self, id: AppId) {
        self.gestures.cancel_for(id);
        self.windows.minimize(id);
    }

    /// Maximize a window
    pub fn maximize_window(&mut self, id: AppId) {
        self.gestures.cancel_for(id);
        self.windows.maximize(id);
    }

    /// Restore a minimized or maximized window
    pub fn restore_window(&mut self, id: AppId) {
        self.windows.restore(id);
    }

    /// Minimize every window
    pub fn minimize_all_windows(&mut self) {
        self.gestures.cancel();
        self.windows.minimize_all();
    }

    /// Set a window's normal-mode position
    pub fn update_window_position(&mut self, id: AppId, position: Point) {
        self.windows.update_position(id, position);
    }

    /// Set a window's normal-mode size
    pub fn update_window_size(&mut self, id: AppId, size: Size) {
        self.windows.update_size(id, size);
    }

    // =========================================================================
    // Desktop and taskbar
    // =========================================================================

    /// Single click on a desktop icon
    pub fn click_icon(&mut self, id: AppId) {
        self.desktop.click_icon(&self.registry, id);
    }

    /// Double click on a desktop icon
    pub fn double_click_icon(&mut self, id: AppId) {
        self.desktop
            .double_click_icon(&mut self.windows, &self.registry, id);
    }

    /// Click on empty desktop space
    pub fn click_desktop(&mut self) {
        self.desktop.click_empty();
    }

    /// Currently highlighted desktop icon
    pub fn selected_icon(&self) -> Option<AppId> {
        self.desktop.selected()
    }

    /// Click on a taskbar button
    pub fn click_taskbar(&mut self, id: AppId) {
        Taskbar::new(&self.registry).click(&mut self.windows, id);
    }

    /// Click on the taskbar OS icon
    pub fn click_os_icon(&mut self) -> bool {
        let changed = Taskbar::new(&self.registry).click_os_icon(&mut self.windows);
        if changed {
            self.gestures.cancel();
        }
        changed
    }

    // =========================================================================
    // Gestures
    // =========================================================================

    /// Pointer down on a window's title bar
    pub fn begin_drag(&mut self, id: AppId, pointer: Point) -> bool {
        self.gestures.begin_drag(&mut self.windows, id, pointer)
    }

    /// Pointer down on a window's resize handle
    pub fn begin_resize(&mut self, id: AppId, handle: ResizeHandle, pointer: Point) -> bool {
        self.gestures
            .begin_resize(&mut self.windows, id, handle, pointer)
    }

    /// Pointer move during a gesture
    pub fn pointer_move(&self, pointer: Point) -> Option<Rect> {
        self.gestures.pointer_move(&self.windows, pointer)
    }

    /// Pointer up, committing the gesture
    pub fn pointer_up(&mut self, pointer: Point) -> Option<AppId> {
        self.gestures.end(&mut self.windows, pointer)
    }

    /// Abandon the current gesture
    pub fn cancel_gesture(&mut self) {
        self.gestures.cancel();
    }
}
