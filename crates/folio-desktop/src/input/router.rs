//! Gesture router state machine

use tracing::{debug, trace};

use crate::app::AppId;
use crate::math::{Point, Rect};
use crate::window::{Window, WindowManager, WindowState};
use super::{calculate_resize, DragState, ResizeHandle};

/// Routes pointer gestures on window chrome to the window manager
///
/// Geometry is only written back when the gesture ends; intermediate
/// pointer moves produce a preview rectangle for the front end to paint.
#[derive(Debug, Default)]
pub struct GestureRouter {
    /// Current drag state
    drag: Option<DragState>,
}

impl GestureRouter {
    /// Create a new gesture router
    pub fn new() -> Self {
        Self { drag: None }
    }

    /// Get current drag state
    #[inline]
    pub fn drag_state(&self) -> Option<&DragState> {
        self.drag.as_ref()
    }

    /// Check if a gesture is in progress
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Start moving a window and bring it to the front
    ///
    /// Refused for windows that are not open in normal mode.
    pub fn begin_drag(&mut self, windows: &mut WindowManager, id: AppId, pointer: Point) -> bool {
        let Some(start_pos) = normal_window(windows, id).map(|w| w.position) else {
            return false;
        };

        windows.focus(id);
        self.drag = Some(DragState::Move {
            window: id,
            start_pos,
            start_pointer: pointer,
        });
        trace!(app = %id, "drag started");
        true
    }

    /// Start resizing a window and bring it to the front
    ///
    /// Refused for windows that are not open in normal mode.
    pub fn begin_resize(
        &mut self,
        windows: &mut WindowManager,
        id: AppId,
        handle: ResizeHandle,
        pointer: Point,
    ) -> bool {
        let Some((start_pos, start_size)) =
            normal_window(windows, id).map(|w| (w.position, w.size))
        else {
            return false;
        };

        windows.focus(id);
        self.drag = Some(DragState::Resize {
            window: id,
            handle,
            start_pos,
            start_size,
            start_pointer: pointer,
        });
        trace!(app = %id, ?handle, "resize started");
        true
    }

    /// Preview frame for the current pointer position
    pub fn pointer_move(&self, windows: &WindowManager, pointer: Point) -> Option<Rect> {
        let drag = self.drag.as_ref()?;
        let window = windows.get(drag.window())?;
        let delta = drag.delta(pointer);

        Some(match drag {
            DragState::Move { start_pos, .. } => {
                Rect::from_pos_size(*start_pos + delta, window.size)
            }
            DragState::Resize {
                handle,
                start_pos,
                start_size,
                ..
            } => calculate_resize(
                *handle,
                *start_pos,
                *start_size,
                delta,
                windows.settings().min_size,
            ),
        })
    }

    /// Finish the gesture and commit the final geometry
    ///
    /// A resize writes the size first, then the position, since dragging a
    /// north or west handle shifts the anchor corner.
    pub fn end(&mut self, windows: &mut WindowManager, pointer: Point) -> Option<AppId> {
        let frame = self.pointer_move(windows, pointer);
        let drag = self.drag.take()?;
        let id = drag.window();
        let frame = frame?;

        if drag.is_resize() {
            windows.update_size(id, frame.size());
        }
        windows.update_position(id, frame.position());
        debug!(app = %id, rect = ?frame, "gesture committed");
        Some(id)
    }

    /// Abandon the current gesture without writing geometry
    pub fn cancel(&mut self) {
        self.drag = None;
    }

    /// Abandon the gesture if it targets `id`
    pub fn cancel_for(&mut self, id: AppId) {
        if self.drag.as_ref().is_some_and(|d| d.window() == id) {
            self.drag = None;
        }
    }
}

fn normal_window(windows: &WindowManager, id: AppId) -> Option<&Window> {
    windows.get(id).filter(|w| w.state == WindowState::Normal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Size;

    fn setup() -> (GestureRouter, WindowManager) {
        let mut windows = WindowManager::new();
        windows.open(AppId::About);
        windows.open(AppId::Wiki);
        (GestureRouter::new(), windows)
    }

    #[test]
    fn test_drag_focuses_and_commits_on_end() {
        let (mut router, mut windows) = setup();

        assert!(router.begin_drag(&mut windows, AppId::About, Point::new(150.0, 110.0)));
        assert!(router.is_dragging());
        assert_eq!(windows.focused(), Some(AppId::About));

        // Moves only preview
        let preview = router
            .pointer_move(&windows, Point::new(250.0, 160.0))
            .unwrap();
        assert_eq!(preview.position(), Point::new(200.0, 150.0));
        assert_eq!(windows.get(AppId::About).unwrap().position, Point::new(100.0, 100.0));

        let z_before = windows.get(AppId::About).unwrap().z_index;
        assert_eq!(
            router.end(&mut windows, Point::new(260.0, 170.0)),
            Some(AppId::About)
        );
        let window = windows.get(AppId::About).unwrap();
        assert_eq!(window.position, Point::new(210.0, 160.0));
        assert_eq!(window.z_index, z_before);
        assert_eq!(window.state, WindowState::Normal);
        assert!(!router.is_dragging());
    }

    #[test]
    fn test_resize_commits_size_and_position() {
        let (mut router, mut windows) = setup();

        assert!(router.begin_resize(
            &mut windows,
            AppId::About,
            ResizeHandle::W,
            Point::new(100.0, 300.0),
        ));
        router.end(&mut windows, Point::new(50.0, 320.0));

        let window = windows.get(AppId::About).unwrap();
        assert_eq!(window.position, Point::new(50.0, 100.0));
        assert_eq!(window.size, Size::new(850.0, 600.0));
    }

    #[test]
    fn test_gesture_refused_when_maximized() {
        let (mut router, mut windows) = setup();
        windows.maximize(AppId::About);
        let z_before = windows.get(AppId::About).unwrap().z_index;

        assert!(!router.begin_drag(&mut windows, AppId::About, Point::ORIGIN));
        assert!(!router.begin_resize(
            &mut windows,
            AppId::About,
            ResizeHandle::SE,
            Point::ORIGIN,
        ));
        assert!(!router.is_dragging());
        assert_eq!(windows.get(AppId::About).unwrap().z_index, z_before);
    }

    #[test]
    fn test_gesture_refused_when_minimized_or_closed() {
        let (mut router, mut windows) = setup();
        windows.minimize(AppId::Wiki);

        assert!(!router.begin_drag(&mut windows, AppId::Wiki, Point::ORIGIN));
        assert!(!router.begin_drag(&mut windows, AppId::Blog, Point::ORIGIN));
    }

    #[test]
    fn test_cancel_discards_geometry() {
        let (mut router, mut windows) = setup();
        router.begin_drag(&mut windows, AppId::Wiki, Point::new(0.0, 0.0));
        router.cancel();

        assert_eq!(router.end(&mut windows, Point::new(500.0, 500.0)), None);
        assert_eq!(windows.get(AppId::Wiki).unwrap().position, Point::new(130.0, 130.0));
    }

    #[test]
    fn test_end_after_window_closed() {
        let (mut router, mut windows) = setup();
        router.begin_drag(&mut windows, AppId::Wiki, Point::ORIGIN);
        windows.close(AppId::Wiki);

        assert_eq!(router.end(&mut windows, Point::new(10.0, 10.0)), None);
        assert!(!router.is_dragging());
        assert!(!windows.is_open(AppId::Wiki));
    }

    #[test]
    fn test_cancel_for_other_window_keeps_gesture() {
        let (mut router, mut windows) = setup();
        router.begin_drag(&mut windows, AppId::Wiki, Point::ORIGIN);

        router.cancel_for(AppId::About);
        assert!(router.is_dragging());

        router.cancel_for(AppId::Wiki);
        assert!(!router.is_dragging());
    }
}
