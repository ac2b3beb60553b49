//! Integration tests for DesktopSession
//!
//! These tests verify the full desktop workflow including:
//! - Window lifecycle through desktop icons and the taskbar
//! - Display mode round trips (minimize/maximize/restore)
//! - Z-order and focus invariants over long command sequences
//! - Drag and resize gestures

use std::collections::HashSet;

use folio_desktop::{
    AppId, AppRegistry, ButtonStatus, DesktopSession, DesktopSettings, Point, Rect,
    ResizeHandle, Size, WindowManager, WindowState,
};

fn session() -> DesktopSession {
    let mut session = DesktopSession::with_default_apps();
    session.resize(1920.0, 1080.0);
    session
}

fn z(session: &DesktopSession, id: AppId) -> u64 {
    session.windows().get(id).unwrap().z_index
}

// =============================================================================
// End-to-end scenario
// =============================================================================

#[test]
fn test_desktop_scenario() {
    let mut session = session();

    session.open_window(AppId::About);
    assert_eq!(session.windows().count(), 1);
    let about = session.windows().get(AppId::About).unwrap();
    assert_eq!(about.state, WindowState::Normal);
    assert_eq!(about.z_index, 1);

    session.open_window(AppId::Wiki);
    assert_eq!(session.windows().count(), 2);
    assert_eq!(z(&session, AppId::Wiki), 2);

    session.focus_window(AppId::About);
    assert_eq!(z(&session, AppId::About), 3);
    assert_eq!(z(&session, AppId::Wiki), 2);

    session.minimize_window(AppId::Wiki);
    assert_eq!(
        session.windows().get(AppId::Wiki).unwrap().state,
        WindowState::Minimized
    );
    let about = session.windows().get(AppId::About).unwrap();
    assert_eq!(about.state, WindowState::Normal);
    assert_eq!(about.z_index, 3);

    session.click_taskbar(AppId::Wiki);
    let wiki = session.windows().get(AppId::Wiki).unwrap();
    assert_eq!(wiki.state, WindowState::Normal);
    assert_eq!(wiki.z_index, 4);

    session.close_window(AppId::About);
    assert_eq!(session.windows().count(), 1);
    assert!(session.windows().is_open(AppId::Wiki));
    assert!(!session.windows().is_open(AppId::About));
}

#[test]
fn test_icon_and_taskbar_flow() {
    let mut session = session();

    session.click_icon(AppId::Blog);
    assert_eq!(session.selected_icon(), Some(AppId::Blog));
    session.double_click_icon(AppId::Blog);
    session.click_desktop();
    assert_eq!(session.selected_icon(), None);
    assert!(session.windows().is_open(AppId::Blog));

    let buttons = session.taskbar_buttons();
    assert_eq!(buttons.len(), 5);
    let blog = buttons.iter().find(|b| b.id == AppId::Blog).unwrap();
    assert_eq!(blog.status, ButtonStatus::Open);
    assert!(blog.focused);

    assert!(session.click_os_icon());
    let blog = session
        .taskbar_buttons()
        .into_iter()
        .find(|b| b.id == AppId::Blog)
        .unwrap();
    assert_eq!(blog.status, ButtonStatus::Minimized);
    assert!(session.frames().is_empty());

    // Nothing visible: no state write
    let before = session.windows().get(AppId::Blog).unwrap().clone();
    assert!(!session.click_os_icon());
    assert_eq!(session.windows().get(AppId::Blog).unwrap(), &before);
}

// =============================================================================
// Display modes
// =============================================================================

#[test]
fn test_maximize_restore_is_lossless() {
    let mut session = session();
    session.open_window(AppId::Portfolio);
    session.update_window_position(AppId::Portfolio, Point::new(321.0, 123.0));
    session.update_window_size(AppId::Portfolio, Size::new(777.0, 555.0));

    session.maximize_window(AppId::Portfolio);
    let frames = session.frames();
    assert_eq!(frames[0].rect, Rect::new(0.0, 0.0, 1920.0, 1032.0));
    assert!(!frames[0].interactive);
    assert!(!session.begin_drag(AppId::Portfolio, Point::new(10.0, 10.0)));

    // Viewport changes while maximized are picked up on the next render
    session.resize(1280.0, 800.0);
    assert_eq!(session.frames()[0].rect, Rect::new(0.0, 0.0, 1280.0, 752.0));

    session.restore_window(AppId::Portfolio);
    let window = session.windows().get(AppId::Portfolio).unwrap();
    assert_eq!(window.state, WindowState::Normal);
    assert_eq!(window.position, Point::new(321.0, 123.0));
    assert_eq!(window.size, Size::new(777.0, 555.0));
    assert_eq!(
        session.frames()[0].rect,
        Rect::new(321.0, 123.0, 777.0, 555.0)
    );
}

#[test]
fn test_minimize_restore_is_lossless() {
    let mut session = session();
    session.open_window(AppId::Commission);
    let before = session.windows().get(AppId::Commission).unwrap().clone();

    session.minimize_window(AppId::Commission);
    assert!(session.frames().is_empty());
    assert_eq!(session.window_at(Point::new(200.0, 200.0)), None);

    session.restore_window(AppId::Commission);
    let after = session.windows().get(AppId::Commission).unwrap();
    assert_eq!(after.state, WindowState::Normal);
    assert_eq!(after.position, before.position);
    assert_eq!(after.size, before.size);
}

#[test]
fn test_reopen_after_close_is_fresh() {
    let mut session = session();
    session.open_window(AppId::About);
    let fresh = session.windows().get(AppId::About).unwrap().clone();

    session.update_window_position(AppId::About, Point::new(600.0, 400.0));
    session.maximize_window(AppId::About);
    session.close_window(AppId::About);
    session.open_window(AppId::About);

    let reopened = session.windows().get(AppId::About).unwrap();
    assert_eq!(reopened.state, WindowState::Normal);
    assert_eq!(reopened.position, fresh.position);
    assert_eq!(reopened.size, fresh.size);
}

// =============================================================================
// Gestures
// =============================================================================

#[test]
fn test_drag_and_resize() {
    let mut session = session();
    session.open_window(AppId::About);
    session.open_window(AppId::Wiki);

    assert!(session.begin_drag(AppId::About, Point::new(200.0, 110.0)));
    assert_eq!(session.windows().focused(), Some(AppId::About));
    let preview = session.pointer_move(Point::new(220.0, 130.0)).unwrap();
    assert_eq!(preview.position(), Point::new(120.0, 120.0));
    assert_eq!(session.pointer_up(Point::new(300.0, 210.0)), Some(AppId::About));
    assert_eq!(
        session.windows().get(AppId::About).unwrap().position,
        Point::new(200.0, 200.0)
    );

    let z_before = z(&session, AppId::About);
    assert!(session.begin_resize(AppId::About, ResizeHandle::NW, Point::new(200.0, 200.0)));
    session.pointer_up(Point::new(150.0, 170.0));
    let window = session.windows().get(AppId::About).unwrap();
    assert_eq!(window.position, Point::new(150.0, 170.0));
    assert_eq!(window.size, Size::new(690.0, 510.0));
    assert_eq!(window.state, WindowState::Normal);
    // Resize start focuses, commit does not
    assert_eq!(window.z_index, z_before + 1);
}

// =============================================================================
// Settings
// =============================================================================

#[test]
fn test_session_with_settings_json() {
    let settings =
        DesktopSettings::from_json(r#"{"taskbarHeight": 40, "defaultPosition": {"x": 0, "y": 0}}"#)
            .unwrap();
    let mut session = DesktopSession::new(AppRegistry::portfolio(), settings).unwrap();
    session.resize(1000.0, 800.0);

    session.open_window(AppId::Wiki);
    assert_eq!(
        session.windows().get(AppId::Wiki).unwrap().position,
        Point::new(0.0, 0.0)
    );
    assert_eq!(session.work_area(), Rect::new(0.0, 0.0, 1000.0, 760.0));
}

// =============================================================================
// Invariants over command sequences
// =============================================================================

/// Small deterministic generator so sequences are reproducible
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }

    fn pick(&mut self, n: usize) -> usize {
        (self.next() % n as u64) as usize
    }
}

#[test]
fn test_invariants_hold_over_random_sequences() {
    for seed in 0..50 {
        let mut rng = Lcg(seed);
        let mut wm = WindowManager::new();
        let mut last_z = 0;

        for _ in 0..200 {
            let id = AppId::ALL[rng.pick(AppId::ALL.len())];
            let was_open = wm.is_open(id);
            let before = wm.get(id).cloned();

            match rng.pick(8) {
                0 => {
                    wm.open(id);
                    let w = wm.get(id).unwrap();
                    assert_ne!(w.state, WindowState::Minimized);
                    assert!(wm
                        .all_windows()
                        .filter(|o| o.id != id)
                        .all(|o| o.z_index < w.z_index));
                }
                1 => {
                    wm.close(id);
                    assert!(!wm.is_open(id));
                }
                2 => {
                    wm.focus(id);
                    if was_open {
                        assert_eq!(wm.get(id).unwrap().z_index, last_z + 1);
                    }
                }
                3 => wm.minimize(id),
                4 => wm.maximize(id),
                5 => wm.restore(id),
                6 => {
                    let visible = wm.all_windows().filter(|w| w.is_visible()).count();
                    assert_eq!(wm.minimize_all(), visible);
                }
                _ => {
                    let p = Point::new(rng.pick(1000) as f32, rng.pick(800) as f32);
                    wm.update_position(id, p);
                    if let (Some(before), Some(after)) = (before.as_ref(), wm.get(id)) {
                        assert_eq!(before.state, after.state);
                        assert_eq!(before.z_index, after.z_index);
                    }
                }
            }

            // Unique ids
            let ids: HashSet<AppId> = wm.all_windows().map(|w| w.id).collect();
            assert_eq!(ids.len(), wm.count());

            // Unique z-indices, never handed out twice
            let zs: HashSet<u64> = wm.all_windows().map(|w| w.z_index).collect();
            assert_eq!(zs.len(), wm.count());
            let max_z = wm.all_windows().map(|w| w.z_index).max().unwrap_or(0);
            last_z = last_z.max(max_z);

            // Focused window is the topmost visible one
            let top_visible = wm
                .windows_by_z()
                .into_iter()
                .rev()
                .find(|w| w.is_visible())
                .map(|w| w.id);
            assert_eq!(wm.focused(), top_visible);
        }
    }
}

#[test]
fn test_open_is_idempotent_per_app() {
    let mut session = session();
    for _ in 0..10 {
        for id in AppId::ALL {
            session.open_window(id);
            session.double_click_icon(id);
            session.click_taskbar(id);
        }
    }
    assert_eq!(session.windows().count(), AppId::ALL.len());
}
