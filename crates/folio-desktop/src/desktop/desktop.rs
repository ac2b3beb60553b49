//! Desktop icons and icon selection

use serde::Serialize;
use tracing::trace;

use crate::app::{AppId, AppRegistry};
use crate::window::WindowManager;

/// A desktop icon as shown to the user
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DesktopIcon {
    pub id: AppId,
    pub title: String,
    pub icon: String,
    pub selected: bool,
}

/// Desktop surface state
///
/// Icon selection is purely visual and independent of window state.
#[derive(Clone, Debug, Default)]
pub struct Desktop {
    selected: Option<AppId>,
}

impl Desktop {
    /// Create a desktop with nothing selected
    pub fn new() -> Self {
        Self { selected: None }
    }

    /// Currently highlighted icon
    pub fn selected(&self) -> Option<AppId> {
        self.selected
    }

    /// One icon per registered app, in registration order
    pub fn icons<R>(&self, registry: &AppRegistry<R>) -> Vec<DesktopIcon> {
        registry
            .iter()
            .map(|app| DesktopIcon {
                id: app.id,
                title: app.title.clone(),
                icon: app.icon.clone(),
                selected: self.selected == Some(app.id),
            })
            .collect()
    }

    /// Highlight an icon
    pub fn click_icon<R>(&mut self, registry: &AppRegistry<R>, id: AppId) {
        if registry.contains(id) {
            self.selected = Some(id);
        }
    }

    /// Open the app behind an icon
    pub fn double_click_icon<R>(
        &mut self,
        windows: &mut WindowManager,
        registry: &AppRegistry<R>,
        id: AppId,
    ) {
        let Some(app) = registry.get(id) else {
            trace!(app = %id, "icon ignored, app not registered");
            return;
        };
        self.selected = Some(id);
        windows.open_with(id, app.window_config());
    }

    /// Click on empty desktop space clears the selection
    pub fn click_empty(&mut self) {
        self.selected = None;
    }
}
