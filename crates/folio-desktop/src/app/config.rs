//! Static application descriptors

use crate::math::Size;
use crate::window::WindowConfig;
use super::AppId;

/// Descriptor for a registered application
///
/// `R` is whatever the host uses to render the window body. The browser
/// front end resolves components on its side and uses `()`.
#[derive(Clone, Debug)]
pub struct AppConfig<R = ()> {
    /// Application identifier
    pub id: AppId,
    /// Title shown on the window chrome and taskbar
    pub title: String,
    /// Icon shown on the desktop and taskbar
    pub icon: String,
    /// Initial window size (None = settings default)
    pub preferred_size: Option<Size>,
    /// Renderer for the window body
    pub renderer: R,
}

impl AppConfig<()> {
    /// Create a descriptor without a renderer
    pub fn new(id: AppId, title: impl Into<String>, icon: impl Into<String>) -> Self {
        Self::with_renderer(id, title, icon, ())
    }
}

impl<R> AppConfig<R> {
    /// Create a descriptor bound to a renderer
    pub fn with_renderer(
        id: AppId,
        title: impl Into<String>,
        icon: impl Into<String>,
        renderer: R,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            icon: icon.into(),
            preferred_size: None,
            renderer,
        }
    }

    /// Set the initial window size
    pub fn preferred_size(mut self, size: Size) -> Self {
        self.preferred_size = Some(size);
        self
    }

    /// Window creation parameters for this app
    pub fn window_config(&self) -> WindowConfig {
        WindowConfig {
            size: self.preferred_size,
            ..Default::default()
        }
    }
}
