//! Ordered registry of applications

use tracing::debug;

use crate::error::{DesktopError, Result};
use crate::math::Size;
use super::{AppConfig, AppId};

/// Ordered list of registered applications
///
/// Registration order is the order of desktop icons and taskbar buttons.
/// The registry doubles as the dispatch table from `AppId` to renderer.
#[derive(Clone, Debug)]
pub struct AppRegistry<R = ()> {
    apps: Vec<AppConfig<R>>,
}

impl<R> Default for AppRegistry<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> AppRegistry<R> {
    /// Create an empty registry
    pub fn new() -> Self {
        Self { apps: Vec::new() }
    }

    /// Build a registry from descriptors, rejecting duplicates
    pub fn from_configs(configs: impl IntoIterator<Item = AppConfig<R>>) -> Result<Self> {
        let mut registry = Self::new();
        for config in configs {
            registry.register(config)?;
        }
        Ok(registry)
    }

    /// Register an application
    pub fn register(&mut self, config: AppConfig<R>) -> Result<()> {
        if self.contains(config.id) {
            return Err(DesktopError::DuplicateApp(config.id));
        }
        debug!(app = %config.id, title = %config.title, "registered app");
        self.apps.push(config);
        Ok(())
    }

    /// Look up an application descriptor
    pub fn get(&self, id: AppId) -> Option<&AppConfig<R>> {
        self.apps.iter().find(|app| app.id == id)
    }

    /// Look up the renderer for an application
    pub fn renderer(&self, id: AppId) -> Option<&R> {
        self.get(id).map(|app| &app.renderer)
    }

    /// Check if an application is registered
    pub fn contains(&self, id: AppId) -> bool {
        self.get(id).is_some()
    }

    /// Applications in registration order
    pub fn iter(&self) -> impl Iterator<Item = &AppConfig<R>> {
        self.apps.iter()
    }

    /// Number of registered applications
    pub fn len(&self) -> usize {
        self.apps.len()
    }

    /// Check if nothing is registered
    pub fn is_empty(&self) -> bool {
        self.apps.is_empty()
    }
}

impl AppRegistry<()> {
    /// The portfolio site's applications
    pub fn portfolio() -> Self {
        let apps = vec![
            AppConfig::new(AppId::About, "About Me", "icons/about.png")
                .preferred_size(Size::new(640.0, 480.0)),
            AppConfig::new(AppId::Portfolio, "Portfolio", "icons/portfolio.png")
                .preferred_size(Size::new(960.0, 640.0)),
            AppConfig::new(AppId::Wiki, "Wiki", "icons/wiki.png")
                .preferred_size(Size::new(960.0, 680.0)),
            AppConfig::new(AppId::Blog, "Blog", "icons/blog.png")
                .preferred_size(Size::new(860.0, 640.0)),
            AppConfig::new(AppId::Commission, "Commissions", "icons/commission.png")
                .preferred_size(Size::new(900.0, 620.0)),
        ];
        Self { apps }
    }
}
