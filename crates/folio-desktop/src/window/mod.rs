//! Window management module
//!
//! Provides window lifecycle, display modes and z-order.

#[allow(clippy::module_inception)]
mod window;
mod config;
mod manager;

pub use window::{Window, WindowState};
pub use config::WindowConfig;
pub use manager::WindowManager;
