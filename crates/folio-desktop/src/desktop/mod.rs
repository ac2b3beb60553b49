//! Desktop surface and taskbar
//!
//! Both read the app registry and the window manager passed in by the
//! caller, and translate clicks into window manager commands.

#[allow(clippy::module_inception)]
mod desktop;
mod taskbar;

pub use desktop::{Desktop, DesktopIcon};
pub use taskbar::{ButtonStatus, Taskbar, TaskbarButton};
