//! Desktop window manager for the Folio portfolio site
//!
//! The site presents its pages (about, portfolio, wiki, blog, commissions)
//! as windows on a desktop with icons and a taskbar. This crate owns the
//! window state behind that front end:
//! - Window lifecycle (open, close, focus, z-order)
//! - Display modes (normal, minimized, maximized) with lossless restore
//! - Drag/resize gesture handling and rendered geometry
//! - Desktop icon and taskbar behavior
//!
//! ## Architecture
//!
//! - [`math`]: Geometry types (`Point`, `Size`, `Rect`)
//! - [`app`]: Application registry (`AppId`, `AppConfig`, `AppRegistry`)
//! - [`window`]: Window records and the `WindowManager` state container
//! - [`input`]: Gesture router for drag and resize
//! - [`view`]: Rendered window frames
//! - [`desktop`]: Desktop icons and taskbar
//! - [`settings`]: Layout settings loaded from JSON
//!
//! All state is plain Rust and runs without a browser. The `wasm` feature
//! adds a `wasm-bindgen` controller for the React front end.
//!
//! ## Example
//!
//! ```rust
//! use folio_desktop::{AppId, DesktopSession, WindowState};
//!
//! let mut session = DesktopSession::with_default_apps();
//! session.resize(1920.0, 1080.0);
//!
//! session.open_window(AppId::About);
//! session.open_window(AppId::Wiki);
//! session.minimize_window(AppId::Wiki);
//!
//! let wiki = session.windows().get(AppId::Wiki).unwrap();
//! assert_eq!(wiki.state, WindowState::Minimized);
//! assert_eq!(session.windows().focused(), Some(AppId::About));
//! ```

pub mod app;
pub mod desktop;
pub mod input;
pub mod math;
pub mod settings;
pub mod view;
pub mod window;

mod error;
mod session;
mod viewport;

// WASM exports (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;

pub use app::{AppConfig, AppId, AppRegistry};
pub use desktop::{ButtonStatus, Desktop, DesktopIcon, Taskbar, TaskbarButton};
pub use error::{DesktopError, Result};
pub use input::{DragState, GestureRouter, ResizeHandle};
pub use math::{Point, Rect, Size};
pub use session::DesktopSession;
pub use settings::DesktopSettings;
pub use view::WindowFrame;
pub use viewport::Viewport;
pub use window::{Window, WindowConfig, WindowManager, WindowState};
