//! Application registry
//!
//! Every window on the desktop hosts one registered application. The
//! registry is built once at startup and never mutated by the window
//! manager.

mod config;
mod id;
mod registry;

pub use config::AppConfig;
pub use id::AppId;
pub use registry::AppRegistry;
