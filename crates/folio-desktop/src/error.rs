//! Error types for the desktop crate
//!
//! Window operations never fail. These errors only surface at the edges:
//! parsing app ids, registering apps and loading settings.

use crate::app::AppId;

/// Errors raised at the desktop crate's boundaries.
#[derive(Debug, thiserror::Error)]
pub enum DesktopError {
    /// A string did not name any registered application.
    #[error("unknown app id: {0}")]
    UnknownApp(String),

    /// The same application was registered twice.
    #[error("app registered twice: {0}")]
    DuplicateApp(AppId),

    /// Settings JSON could not be parsed.
    #[error("invalid settings: {0}")]
    InvalidSettings(#[from] serde_json::Error),

    /// Settings parsed but describe impossible geometry.
    #[error("invalid geometry for {field}: {reason}")]
    InvalidGeometry {
        field: &'static str,
        reason: &'static str,
    },
}

/// Result alias for desktop operations that can fail.
pub type Result<T> = core::result::Result<T, DesktopError>;
