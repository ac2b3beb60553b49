//! Application identifiers

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DesktopError;

/// Identifier of a registered application
///
/// The set is closed: one variant per page of the site. At most one window
/// per `AppId` is open at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppId {
    About,
    Portfolio,
    Wiki,
    Blog,
    Commission,
}

impl AppId {
    /// All applications in taskbar order
    pub const ALL: [AppId; 5] = [
        AppId::About,
        AppId::Portfolio,
        AppId::Wiki,
        AppId::Blog,
        AppId::Commission,
    ];

    /// String form used by the front end
    pub fn as_str(self) -> &'static str {
        match self {
            AppId::About => "about",
            AppId::Portfolio => "portfolio",
            AppId::Wiki => "wiki",
            AppId::Blog => "blog",
            AppId::Commission => "commission",
        }
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppId {
    type Err = DesktopError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AppId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| DesktopError::UnknownApp(s.to_string()))
    }
}
