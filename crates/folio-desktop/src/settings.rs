//! Desktop layout settings
//!
//! Loaded from JSON supplied by the host page. Every field is optional and
//! falls back to the built-in layout.

use serde::{Deserialize, Serialize};

use crate::error::{DesktopError, Result};
use crate::math::{Point, Size};

/// Layout settings for the desktop
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DesktopSettings {
    /// Height reserved for the taskbar at the bottom of the viewport
    pub taskbar_height: f32,
    /// Position of the first window opened on an empty desktop
    pub default_position: Point,
    /// Size of a new window when its app has no preferred size
    pub default_size: Size,
    /// Smallest size a window can be resized to
    pub min_size: Size,
    /// Offset between consecutively opened windows
    pub cascade_offset: f32,
    /// Number of cascade steps before wrapping back to the default position
    pub cascade_steps: u32,
}

impl Default for DesktopSettings {
    fn default() -> Self {
        Self {
            taskbar_height: 48.0,
            default_position: Point::new(100.0, 100.0),
            default_size: Size::new(800.0, 600.0),
            min_size: Size::new(200.0, 150.0),
            cascade_offset: 30.0,
            cascade_steps: 10,
        }
    }
}

impl DesktopSettings {
    /// Parse and validate settings from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: DesktopSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Check that the settings describe usable geometry
    pub fn validate(&self) -> Result<()> {
        if self.taskbar_height.is_nan() || self.taskbar_height < 0.0 {
            return Err(DesktopError::InvalidGeometry {
                field: "taskbarHeight",
                reason: "must be zero or positive",
            });
        }
        if self.default_size.is_empty() {
            return Err(DesktopError::InvalidGeometry {
                field: "defaultSize",
                reason: "width and height must be positive",
            });
        }
        if self.min_size.is_empty() {
            return Err(DesktopError::InvalidGeometry {
                field: "minSize",
                reason: "width and height must be positive",
            });
        }
        if self.cascade_steps == 0 {
            return Err(DesktopError::InvalidGeometry {
                field: "cascadeSteps",
                reason: "must be at least 1",
            });
        }
        Ok(())
    }

    /// Position of a new window given the positions of open windows
    ///
    /// Takes the first cascade slot no open window sits on. When every slot
    /// is taken, wraps by the number of open windows.
    pub fn cascade_position(&self, occupied: &[Point]) -> Point {
        let steps = self.cascade_steps.max(1) as usize;
        let slot = |step: usize| self.default_position.offset(step as f32 * self.cascade_offset);

        (0..steps)
            .map(slot)
            .find(|pos| !occupied.contains(pos))
            .unwrap_or_else(|| slot(occupied.len() % steps))
    }
}
