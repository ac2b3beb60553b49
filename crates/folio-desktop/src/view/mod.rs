//! Rendered window geometry
//!
//! Turns window records into the frames the front end paints. Minimized
//! windows produce no frame at all; maximized windows fill the work area
//! and cannot be dragged or resized.

mod frame;

pub use frame::{frame_at, render_frames, WindowFrame};
