//! Page widgets module
//! 
//! This module contains the helpers pages use directly: the timer, the
//! loading spinner, status messages and auto-resize.

pub mod layout;
pub mod spinner;
pub mod status;
pub mod timer;

// Re-export main types
pub use layout::{AutoResize, LayoutInfo, Viewport};
pub use spinner::Spinner;
pub use status::StatusKind;
pub use timer::Timer;
