//! Page Kit - shared presentation helpers for front-end pages
//! 
//! This library provides the small utilities every page needs: an
//! elapsed-time counter, a loading spinner that restores what it replaced,
//! status messages, auto-resize of the main container, and deferred
//! initialization until the document is ready.

pub mod config;
pub mod dom;
pub mod state;
pub mod tasks;
pub mod utils;
pub mod widgets;

// Re-export commonly used types
pub use config::Config;
pub use dom::{Document, Element, ReadyState, Surface, SurfaceRef};
pub use state::{format_elapsed, Page, RunState, TimerState};
pub use tasks::{Scheduler, TickHandle};
pub use utils::signals::shutdown_signal;
pub use widgets::{status, AutoResize, Spinner, Timer, Viewport};
