//! State management module
//! 
//! This module contains the per-page context and the timer state snapshot.

pub mod page_state;
pub mod timer_state;

// Re-export main types
pub use page_state::Page;
pub use timer_state::{format_elapsed, RunState, TimerState};
