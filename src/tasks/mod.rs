//! Background tasks module
//! 
//! This module contains the repeating tick task that drives timers.

pub mod ticker;

// Re-export main types
pub use ticker::{Scheduler, TickHandle};
