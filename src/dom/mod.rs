//! Document model module
//! 
//! This module contains the display surface abstraction, the in-memory
//! document that resolves ids to surfaces, and the shared head content.

pub mod document;
pub mod styles;
pub mod surface;

// Re-export main types
pub use document::{Document, Head, ReadyState};
pub use surface::{Element, ElementState, Surface, SurfaceLookup, SurfaceRef, Target};
