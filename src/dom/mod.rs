//! DOM shell around the placement core
//!
//! Measures anchors, builds floating containers, applies placements and
//! wires page events. Geometry decisions all live in `crate::placement`;
//! this module only reads the page and writes styles and classes.
//!
//! # Module Structure
//!
//! - `attributes`: per-anchor configuration read from `data-*` attributes
//! - `measure`: geometry queries (anchor rect, containment box, box size)
//! - `container`: creation and styling of `.ttip-container` elements
//! - `scheduler`: deferred tasks on the browser event loop
//! - `debounce`: trailing-edge debouncing for resize
//! - `reveal`: the two-phase show sequence and global reset
//! - `events`: delegated event handlers

pub mod attributes;
pub mod measure;
pub mod container;
pub mod scheduler;
pub mod debounce;
pub mod reveal;
pub mod events;

use crate::placement::PlacementError;

pub use container::FloatingBox;
pub use debounce::Debouncer;
pub use events::install_handlers;
pub use reveal::{reset_all, show};
pub use scheduler::schedule_deferred;

/// The page's window
pub fn window() -> Result<web_sys::Window, PlacementError> {
    web_sys::window().ok_or_else(|| PlacementError::Dom("no global window".to_string()))
}

/// The page's document
pub fn document() -> Result<web_sys::Document, PlacementError> {
    window()?
        .document()
        .ok_or_else(|| PlacementError::Dom("window has no document".to_string()))
}
