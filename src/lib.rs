//! Tooltip and Popover WASM Module
//!
//! Places small floating boxes next to the elements they describe: picks
//! the side with the most room, sizes the box to fit, and nudges it back
//! inside the page while keeping its pin pointed at the anchor.
//!
//! The geometry lives in `placement` and is pure Rust; `dom` applies it to
//! the page and `api` exposes both to JavaScript.

pub mod models;
pub mod placement;
pub mod content;
pub mod lifecycle;
pub mod config;
pub mod dom;
pub mod api;

// Re-export commonly used types
pub use config::TtipConfig;
pub use content::{ContentKind, ContentProvider, ContentSource, ContentTarget, Populated};
pub use models::{AnchorBox, PinAdjustment, PinEdge, Placement, Point, Rect, Side, Size};
pub use placement::{compute_offsets, measure, place, select_side, size_budget, PlacementError};

use wasm_bindgen::prelude::*;

// Runs once when the module is instantiated.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    // The logger accepts everything; the active config sets the max level
    #[cfg(feature = "console_log")]
    if let Err(e) = console_log::init_with_level(log::Level::Trace) {
        web_sys::console::warn_1(&format!("Logger already initialized: {}", e).into());
    }
    config::set_active(TtipConfig::default());

    log::info!("Tooltip WASM module initialized");
}
