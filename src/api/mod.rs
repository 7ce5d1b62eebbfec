//! Tooltip WASM API
//!
//! JavaScript-facing functions, organized by concern:
//!
//! - `helpers`: shared serialization and error conversion
//! - `engine`: the pure placement engine over plain JS objects
//! - `page`: installing handlers, showing boxes and resetting the page

pub mod helpers;
pub mod engine;
pub mod page;

pub use engine::{compute_offsets, compute_placement, measure_anchor, select_side, size_budget};
pub use page::{init_tooltips, reset_tooltips, show_popover, show_tooltip};
