//! Placement core
//!
//! - `anchor`: measures an anchor against its containment box
//! - `engine`: chooses a side, a width budget and the final offsets
//! - `errors`: error type shared by both and by the DOM layer

pub mod anchor;
pub mod engine;
pub mod errors;

pub use anchor::measure;
pub use errors::PlacementError;
pub use engine::{
    compute_offsets, place, select_side, size_budget, DEFAULT_WIDTH, MIN_PAD, MIN_WIDTH,
    PADDING, PIN_INSET,
};
