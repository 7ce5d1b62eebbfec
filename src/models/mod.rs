//! Data model for tooltip placement
//!
//! Plain values shared by anchor measurement, the placement engine and
//! the DOM layer. Everything here is `Copy` and immutable once built.

pub mod geometry;
pub mod side;
pub mod placement;

// Re-export commonly used types
pub use geometry::{AnchorBox, Point, Rect, Size};
pub use side::Side;
pub use placement::{PinAdjustment, PinEdge, Placement};
