//! Anchor measurement
//!
//! Turns a measured element rectangle and the size of its containment box
//! into an `AnchorBox`. The result is a snapshot; callers measure again
//! whenever layout may have changed.

use crate::models::{AnchorBox, Point, Rect, Size};

/// Measure free space around `rect` inside a containment box of `containment` size
pub fn measure(rect: Rect, containment: Size) -> AnchorBox {
    AnchorBox {
        top: rect.top,
        left: rect.left,
        width: rect.width,
        height: rect.height,
        right: containment.width - rect.left - rect.width,
        bottom: containment.height - rect.top - rect.height,
        center: Point {
            x: rect.left + rect.width / 2.0,
            y: rect.top + rect.height / 2.0,
        },
    }
}
