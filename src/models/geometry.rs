//! Geometry values for anchors and floating boxes
//!
//! All coordinates are CSS pixels in viewport space, as returned by
//! `getBoundingClientRect()`. The containment box is the document body.

use serde::{Deserialize, Serialize};

use super::side::Side;

/// A point in viewport space
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Width and height of a box
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Raw measured rectangle of an element
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self { top, left, width, height }
    }
}

/// Measured anchor element together with the free space around it
///
/// `top` and `left` are both the anchor's edge coordinates and the free
/// space above / to the left of it, since the containment box starts at
/// the origin. `right` and `bottom` are free space only: the distance from
/// the anchor's far edge to the containment box's far edge.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct AnchorBox {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
    /// Free space between the anchor's right edge and the containment box
    pub right: f64,
    /// Free space between the anchor's bottom edge and the containment box
    pub bottom: f64,
    pub center: Point,
}

impl AnchorBox {
    /// Free space available on the given side of the anchor
    pub fn free_space(&self, side: Side) -> f64 {
        match side {
            Side::Top => self.top,
            Side::Bottom => self.bottom,
            Side::Right => self.right,
            Side::Left => self.left,
        }
    }

    /// Free space in preference order: top, bottom, right, left
    pub fn free_space_tuple(&self) -> [f64; 4] {
        Side::PREFERENCE.map(|side| self.free_space(side))
    }
}
