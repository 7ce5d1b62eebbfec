//! Output of a placement pass
//!
//! A `Placement` carries the offsets for the floating box and, when the
//! box had to be nudged to stay on screen, the adjustment for its pin.

use serde::{Deserialize, Serialize};

use super::side::Side;

/// Edge of the pin element an adjustment is measured from
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PinEdge {
    Left,
    Right,
    Top,
    Bottom,
}

impl PinEdge {
    /// CSS property name for this edge
    pub fn as_css(&self) -> &'static str {
        match self {
            PinEdge::Left => "left",
            PinEdge::Right => "right",
            PinEdge::Top => "top",
            PinEdge::Bottom => "bottom",
        }
    }

    /// The opposite edge on the same axis, which must be reset when this
    /// edge is set so that stale positioning does not linger.
    pub fn cleared(&self) -> PinEdge {
        match self {
            PinEdge::Left => PinEdge::Right,
            PinEdge::Right => PinEdge::Left,
            PinEdge::Top => PinEdge::Bottom,
            PinEdge::Bottom => PinEdge::Top,
        }
    }
}

/// Offset of the pin along the corrected axis
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct PinAdjustment {
    pub edge: PinEdge,
    pub value: f64,
}

/// Final position of a floating box relative to its anchor
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Placement {
    pub side: Side,
    pub offset_top: f64,
    pub offset_left: f64,
    pub pin: Option<PinAdjustment>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cleared_edge_stays_on_axis() {
        assert_eq!(PinEdge::Left.cleared(), PinEdge::Right);
        assert_eq!(PinEdge::Bottom.cleared(), PinEdge::Top);
        for edge in [PinEdge::Left, PinEdge::Right, PinEdge::Top, PinEdge::Bottom] {
            assert_eq!(edge.cleared().cleared(), edge);
        }
    }

    #[test]
    fn test_placement_json_shape() {
        let placement = Placement {
            side: Side::Top,
            offset_top: -40.0,
            offset_left: 5.0,
            pin: Some(PinAdjustment { edge: PinEdge::Left, value: 12.0 }),
        };
        let json = serde_json::to_value(placement).unwrap();
        assert_eq!(json["side"], "top");
        assert_eq!(json["offsetTop"], -40.0);
        assert_eq!(json["pin"]["edge"], "left");
    }
}
