//! Placement engine
//!
//! Three steps, used in sequence by the DOM layer:
//!
//! 1. `select_side` picks the side with the most free space, unless the
//!    anchor asks for one explicitly.
//! 2. `size_budget` caps the width of a box placed beside the anchor so it
//!    does not overflow the horizontal gap.
//! 3. `compute_offsets` positions the measured box and, when the box must be
//!    nudged to stay inside the containment box, moves the pin so it still
//!    points at the anchor.
//!
//! Every step is a pure function of its inputs.

use crate::models::{AnchorBox, PinAdjustment, PinEdge, Placement, Side, Size};

use super::errors::PlacementError;

/// Gap between anchor and floating box, and inner padding of the box
pub const PADDING: f64 = 10.0;

/// Smallest width a box placed beside the anchor may get
pub const MIN_WIDTH: f64 = 50.0;

/// Minimum distance kept between a nudged box and the containment edge
pub const MIN_PAD: f64 = 5.0;

/// Distance between a right/bottom anchored pin and the anchor's center
pub const PIN_INSET: f64 = 10.0;

/// Width requested for a fresh container before content is measured
pub const DEFAULT_WIDTH: f64 = 250.0;

/// Choose the side to place the floating box on.
///
/// A non-empty `explicit` value must name one of the four sides and is
/// returned unchanged. Otherwise the side with the most free space wins,
/// ties going to the earliest side in `Side::PREFERENCE`.
pub fn select_side(anchor: &AnchorBox, explicit: Option<&str>) -> Result<Side, PlacementError> {
    if let Some(side) = Side::parse_request(explicit)? {
        log::debug!("Explicit side requested: {}", side);
        return Ok(side);
    }

    let mut best = Side::PREFERENCE[0];
    let mut best_space = anchor.free_space(best);
    for &side in &Side::PREFERENCE[1..] {
        let space = anchor.free_space(side);
        if space > best_space || (best_space.is_nan() && !space.is_nan()) {
            best = side;
            best_space = space;
        }
    }

    log::debug!(
        "Auto-selected side {} (free space {:?})",
        best,
        anchor.free_space_tuple()
    );
    Ok(best)
}

/// Width budget for a box of `desired_width` placed on `side`.
///
/// Only boxes beside the anchor are constrained; the gap they sit in is
/// the free space on that side.
pub fn size_budget(side: Side, anchor: &AnchorBox, desired_width: f64) -> f64 {
    if !side.is_horizontal() {
        return desired_width;
    }

    let avail = anchor.free_space(side);
    if avail < MIN_WIDTH {
        MIN_WIDTH
    } else if avail < desired_width {
        avail - PADDING * 2.0
    } else {
        desired_width
    }
}

/// Compute the final offsets of a measured box placed on `side`.
///
/// Offsets are relative to the anchor's top-left corner. The box is
/// centered on the cross axis, then corrected when it would overflow
/// exactly one end of that axis.
pub fn compute_offsets(side: Side, anchor: &AnchorBox, size: Size) -> Placement {
    let mut shift_x = (anchor.width - size.width) / 2.0;
    let mut shift_y = (anchor.height - size.height) / 2.0;

    log::debug!(
        "Container shift x: ({} - {}) / 2 = {}",
        anchor.width,
        size.width,
        shift_x
    );
    log::debug!(
        "Container shift y: ({} - {}) / 2 = {}",
        anchor.height,
        size.height,
        shift_y
    );

    match side {
        Side::Top => shift_y = -(size.height + PADDING),
        Side::Bottom => shift_y = anchor.height + PADDING,
        Side::Right => shift_x = anchor.width + PADDING,
        Side::Left => shift_x = -(size.width + PADDING),
    }

    let pin = if side.is_horizontal() {
        fit_vertically(anchor, size, &mut shift_y)
    } else {
        fit_horizontally(anchor, size, &mut shift_x)
    };

    if let Some(pin) = pin {
        log::debug!("Box nudged on {} side, pin {} = {}", side, pin.edge.as_css(), pin.value);
    }

    Placement {
        side,
        offset_top: shift_y,
        offset_left: shift_x,
        pin,
    }
}

/// Run a full placement pass: select a side, then compute offsets.
///
/// Stateless, so identical inputs always produce identical placements.
pub fn place(
    anchor: &AnchorBox,
    explicit: Option<&str>,
    size: Size,
) -> Result<Placement, PlacementError> {
    let side = select_side(anchor, explicit)?;
    Ok(compute_offsets(side, anchor, size))
}

// Horizontal correction for boxes above or below the anchor
fn fit_horizontally(anchor: &AnchorBox, size: Size, shift_x: &mut f64) -> Option<PinAdjustment> {
    let half_box = size.width / 2.0;
    let fits_left = anchor.width / 2.0 + anchor.left + MIN_PAD * 2.0 > half_box;
    let fits_right = anchor.width / 2.0 + anchor.right + MIN_PAD * 2.0 > half_box;

    // Overflowing both ends or neither: centered is the best we can do
    if fits_left == fits_right {
        return None;
    }

    if !fits_left {
        *shift_x = MIN_PAD - anchor.left;
        Some(PinAdjustment {
            edge: PinEdge::Left,
            value: anchor.center.x - MIN_PAD,
        })
    } else {
        *shift_x = anchor.right - MIN_PAD + anchor.width - size.width;
        Some(PinAdjustment {
            edge: PinEdge::Right,
            value: anchor.width / 2.0 + anchor.right - MIN_PAD - PIN_INSET,
        })
    }
}

// Vertical correction for boxes beside the anchor
fn fit_vertically(anchor: &AnchorBox, size: Size, shift_y: &mut f64) -> Option<PinAdjustment> {
    let half_box = size.height / 2.0;
    let fits_top = anchor.height / 2.0 + anchor.top + MIN_PAD * 2.0 > half_box;
    let fits_bottom = anchor.height / 2.0 + anchor.bottom + MIN_PAD * 2.0 > half_box;

    if fits_top == fits_bottom {
        return None;
    }

    if !fits_bottom {
        let pad = MIN_PAD.min(anchor.bottom);
        *shift_y = anchor.bottom - pad + anchor.height - size.height;
        Some(PinAdjustment {
            edge: PinEdge::Bottom,
            value: anchor.height / 2.0 + anchor.bottom - pad - PIN_INSET,
        })
    } else {
        let pad = MIN_PAD.min(anchor.top);
        *shift_y = pad - anchor.top;
        Some(PinAdjustment {
            edge: PinEdge::Top,
            value: anchor.center.y - pad,
        })
    }
}
