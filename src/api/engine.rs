//! Placement engine functions
//!
//! Stateless wrappers around `crate::placement` that take and return plain
//! JS objects, for callers that do their own DOM work.

use wasm_bindgen::prelude::*;

use crate::models::{AnchorBox, Rect, Side, Size};
use crate::placement::{self, PlacementError};

use super::helpers::{deserialize, placement_error, serialize};

/// Measure free space around a rect `{top, left, width, height}` inside a
/// containment box `{width, height}`
#[wasm_bindgen(js_name = measureAnchor)]
pub fn measure_anchor(rect_js: JsValue, containment_js: JsValue) -> Result<JsValue, JsValue> {
    let rect: Rect = deserialize(rect_js, "Failed to deserialize rect")?;
    let containment: Size = deserialize(containment_js, "Failed to deserialize containment size")?;
    serialize(&placement::measure(rect, containment), "Failed to serialize anchor")
}

/// Choose a side for an anchor; `explicit` forces one of
/// "top", "bottom", "right" or "left"
#[wasm_bindgen(js_name = selectSide)]
pub fn select_side(anchor_js: JsValue, explicit: Option<String>) -> Result<String, JsValue> {
    let anchor: AnchorBox = deserialize(anchor_js, "Failed to deserialize anchor")?;
    let side = placement::select_side(&anchor, explicit.as_deref()).map_err(placement_error)?;
    Ok(side.as_str().to_string())
}

/// Width budget for a box placed on `side`
#[wasm_bindgen(js_name = sizeBudget)]
pub fn size_budget(side: &str, anchor_js: JsValue, desired_width: f64) -> Result<f64, JsValue> {
    let side = parse_side(side)?;
    let anchor: AnchorBox = deserialize(anchor_js, "Failed to deserialize anchor")?;
    Ok(placement::size_budget(side, &anchor, desired_width))
}

/// Offsets and pin adjustment for a measured box `{width, height}`
#[wasm_bindgen(js_name = computeOffsets)]
pub fn compute_offsets(side: &str, anchor_js: JsValue, size_js: JsValue) -> Result<JsValue, JsValue> {
    let side = parse_side(side)?;
    let anchor: AnchorBox = deserialize(anchor_js, "Failed to deserialize anchor")?;
    let size: Size = deserialize(size_js, "Failed to deserialize box size")?;
    serialize(&placement::compute_offsets(side, &anchor, size), "Failed to serialize placement")
}

/// Full placement pass: side selection followed by offsets
#[wasm_bindgen(js_name = computePlacement)]
pub fn compute_placement(
    anchor_js: JsValue,
    explicit: Option<String>,
    size_js: JsValue,
) -> Result<JsValue, JsValue> {
    let anchor: AnchorBox = deserialize(anchor_js, "Failed to deserialize anchor")?;
    let size: Size = deserialize(size_js, "Failed to deserialize box size")?;
    let placement =
        placement::place(&anchor, explicit.as_deref(), size).map_err(placement_error)?;
    serialize(&placement, "Failed to serialize placement")
}

// A side passed to a later pipeline step must already be valid
fn parse_side(side: &str) -> Result<Side, JsValue> {
    side.parse()
        .map_err(|_| placement_error(PlacementError::Internal(format!("Unknown position: {}", side))))
}
