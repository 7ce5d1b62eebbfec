//! Geometry queries against the live page

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::models::{AnchorBox, Rect, Size};
use crate::placement::{self, PlacementError};

/// Size of the containment box: the document body
pub fn containment_size(document: &Document) -> Result<Size, PlacementError> {
    let body = document
        .body()
        .ok_or_else(|| PlacementError::Dom("document has no body".to_string()))?;
    Ok(Size::new(body.offset_width() as f64, body.offset_height() as f64))
}

/// Viewport rectangle of an element
pub fn element_rect(element: &Element) -> Rect {
    let rect = element.get_bounding_client_rect();
    Rect::new(rect.y(), rect.x(), rect.width(), rect.height())
}

/// Measure an anchor against the document body
pub fn measure_anchor(document: &Document, anchor: &Element) -> Result<AnchorBox, PlacementError> {
    let containment = containment_size(document)?;
    Ok(placement::measure(element_rect(anchor), containment))
}

/// Rendered size of a floating box, borders and padding included
pub fn box_size(element: &Element) -> Size {
    match element.dyn_ref::<HtmlElement>() {
        Some(html) => Size::new(html.offset_width() as f64, html.offset_height() as f64),
        None => {
            let rect = element_rect(element);
            Size::new(rect.width, rect.height)
        }
    }
}
