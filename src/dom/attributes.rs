//! Per-anchor configuration
//!
//! Anchors opt in with `data-tooltip="text"` or `data-popover="template-id"`.
//! The template is any element with a matching `data-popover-content`
//! attribute. `data-ttip-position` forces a side.

use web_sys::{Document, Element};

use crate::content::{ContentKind, ContentSource};
use crate::placement::PlacementError;

pub const TOOLTIP_ATTR: &str = "data-tooltip";
pub const POPOVER_ATTR: &str = "data-popover";
pub const POPOVER_CONTENT_ATTR: &str = "data-popover-content";
pub const POSITION_ATTR: &str = "data-ttip-position";

pub const TOOLTIP_SELECTOR: &str = "[data-tooltip]";
pub const POPOVER_SELECTOR: &str = "[data-popover]";
pub const POPOVER_TOGGLE_SELECTOR: &str = "[data-popover].toggle";

/// Class toggled on a popover anchor by clicks
pub const OPEN_CLASS: &str = "open";

/// Raw explicit side preference, if the anchor has one
pub fn explicit_side(anchor: &Element) -> Option<String> {
    anchor.get_attribute(POSITION_ATTR)
}

/// Resolve the content for an anchor of the given kind
pub fn content_source(
    document: &Document,
    anchor: &Element,
    kind: ContentKind,
) -> Result<ContentSource, PlacementError> {
    match kind {
        ContentKind::Tooltip => Ok(ContentSource::Tooltip {
            text: anchor.get_attribute(TOOLTIP_ATTR),
        }),
        ContentKind::Popover => {
            let template = anchor.get_attribute(POPOVER_ATTR);
            let html = match &template {
                Some(id) => document
                    .query_selector(&template_selector(id))
                    .map_err(|e| PlacementError::dom("popover template lookup", e))?
                    .map(|el| el.inner_html()),
                None => None,
            };
            Ok(ContentSource::Popover { template, html })
        }
    }
}

/// Selector for the popover template with the given id
pub fn template_selector(id: &str) -> String {
    format!("[{}={}]", POPOVER_CONTENT_ATTR, web_sys::css::escape(id))
}
