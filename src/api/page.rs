//! Page-level functions
//!
//! `initTooltips` wires delegated handlers so that any element carrying
//! `data-tooltip` or `data-popover` gets a box on hover. The other
//! functions let scripts drive the same sequence directly.

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::config::{self, TtipConfig};
use crate::content::ContentKind;
use crate::dom;

use super::helpers::{deserialize_or_default, placement_error};

/// Apply configuration and install page handlers.
///
/// `config` is an optional object such as `{ logLevel: "debug" }`. Calling
/// again replaces the configuration without adding handlers and returns
/// false.
#[wasm_bindgen(js_name = initTooltips)]
pub fn init_tooltips(config_js: JsValue) -> Result<bool, JsValue> {
    let config: TtipConfig = deserialize_or_default(config_js, "Failed to deserialize tooltip config")?;
    config::set_active(config.clone());
    log::info!("Initializing tooltips with {:?}", config);
    dom::install_handlers(&config).map_err(placement_error)
}

/// Remove all tooltips and popovers; returns how many were removed
#[wasm_bindgen(js_name = resetTooltips)]
pub fn reset_tooltips() -> Result<usize, JsValue> {
    dom::reset_all().map_err(placement_error)
}

/// Show the tooltip of an element with `data-tooltip`
#[wasm_bindgen(js_name = showTooltip)]
pub fn show_tooltip(anchor: &Element) -> Result<u32, JsValue> {
    show(anchor, ContentKind::Tooltip)
}

/// Show the popover of an element with `data-popover`
#[wasm_bindgen(js_name = showPopover)]
pub fn show_popover(anchor: &Element) -> Result<u32, JsValue> {
    show(anchor, ContentKind::Popover)
}

fn show(anchor: &Element, kind: ContentKind) -> Result<u32, JsValue> {
    dom::show(anchor, kind, &config::active())
        .map(|handle| handle.id())
        .map_err(placement_error)
}
