//! Delegated page events
//!
//! - `mouseover` on `[data-tooltip]` / `[data-popover]` shows a box, once
//!   per anchor until the next reset
//! - `click` on `[data-popover].toggle` toggles the `open` class
//! - `dblclick` on the same is swallowed so it does not select text
//! - `resize` on the window resets all boxes, debounced

use std::sync::atomic::{AtomicBool, Ordering};

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, EventTarget};

use crate::config::{self, TtipConfig};
use crate::content::ContentKind;
use crate::placement::PlacementError;

use super::attributes::{OPEN_CLASS, POPOVER_SELECTOR, POPOVER_TOGGLE_SELECTOR, TOOLTIP_SELECTOR};
use super::container::has_container;
use super::debounce::Debouncer;
use super::reveal;

static INSTALLED: AtomicBool = AtomicBool::new(false);

/// Install page-wide handlers. Only the first call has an effect; hover
/// handling always reads the active configuration.
pub fn install_handlers(config: &TtipConfig) -> Result<bool, PlacementError> {
    if INSTALLED.swap(true, Ordering::SeqCst) {
        log::warn!("Tooltip handlers already installed");
        return Ok(false);
    }

    let window = super::window()?;
    let document = super::document()?;
    listen(&document, "mouseover", |event| {
        if let Some(target) = event_element(&event) {
            on_hover(&target, &config::active());
        }
    })?;

    listen(&document, "click", |event| {
        if let Some(anchor) = event_element(&event).and_then(|t| closest(&t, POPOVER_TOGGLE_SELECTOR)) {
            if let Err(e) = anchor.class_list().toggle(OPEN_CLASS) {
                log::error!("Failed to toggle popover: {:?}", e);
            }
        }
    })?;

    listen(&document, "dblclick", |event| {
        if event_element(&event)
            .and_then(|t| closest(&t, POPOVER_TOGGLE_SELECTOR))
            .is_some()
        {
            event.prevent_default();
            event.stop_propagation();
        }
    })?;

    let debouncer = Debouncer::new(config.resize_debounce_ms, || {
        if let Err(e) = reveal::reset_all() {
            log::error!("Reset on resize failed: {}", e);
        }
    });
    listen(&window, "resize", move |_| {
        if let Err(e) = debouncer.call() {
            log::error!("Failed to schedule reset: {}", e);
        }
    })?;

    log::info!("Tooltip handlers installed");
    Ok(true)
}

fn on_hover(target: &Element, config: &TtipConfig) {
    for (selector, kind) in [
        (TOOLTIP_SELECTOR, ContentKind::Tooltip),
        (POPOVER_SELECTOR, ContentKind::Popover),
    ] {
        let Some(anchor) = closest(target, selector) else {
            continue;
        };
        if has_container(&anchor) {
            continue;
        }
        if let Err(e) = reveal::show(&anchor, kind, config) {
            log::error!("Failed to show {}: {}", kind.as_str(), e);
        }
    }
}

fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), PlacementError>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|e| PlacementError::dom(event, e))?;
    // Page-lifetime handler
    closure.forget();
    Ok(())
}

fn event_element(event: &Event) -> Option<Element> {
    event.target()?.dyn_into::<Element>().ok()
}

fn closest(element: &Element, selector: &str) -> Option<Element> {
    element.closest(selector).ok().flatten()
}
