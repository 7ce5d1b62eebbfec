//! Two-phase show sequence and global reset
//!
//! Showing a box happens in two steps because its final size is only known
//! once content is in the page:
//!
//! 1. Synchronously: measure the anchor, pick a side and a provisional
//!    width, insert a hidden container, fill it, fit its width to content.
//! 2. Deferred: measure the container, compute offsets, apply them and
//!    make the container visible.
//!
//! A reset between the two steps turns step 2 into a no-op.

use web_sys::Element;

use crate::config::TtipConfig;
use crate::content::{ContentKind, ContentProvider};
use crate::lifecycle::{self, FloatingHandle};
use crate::models::{AnchorBox, Side};
use crate::placement::{engine, PlacementError};

use super::container::{FloatingBox, CONTAINER_SELECTOR};
use super::{attributes, measure, scheduler};

/// Show a tooltip or popover for `anchor`
pub fn show(
    anchor: &Element,
    kind: ContentKind,
    config: &TtipConfig,
) -> Result<FloatingHandle, PlacementError> {
    let document = super::document()?;
    let anchor_box = measure::measure_anchor(&document, anchor)?;
    let explicit = attributes::explicit_side(anchor);
    let side = engine::select_side(&anchor_box, explicit.as_deref())?;
    let width = engine::size_budget(side, &anchor_box, config.default_width);

    let handle = lifecycle::registry().register();
    let floating = match FloatingBox::create(&document, anchor, handle, width) {
        Ok(floating) => floating,
        Err(e) => {
            lifecycle::registry().release(handle);
            return Err(e);
        }
    };

    let filled = attributes::content_source(&document, anchor, kind).and_then(|source| {
        let target: &Element = &floating.content;
        let populated = source.populate(target);
        log::debug!("Populated {} #{}: {:?}", source.kind().as_str(), handle.id(), populated);
        floating.fit_to_content()
    });
    if let Err(e) = filled {
        discard(&floating.root, handle);
        return Err(e);
    }

    log::debug!(
        "New {} #{} on side {} with width budget {}",
        kind.as_str(),
        handle.id(),
        side,
        width
    );

    let root = floating.root.clone();
    let scheduled =
        scheduler::schedule_deferred(move || finalize(floating, side, anchor_box), kind.delay_ms(config));
    if let Err(e) = scheduled {
        discard(&root, handle);
        return Err(e);
    }
    Ok(handle)
}

/// Remove every floating container from the page.
///
/// Returns how many containers were removed.
pub fn reset_all() -> Result<usize, PlacementError> {
    let document = super::document()?;
    let mut removed = 0;
    while let Some(container) = document
        .query_selector(CONTAINER_SELECTOR)
        .map_err(|e| PlacementError::dom("find containers", e))?
    {
        container.remove();
        removed += 1;
    }

    let released = lifecycle::registry().reset();
    log::debug!("Reset removed {} containers ({} registered)", removed, released);
    Ok(removed)
}

/// Undo a half-built container so the anchor can be shown again
pub fn discard(root: &Element, handle: FloatingHandle) {
    root.remove();
    lifecycle::registry().release(handle);
}

fn finalize(floating: FloatingBox, side: Side, anchor: AnchorBox) {
    let live = lifecycle::registry().is_live(floating.handle);
    if !live || !floating.is_attached() {
        log::debug!("Container #{} was reset before reveal", floating.handle.id());
        return;
    }

    let placement = engine::compute_offsets(side, &anchor, floating.size());
    if let Err(e) = floating.apply(&placement).and_then(|_| floating.reveal()) {
        log::error!("Failed to reveal container #{}: {}", floating.handle.id(), e);
    }
}
