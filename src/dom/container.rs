//! Floating container elements
//!
//! Layout of a container, inserted as the last child of its anchor:
//!
//! ```html
//! <div class="ttip-container {side}" data-ttip-id="7">
//!   <div class="before"></div>   <!-- pin -->
//!   <div class="after"></div>    <!-- pin -->
//!   <div class="ttip-content">...</div>
//! </div>
//! ```

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::lifecycle::FloatingHandle;
use crate::models::{Placement, Size};
use crate::placement::{PlacementError, PADDING};

use super::measure;

pub const CONTAINER_CLASS: &str = "ttip-container";
pub const CONTAINER_SELECTOR: &str = ".ttip-container";
pub const CONTENT_CLASS: &str = "ttip-content";
pub const PIN_CLASSES: [&str; 2] = ["before", "after"];
pub const HANDLE_ATTR: &str = "data-ttip-id";

/// A floating container and its parts
pub struct FloatingBox {
    pub handle: FloatingHandle,
    pub root: HtmlElement,
    pub content: HtmlElement,
    pub pins: Vec<HtmlElement>,
}

impl FloatingBox {
    /// Create a hidden container of the given width inside `anchor`
    pub fn create(
        document: &Document,
        anchor: &Element,
        handle: FloatingHandle,
        width: f64,
    ) -> Result<FloatingBox, PlacementError> {
        let root = create_div(document, CONTAINER_CLASS)?;
        root.set_attribute(HANDLE_ATTR, &handle.id().to_string())
            .map_err(|e| PlacementError::dom("set container id", e))?;
        set_style(&root, "visibility", "hidden")?;
        set_style(&root, "opacity", "0")?;
        set_style(&root, "width", &px(width))?;

        let mut pins = Vec::with_capacity(PIN_CLASSES.len());
        for class in PIN_CLASSES {
            let pin = create_div(document, class)?;
            append(&root, &pin)?;
            pins.push(pin);
        }

        let content = create_div(document, CONTENT_CLASS)?;
        append(&root, &content)?;
        append(anchor, &root)?;

        Ok(FloatingBox { handle, root, content, pins })
    }

    /// Shrink or grow the container to its content plus padding
    pub fn fit_to_content(&self) -> Result<(), PlacementError> {
        let content_width = measure::element_rect(&self.content).width;
        set_style(&self.root, "width", &px(content_width + PADDING * 2.0))
    }

    /// Current rendered size of the container
    pub fn size(&self) -> Size {
        measure::box_size(&self.root)
    }

    /// Apply offsets, the side class and the pin adjustment
    pub fn apply(&self, placement: &Placement) -> Result<(), PlacementError> {
        self.root
            .class_list()
            .add_1(placement.side.css_class())
            .map_err(|e| PlacementError::dom("add side class", e))?;
        set_style(&self.root, "top", &px(placement.offset_top))?;
        set_style(&self.root, "left", &px(placement.offset_left))?;

        if let Some(pin) = placement.pin {
            for element in &self.pins {
                set_style(element, pin.edge.as_css(), &px(pin.value))?;
                set_style(element, pin.edge.cleared().as_css(), "initial")?;
            }
        }
        Ok(())
    }

    /// Drop the inline visibility overrides set at creation
    pub fn reveal(&self) -> Result<(), PlacementError> {
        let style = self.root.style();
        for property in ["visibility", "opacity"] {
            style
                .remove_property(property)
                .map_err(|e| PlacementError::dom("reveal container", e))?;
        }
        Ok(())
    }

    /// False once a reset has removed the container from the page
    pub fn is_attached(&self) -> bool {
        self.root.is_connected()
    }
}

/// True if the anchor already holds a container
pub fn has_container(anchor: &Element) -> bool {
    matches!(anchor.query_selector(CONTAINER_SELECTOR), Ok(Some(_)))
}

/// CSS pixel length
pub fn px(value: f64) -> String {
    format!("{}px", value)
}

fn create_div(document: &Document, class: &str) -> Result<HtmlElement, PlacementError> {
    let element = document
        .create_element("div")
        .map_err(|e| PlacementError::dom("create div", e))?;
    element.set_class_name(class);
    element
        .dyn_into::<HtmlElement>()
        .map_err(|_| PlacementError::Dom("created div is not an HtmlElement".to_string()))
}

fn append(parent: &Element, child: &Element) -> Result<(), PlacementError> {
    parent
        .append_child(child)
        .map(|_| ())
        .map_err(|e| PlacementError::dom("append child", e))
}

fn set_style(element: &HtmlElement, property: &str, value: &str) -> Result<(), PlacementError> {
    element
        .style()
        .set_property(property, value)
        .map_err(|e| PlacementError::dom(property, e))
}
