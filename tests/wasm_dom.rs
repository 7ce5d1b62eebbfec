//! Browser tests for the DOM shell
//!
//! Run with `wasm-pack test --headless --chrome`.

#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use ttip_wasm::content::ContentKind;
use ttip_wasm::dom::container::{px, FloatingBox, CONTAINER_SELECTOR};
use ttip_wasm::dom::{self, measure, Debouncer};
use ttip_wasm::lifecycle;
use ttip_wasm::models::{PinAdjustment, PinEdge, Placement, Side};
use ttip_wasm::placement::compute_offsets;
use ttip_wasm::TtipConfig;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn make_anchor(attrs: &[(&str, &str)]) -> Element {
    let doc = document();
    let anchor = doc.create_element("span").unwrap();
    anchor.set_text_content(Some("anchor"));
    for (name, value) in attrs {
        anchor.set_attribute(name, value).unwrap();
    }
    doc.body().unwrap().append_child(&anchor).unwrap();
    anchor
}

const POSITIONED: &str = "position:absolute;display:block;top:200px;left:200px;width:100px;height:20px";

/// Wait for pending timeouts of up to `ms` to fire
async fn sleep(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

fn style_of(element: &Element, property: &str) -> String {
    element
        .dyn_ref::<HtmlElement>()
        .unwrap()
        .style()
        .get_property_value(property)
        .unwrap()
}

#[wasm_bindgen_test]
fn test_show_tooltip_inserts_hidden_container() {
    dom::reset_all().unwrap();
    let anchor = make_anchor(&[("data-tooltip", "Hello")]);

    dom::show(&anchor, ContentKind::Tooltip, &TtipConfig::default()).unwrap();

    let container = anchor.query_selector(CONTAINER_SELECTOR).unwrap().unwrap();
    let content = container.query_selector(".ttip-content").unwrap().unwrap();
    assert_eq!(content.text_content().unwrap(), "Hello");
    assert!(container.query_selector(".before").unwrap().is_some());
    assert!(container.query_selector(".after").unwrap().is_some());
    assert!(container.get_attribute("style").unwrap().contains("hidden"));
}

#[wasm_bindgen_test]
fn test_invalid_position_fails_without_container() {
    dom::reset_all().unwrap();
    let anchor = make_anchor(&[("data-tooltip", "Hi"), ("data-ttip-position", "diagonal")]);

    assert!(dom::show(&anchor, ContentKind::Tooltip, &TtipConfig::default()).is_err());
    assert!(anchor.query_selector(CONTAINER_SELECTOR).unwrap().is_none());
}

#[wasm_bindgen_test]
fn test_popover_copies_template_markup() {
    dom::reset_all().unwrap();
    let doc = document();
    let template = doc.create_element("div").unwrap();
    template.set_attribute("data-popover-content", "help").unwrap();
    template.set_inner_html("<b>Help</b>");
    doc.body().unwrap().append_child(&template).unwrap();
    let anchor = make_anchor(&[("data-popover", "help")]);

    dom::show(&anchor, ContentKind::Popover, &TtipConfig::default()).unwrap();

    let content = anchor.query_selector(".ttip-content").unwrap().unwrap();
    assert_eq!(content.inner_html(), "<b>Help</b>");
}

#[wasm_bindgen_test]
fn test_missing_popover_template_gives_empty_box() {
    dom::reset_all().unwrap();
    let anchor = make_anchor(&[("data-popover", "nowhere")]);

    dom::show(&anchor, ContentKind::Popover, &TtipConfig::default()).unwrap();

    let content = anchor.query_selector(".ttip-content").unwrap().unwrap();
    assert_eq!(content.inner_html(), "");
}

#[wasm_bindgen_test]
fn test_reset_removes_every_container() {
    dom::reset_all().unwrap();
    let first = make_anchor(&[("data-tooltip", "one")]);
    let second = make_anchor(&[("data-tooltip", "two")]);
    dom::show(&first, ContentKind::Tooltip, &TtipConfig::default()).unwrap();
    dom::show(&second, ContentKind::Tooltip, &TtipConfig::default()).unwrap();

    assert_eq!(dom::reset_all().unwrap(), 2);
    assert!(document().query_selector(CONTAINER_SELECTOR).unwrap().is_none());
    assert_eq!(ttip_wasm::lifecycle::registry().live_count(), 0);
}

#[wasm_bindgen_test]
async fn test_reveal_applies_offsets_class_and_visibility() {
    dom::reset_all().unwrap();
    let anchor = make_anchor(&[
        ("data-tooltip", "Hello"),
        ("data-ttip-position", "bottom"),
        ("style", POSITIONED),
    ]);
    let anchor_box = measure::measure_anchor(&document(), &anchor).unwrap();

    dom::show(&anchor, ContentKind::Tooltip, &TtipConfig::default()).unwrap();
    sleep(20).await;

    let container = anchor.query_selector(CONTAINER_SELECTOR).unwrap().unwrap();
    let expected = compute_offsets(Side::Bottom, &anchor_box, measure::box_size(&container));
    assert_eq!(style_of(&container, "top"), px(expected.offset_top));
    assert_eq!(style_of(&container, "left"), px(expected.offset_left));
    assert!(container.class_list().contains("bottom"));
    assert_eq!(style_of(&container, "visibility"), "");
    assert_eq!(style_of(&container, "opacity"), "");
}

#[wasm_bindgen_test]
async fn test_reset_before_reveal_makes_reveal_a_no_op() {
    dom::reset_all().unwrap();
    let anchor = make_anchor(&[("data-tooltip", "Bye"), ("style", POSITIONED)]);

    let handle = dom::show(&anchor, ContentKind::Tooltip, &TtipConfig::default()).unwrap();
    assert_eq!(dom::reset_all().unwrap(), 1);
    sleep(20).await;

    assert!(!lifecycle::registry().is_live(handle));
    assert!(anchor.query_selector(CONTAINER_SELECTOR).unwrap().is_none());
    assert!(document().query_selector(CONTAINER_SELECTOR).unwrap().is_none());
}

#[wasm_bindgen_test]
fn test_pin_adjustment_clears_opposite_edge() {
    dom::reset_all().unwrap();
    let anchor = make_anchor(&[("style", POSITIONED)]);
    let handle = lifecycle::registry().register();
    let floating = FloatingBox::create(&document(), &anchor, handle, 120.0).unwrap();
    for pin in &floating.pins {
        pin.style().set_property("left", "12px").unwrap();
    }

    floating
        .apply(&Placement {
            side: Side::Top,
            offset_top: -40.0,
            offset_left: 5.0,
            pin: Some(PinAdjustment { edge: PinEdge::Right, value: 7.0 }),
        })
        .unwrap();

    for pin in &floating.pins {
        assert_eq!(pin.style().get_property_value("right").unwrap(), "7px");
        assert_eq!(pin.style().get_property_value("left").unwrap(), "initial");
    }
    assert!(floating.root.class_list().contains("top"));
    dom::reset_all().unwrap();
}

#[wasm_bindgen_test]
fn test_discarded_container_frees_anchor() {
    dom::reset_all().unwrap();
    let anchor = make_anchor(&[("data-tooltip", "again"), ("style", POSITIONED)]);
    let handle = dom::show(&anchor, ContentKind::Tooltip, &TtipConfig::default()).unwrap();
    let container = anchor.query_selector(CONTAINER_SELECTOR).unwrap().unwrap();

    dom::reveal::discard(&container, handle);

    assert!(!lifecycle::registry().is_live(handle));
    assert!(!dom::container::has_container(&anchor));
    dom::show(&anchor, ContentKind::Tooltip, &TtipConfig::default()).unwrap();
    assert!(dom::container::has_container(&anchor));
}

#[wasm_bindgen_test]
async fn test_debouncer_collapses_bursts() {
    let count = Rc::new(Cell::new(0));
    let counter = Rc::clone(&count);
    let debouncer = Debouncer::new(10, move || counter.set(counter.get() + 1));

    for _ in 0..3 {
        debouncer.call().unwrap();
    }
    sleep(40).await;
    assert_eq!(count.get(), 1);

    debouncer.call().unwrap();
    sleep(40).await;
    assert_eq!(count.get(), 2);
}

#[wasm_bindgen_test]
fn test_template_lookup_with_awkward_id() {
    dom::reset_all().unwrap();
    let doc = document();
    let id = "odd \"id\"\nline";
    let template = doc.create_element("div").unwrap();
    template.set_attribute("data-popover-content", id).unwrap();
    template.set_inner_html("<i>found</i>");
    doc.body().unwrap().append_child(&template).unwrap();
    let anchor = make_anchor(&[("data-popover", id)]);

    dom::show(&anchor, ContentKind::Popover, &TtipConfig::default()).unwrap();

    let content = anchor.query_selector(".ttip-content").unwrap().unwrap();
    assert_eq!(content.inner_html(), "<i>found</i>");
}
