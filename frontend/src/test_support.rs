//! Browser fixtures for the `wasm-bindgen-test` modules.

use wasm_bindgen::JsCast;
use web_sys::{Document, Event, EventInit, HtmlElement};

pub fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

/// A fresh `<div>` under `<body>` holding `html`.
/// Tests remove it when they are done.
pub fn fixture(html: &str) -> HtmlElement {
    let document = document();
    let root: HtmlElement = document.create_element("div").unwrap().unchecked_into();
    root.set_inner_html(html);
    document.body().unwrap().append_child(&root).unwrap();
    root
}

pub fn find<T: JsCast>(root: &HtmlElement, selector: &str) -> T {
    root.query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("fixture has no {}", selector))
        .unchecked_into()
}

/// Dispatches a cancelable `submit` and returns it for inspection.
pub fn submit(target: &HtmlElement) -> Event {
    let init = EventInit::new();
    init.set_cancelable(true);
    let event = Event::new_with_event_init_dict("submit", &init).unwrap();
    target.dispatch_event(&event).unwrap();
    event
}

pub fn fire(target: &HtmlElement, event: &str) {
    target.dispatch_event(&Event::new(event).unwrap()).unwrap();
}

/// The colour as the browser serialises it back from a style declaration.
pub fn computed_color(color: &str) -> String {
    let scratch: HtmlElement = document().create_element("div").unwrap().unchecked_into();
    scratch.style().set_property("border-color", color).unwrap();
    scratch.style().get_property_value("border-color").unwrap()
}

pub fn border_color(element: &HtmlElement) -> String {
    element.style().get_property_value("border-color").unwrap()
}

pub fn flash_texts() -> Vec<String> {
    let nodes = document().query_selector_all(".flash-text").unwrap();
    (0..nodes.length())
        .filter_map(|index| nodes.get(index))
        .filter_map(|node| node.text_content())
        .collect()
}
