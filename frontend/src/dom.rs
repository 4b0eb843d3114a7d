//! Thin helpers over `web_sys` used by every page binding.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    AddEventListenerOptions, Document, Element, Event, EventTarget, HtmlButtonElement,
    HtmlElement, NodeList,
};

use crate::error::PageError;

pub const SUBMIT_BUTTON_SELECTOR: &str = "button[type=\"submit\"]";

/// Roots a selector query can start from.
pub trait SelectorRoot {
    fn select_all(&self, selector: &str) -> Result<NodeList, JsValue>;
    fn select(&self, selector: &str) -> Result<Option<Element>, JsValue>;
}

impl SelectorRoot for Document {
    fn select_all(&self, selector: &str) -> Result<NodeList, JsValue> {
        self.query_selector_all(selector)
    }

    fn select(&self, selector: &str) -> Result<Option<Element>, JsValue> {
        self.query_selector(selector)
    }
}

impl SelectorRoot for Element {
    fn select_all(&self, selector: &str) -> Result<NodeList, JsValue> {
        self.query_selector_all(selector)
    }

    fn select(&self, selector: &str) -> Result<Option<Element>, JsValue> {
        self.query_selector(selector)
    }
}

/// All matches of `selector` under `root`, cast to `T`. Elements of another
/// type are skipped.
pub fn query_all<T: JsCast>(root: &impl SelectorRoot, selector: &str) -> Result<Vec<T>, PageError> {
    let nodes = root.select_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|index| nodes.get(index))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect())
}

pub fn query_one<T: JsCast>(root: &impl SelectorRoot, selector: &str) -> Result<Option<T>, PageError> {
    Ok(root
        .select(selector)?
        .and_then(|element| element.dyn_into::<T>().ok()))
}

pub fn submit_button(form: &Element) -> Result<Option<HtmlButtonElement>, PageError> {
    query_one(form, SUBMIT_BUTTON_SELECTOR)
}

pub fn set_style(element: &HtmlElement, property: &str, value: &str) -> Result<(), PageError> {
    element.style().set_property(property, value)?;
    Ok(())
}

/// Registers a listener for the lifetime of the page.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), PageError>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    // Page-lifetime listener; the browser drops it on navigation.
    closure.forget();
    Ok(())
}

/// Registers a listener the browser removes after its first call.
pub fn listen_once<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), PageError>
where
    F: FnOnce(Event) + 'static,
{
    let options = AddEventListenerOptions::new();
    options.set_once(true);
    let callback = Closure::once_into_js(handler);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        callback.unchecked_ref(),
        &options,
    )?;
    Ok(())
}
