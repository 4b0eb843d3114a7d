//! Advisory character counter under the complaint description.

use shared::CounterReading;
use shared::config::{ColorSection, CounterSection};
use shared::counter::{COUNTER_BASE_STYLE, COUNTER_CLASS};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlTextAreaElement};

use crate::dom::{self, set_style};
use crate::error::PageError;
use crate::logging;

pub fn attach(
    document: &Document,
    field: &HtmlTextAreaElement,
    rules: &CounterSection,
    colors: &ColorSection,
) -> Result<(), PageError> {
    let Some(parent) = field.parent_node() else {
        logging::warn("Description field is detached, counter skipped");
        return Ok(());
    };

    let counter: HtmlElement = document.create_element("div")?.unchecked_into();
    counter.set_class_name(COUNTER_CLASS);
    counter.style().set_css_text(COUNTER_BASE_STYLE);
    parent.append_child(&counter)?;

    refresh(&counter, field, rules, colors)?;

    let watched = field.clone();
    let rules = rules.clone();
    let colors = colors.clone();
    dom::listen(field, "input", move |_| {
        if let Err(error) = refresh(&counter, &watched, &rules, &colors) {
            logging::warn(&format!("Counter refresh failed: {}", error));
        }
    })
}

fn refresh(
    counter: &HtmlElement,
    field: &HtmlTextAreaElement,
    rules: &CounterSection,
    colors: &ColorSection,
) -> Result<(), PageError> {
    let reading = CounterReading::for_value(rules, &field.value());
    counter.set_text_content(Some(&reading.label()));
    let color = if reading.warning { &colors.error } else { &colors.muted_text };
    set_style(counter, "color", color)
}
