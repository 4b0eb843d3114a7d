//! Submit gate for required fields, attached to every form on the page.

use std::rc::Rc;

use shared::RequiredCheck;
use shared::config::ColorSection;
use wasm_bindgen::JsCast;
use web_sys::{
    Element, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlSelectElement,
    HtmlTextAreaElement,
};

use crate::dom::{self, query_all, set_style};
use crate::error::PageError;
use crate::flash::FlashBoard;
use crate::logging;

pub fn attach(
    forms: &[HtmlFormElement],
    flash: &Rc<FlashBoard>,
    message: &str,
    colors: &ColorSection,
) -> Result<(), PageError> {
    for form in forms {
        let form_root: Element = form.clone().into();
        let flash = Rc::clone(flash);
        let message = message.to_string();
        let colors = colors.clone();
        dom::listen(form, "submit", move |event| {
            match mark_blank_fields(&form_root, &colors) {
                Ok(true) => {}
                Ok(false) => {
                    event.prevent_default();
                    flash.show(&message, shared::Severity::Error);
                }
                Err(error) => logging::error(&format!("Required field check failed: {}", error)),
            }
        })?;
    }
    Ok(())
}

/// Returns whether the form may submit. Blank fields get the error border and
/// a one-time listener that resets it on the next edit.
fn mark_blank_fields(form: &Element, colors: &ColorSection) -> Result<bool, PageError> {
    let fields: Vec<(HtmlElement, String)> = query_all::<HtmlElement>(form, "[required]")?
        .into_iter()
        .filter_map(|field| field_value(&field).map(|value| (field, value)))
        .collect();

    let check = RequiredCheck::evaluate(fields.iter().map(|(_, value)| value.as_str()));
    for &index in &check.blank {
        let field = &fields[index].0;
        set_style(field, "border-color", &colors.error)?;

        let reset_target = field.clone();
        let neutral = colors.field_border.clone();
        dom::listen_once(field, "input", move |_| {
            if let Err(error) = set_style(&reset_target, "border-color", &neutral) {
                logging::warn(&format!("Border reset failed: {}", error));
            }
        })?;
    }
    Ok(check.is_valid())
}

fn field_value(field: &HtmlElement) -> Option<String> {
    if let Some(input) = field.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    if let Some(textarea) = field.dyn_ref::<HtmlTextAreaElement>() {
        return Some(textarea.value());
    }
    field.dyn_ref::<HtmlSelectElement>().map(HtmlSelectElement::value)
}
