//! Confirmation before a complaint's status changes.

use gloo_timers::callback::Timeout;
use shared::BusyGuard;
use shared::config::StatusSection;
use shared::status::confirmation_prompt;
use web_sys::{Element, HtmlFormElement, HtmlInputElement, HtmlSelectElement, Window};

use crate::busy::SubmitButton;
use crate::dom::{self, query_one, submit_button};
use crate::error::PageError;
use crate::logging;

pub fn attach(window: &Window, forms: &[HtmlFormElement], rules: &StatusSection) -> Result<(), PageError> {
    for form in forms {
        let window = window.clone();
        let form_root: Element = form.clone().into();
        let rules = rules.clone();
        dom::listen(form, "submit", move |event| {
            // A failed required-field check already cancelled this submit.
            if event.default_prevented() {
                return;
            }
            match confirm_status_change(&window, &form_root, &rules) {
                Ok(true) => {}
                Ok(false) => event.prevent_default(),
                Err(error) => logging::error(&format!("Status confirmation failed: {}", error)),
            }
        })?;
    }
    Ok(())
}

fn confirm_status_change(window: &Window, form: &Element, rules: &StatusSection) -> Result<bool, PageError> {
    let Some(select) = query_one::<HtmlSelectElement>(form, ".status-select")? else {
        logging::warn("Status form without a .status-select, submitting unconfirmed");
        return Ok(true);
    };
    let new_status = select.value();

    if !window.confirm_with_message(&confirmation_prompt(&new_status))? {
        return Ok(false);
    }

    let complaint_id = query_one::<HtmlInputElement>(form, "input[name=\"complaint_id\"]")?
        .map(|input| input.value())
        .unwrap_or_default();
    logging::info(&format!("Updating complaint {} to '{}'", complaint_id, new_status));

    // Cosmetic only: the native submit navigates away, usually before this fires.
    if let Some(button) = submit_button(form)? {
        let busy = BusyGuard::acquire(SubmitButton(button), &rules.busy_label);
        Timeout::new(rules.busy_reset_ms, move || drop(busy)).forget();
    }
    Ok(true)
}
