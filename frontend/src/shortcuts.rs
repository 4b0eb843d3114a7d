use std::rc::Rc;

use shared::{KeyChord, Shortcut};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, KeyboardEvent};

use crate::dom::{self, query_one, submit_button};
use crate::error::PageError;
use crate::flash::FlashBoard;
use crate::logging;

pub fn attach(document: &Document, flash: &Rc<FlashBoard>) -> Result<(), PageError> {
    let root = document.clone();
    let flash = Rc::clone(flash);
    dom::listen(document, "keydown", move |event| {
        let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        let chord = KeyChord {
            key: key_event.key(),
            ctrl: key_event.ctrl_key(),
            meta: key_event.meta_key(),
        };
        let outcome = match chord.shortcut() {
            Some(Shortcut::SubmitActiveForm) => submit_focused_form(&root),
            Some(Shortcut::HideFlashMessages) => flash.hide_all(),
            None => Ok(()),
        };
        if let Err(error) = outcome {
            logging::warn(&format!("Shortcut {:?} failed: {}", chord.key, error));
        }
    })
}

/// Clicks the submit button so the form's own submit listeners still run.
fn submit_focused_form(document: &Document) -> Result<(), PageError> {
    let Some(form) = query_one::<Element>(document, "form:focus-within")? else {
        return Ok(());
    };
    if let Some(button) = submit_button(&form)? {
        button.click();
    }
    Ok(())
}
