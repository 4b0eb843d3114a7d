//! Page interactions for the hostel complaint desk: flash messages, form
//! gates, image upload checks, status confirmation, filter auto-submit, the
//! description counter, smooth anchors, keyboard shortcuts and AJAX submit.

use wasm_bindgen::prelude::*;
use web_sys::Window;

mod ajax;
mod anchors;
mod api;
mod busy;
mod counter;
mod dom;
mod error;
mod filters;
mod flash;
mod forms;
mod logging;
mod page;
mod shortcuts;
mod status_forms;
mod upload;

#[cfg(all(test, target_arch = "wasm32"))]
mod test_support;

use error::PageError;
use page::Page;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let window = web_sys::window().ok_or(PageError::NoDocument)?;
    let document = window.document().ok_or(PageError::NoDocument)?;

    if document.ready_state() == "loading" {
        dom::listen_once(&document, "DOMContentLoaded", move |_| boot(&window))?;
    } else {
        boot(&window);
    }
    Ok(())
}

fn boot(window: &Window) {
    let attached = Page::attach(window).and_then(|page| api::expose(window, &page));
    if let Err(error) = attached {
        logging::error(&format!("Page interactions failed to start: {}", error));
    }
}
