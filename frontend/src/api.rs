use std::rc::Rc;

use js_sys::{Function, Object, Promise, Reflect};
use shared::Severity;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;
use web_sys::{File, HtmlFormElement, Window};

use crate::error::{PageError, describe_js};
use crate::logging;
use crate::page::Page;

pub const GLOBAL_NAME: &str = "HostelComplaints";

/// Publishes the template-facing helpers on `window.HostelComplaints`.
pub fn expose(window: &Window, page: &Rc<Page>) -> Result<(), PageError> {
    let api = Object::new();

    let notify = {
        let page = Rc::clone(page);
        Closure::<dyn Fn(JsValue, JsValue)>::new(move |message: JsValue, severity: JsValue| {
            let message = message.as_string().unwrap_or_else(|| describe_js(&message));
            let severity = severity
                .as_string()
                .map(|value| Severity::parse_lossy(&value))
                .unwrap_or_default();
            page.notify(&message, severity);
        })
    };
    Reflect::set(&api, &"notify".into(), notify.as_ref().unchecked_ref())?;
    Reflect::set(&api, &"showNotification".into(), notify.as_ref().unchecked_ref())?;
    notify.forget();

    let submit_form_ajax = {
        let page = Rc::clone(page);
        Closure::<dyn Fn(JsValue, JsValue) -> Promise>::new(move |form: JsValue, on_success: JsValue| {
            let page = Rc::clone(&page);
            future_to_promise(async move {
                let form = form
                    .dyn_into::<HtmlFormElement>()
                    .map_err(|_| JsValue::from(js_sys::TypeError::new("submitFormAjax expects a <form>")))?;
                let on_success = on_success.dyn_into::<Function>().ok();
                let submitted = page.submit_form(form, on_success).await.is_ok();
                Ok(JsValue::from_bool(submitted))
            })
        })
    };
    Reflect::set(&api, &"submitFormAjax".into(), submit_form_ajax.as_ref().unchecked_ref())?;
    submit_form_ajax.forget();

    let show_image_preview = {
        let page = Rc::clone(page);
        Closure::<dyn Fn(JsValue) -> Promise>::new(move |file: JsValue| {
            let page = Rc::clone(&page);
            future_to_promise(async move {
                let file = file
                    .dyn_into::<File>()
                    .map_err(|_| JsValue::from(js_sys::TypeError::new("showImagePreview expects a File")))?;
                page.show_image_preview(file).await?;
                Ok(JsValue::UNDEFINED)
            })
        })
    };
    Reflect::set(&api, &"showImagePreview".into(), show_image_preview.as_ref().unchecked_ref())?;
    show_image_preview.forget();

    Reflect::set(window, &GLOBAL_NAME.into(), &api)?;
    logging::info(&format!("Helpers exposed on window.{}", GLOBAL_NAME));
    Ok(())
}
