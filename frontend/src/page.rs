//! The page object: element references resolved once at document ready and
//! every listener wired from them.

use std::rc::Rc;

use js_sys::Function;
use shared::PageConfig;
use wasm_bindgen::JsValue;
use web_sys::{
    Document, File, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement, Window,
};

use crate::ajax::{FetchTransport, SubmitFailure, run_submission};
use crate::busy::SubmitButton;
use crate::dom::{query_all, query_one, submit_button};
use crate::error::{PageError, describe_js};
use crate::flash::FlashBoard;
use crate::upload::ImagePreview;
use crate::{anchors, counter, filters, forms, logging, shortcuts, status_forms, upload};

pub const CONFIG_ELEMENT_ID: &str = "hostel-complaints-config";

pub struct Page {
    window: Window,
    config: PageConfig,
    flash: Rc<FlashBoard>,
    preview: Option<Rc<ImagePreview>>,
}

impl Page {
    /// Only a missing document or flash board is fatal. Every other binding
    /// that fails is logged and skipped, so `notify` keeps working.
    pub fn attach(window: &Window) -> Result<Rc<Self>, PageError> {
        let document = window.document().ok_or(PageError::NoDocument)?;
        let config = load_config(&document);

        let flash = Rc::new(FlashBoard::new(&document, config.flash.clone())?);
        bind(
            "flash lifecycle",
            flash
                .expire_rendered_messages()
                .and_then(|()| flash.attach_close_controls()),
        );

        let all_forms = query_all::<HtmlFormElement>(&document, "form").unwrap_or_else(|error| {
            logging::error(&format!("Form lookup failed: {}", error));
            Vec::new()
        });
        bind(
            "required-field gate",
            forms::attach(
                &all_forms,
                &flash,
                &config.forms.required_fields_message,
                &config.colors,
            ),
        );

        let preview = match query_one::<HtmlInputElement>(&document, "#image") {
            Ok(Some(input)) => {
                let preview = Rc::new(ImagePreview::new(
                    &document,
                    input.clone(),
                    config.upload.preview_max_px,
                ));
                bind(
                    "upload guard",
                    upload::attach(&input, &preview, &flash, &config.upload),
                );
                Some(preview)
            }
            Ok(None) => None,
            Err(error) => {
                logging::error(&format!("Image input lookup failed: {}", error));
                None
            }
        };

        let confirmable = query_all::<HtmlFormElement>(&document, ".status-form").unwrap_or_else(|error| {
            logging::error(&format!("Status form lookup failed: {}", error));
            Vec::new()
        });
        bind(
            "status confirmation",
            status_forms::attach(window, &confirmable, &config.status),
        );

        bind(
            "filter auto-submit",
            query_one::<HtmlFormElement>(&document, ".filters-form").and_then(|form| match form {
                Some(form) => filters::attach(&form, &config.filters),
                None => Ok(()),
            }),
        );

        bind(
            "character counter",
            query_one::<HtmlTextAreaElement>(&document, "#description").and_then(|field| match field {
                Some(field) => counter::attach(&document, &field, &config.counter, &config.colors),
                None => Ok(()),
            }),
        );

        bind("smooth anchors", anchors::attach(&document));
        bind("keyboard shortcuts", shortcuts::attach(&document, &flash));

        logging::info(&format!(
            "Page interactions ready ({} form(s), {} status form(s), image upload: {})",
            all_forms.len(),
            confirmable.len(),
            preview.is_some()
        ));

        Ok(Rc::new(Self {
            window: window.clone(),
            config,
            flash,
            preview,
        }))
    }

    pub fn notify(&self, message: &str, severity: shared::Severity) {
        self.flash.show(message, severity);
    }

    pub async fn show_image_preview(&self, file: File) -> Result<(), PageError> {
        match &self.preview {
            Some(preview) => preview.show(file).await,
            None => {
                logging::warn("showImagePreview called on a page without #image");
                Ok(())
            }
        }
    }

    /// One POST attempt; failures end up as a notification plus a console
    /// line, never as a stuck button.
    pub async fn submit_form(
        &self,
        form: HtmlFormElement,
        on_success: Option<Function>,
    ) -> Result<(), SubmitFailure> {
        let button = match submit_button(&form) {
            Ok(button) => button.map(SubmitButton),
            Err(error) => {
                logging::warn(&format!("Submit button lookup failed: {}", error));
                None
            }
        };
        let transport = FetchTransport {
            window: self.window.clone(),
            form,
        };

        let outcome = run_submission(
            button,
            &self.config.forms.submitting_label,
            &transport,
            |notice| self.flash.show(&notice.message, notice.severity),
            || match on_success {
                Some(callback) => callback
                    .call0(&JsValue::NULL)
                    .map(|_| ())
                    .map_err(|error| SubmitFailure::Callback(describe_js(&error))),
                None => Ok(()),
            },
        )
        .await;

        if let Err(failure) = &outcome {
            logging::error(&format!("Error: {}", failure));
        }
        outcome
    }
}

fn bind(binding: &str, attached: Result<(), PageError>) {
    if let Err(error) = attached {
        logging::error(&format!("{} not attached: {}", binding, error));
    }
}

/// Reads the optional JSON config block. A broken block is logged and the
/// defaults apply.
fn load_config(document: &Document) -> PageConfig {
    let Some(text) = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content())
    else {
        return PageConfig::default();
    };

    match PageConfig::from_json(&text) {
        Ok(config) => config,
        Err(error) => {
            logging::error(&format!("{}, using defaults", PageError::from(error)));
            PageConfig::default()
        }
    }
}
