//! Image upload guard and the data-URL preview shown under the file input.

use std::cell::RefCell;
use std::rc::Rc;

use futures::channel::oneshot;
use shared::config::UploadSection;
use shared::{FileCandidate, Severity, check_upload};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, File, FileReader, HtmlElement, HtmlImageElement, HtmlInputElement};

use crate::dom::{self, query_all};
use crate::error::{PageError, describe_js};
use crate::flash::FlashBoard;
use crate::logging;

pub const PREVIEW_CLASS: &str = "image-preview";

const PREVIEW_BLOCK_STYLE: &str =
    "margin-top: 1rem; padding: 1rem; border: 2px dashed #ddd; border-radius: 5px; text-align: center;";
const PREVIEW_CAPTION_STYLE: &str = "margin-top: 0.5rem; color: #666; font-size: 0.875rem;";

/// Renders previews next to one file input, replacing any earlier preview.
pub struct ImagePreview {
    document: Document,
    input: HtmlInputElement,
    max_px: u32,
}

impl ImagePreview {
    pub fn new(document: &Document, input: HtmlInputElement, max_px: u32) -> Self {
        Self {
            document: document.clone(),
            input,
            max_px,
        }
    }

    /// Reads `file` and inserts the preview once the read completes.
    /// A newer selection does not cancel an older read; whichever finishes
    /// last wins, since stale previews are removed before each insert.
    pub async fn show(&self, file: File) -> Result<(), PageError> {
        let data_url = read_data_url(&file).await?;
        self.replace_preview(&data_url, &file.name())
    }

    fn replace_preview(&self, data_url: &str, file_name: &str) -> Result<(), PageError> {
        for stale in query_all::<HtmlElement>(&self.document, &format!(".{}", PREVIEW_CLASS))? {
            stale.remove();
        }

        let preview: HtmlElement = self.document.create_element("div")?.unchecked_into();
        preview.set_class_name(PREVIEW_CLASS);
        preview.style().set_css_text(PREVIEW_BLOCK_STYLE);

        let image: HtmlImageElement = self.document.create_element("img")?.unchecked_into();
        image.set_src(data_url);
        image.set_alt(file_name);
        image.style().set_css_text(&format!(
            "max-width: {px}px; max-height: {px}px; border-radius: 5px;",
            px = self.max_px
        ));
        preview.append_child(&image)?;

        let caption: HtmlElement = self.document.create_element("p")?.unchecked_into();
        caption.style().set_css_text(PREVIEW_CAPTION_STYLE);
        caption.set_text_content(Some(file_name));
        preview.append_child(&caption)?;

        match self.input.parent_node() {
            Some(parent) => {
                parent.append_child(&preview)?;
            }
            None => logging::warn("Image input is detached, preview skipped"),
        }
        Ok(())
    }
}

pub fn candidate(file: &File) -> FileCandidate {
    FileCandidate {
        name: file.name(),
        size: file.size() as u64,
        mime: file.type_(),
    }
}

/// Validates the first selected file on every change; invalid selections are
/// cleared before the user is told why.
pub fn attach(
    input: &HtmlInputElement,
    preview: &Rc<ImagePreview>,
    flash: &Rc<FlashBoard>,
    rules: &UploadSection,
) -> Result<(), PageError> {
    let guarded = input.clone();
    let preview = Rc::clone(preview);
    let flash = Rc::clone(flash);
    let rules = rules.clone();
    dom::listen(input, "change", move |_| {
        let Some(file) = guarded.files().and_then(|files| files.get(0)) else {
            return;
        };

        if let Err(rejection) = check_upload(&rules, &candidate(&file)) {
            guarded.set_value("");
            flash.show(&rejection.to_string(), Severity::Error);
            logging::info(&format!("Rejected upload '{}': {:?}", file.name(), rejection));
            return;
        }

        let preview = Rc::clone(&preview);
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(error) = preview.show(file).await {
                logging::error(&format!("Image preview failed: {}", error));
            }
        });
    })
}

/// Resolves with the file's data URL once the `FileReader` settles.
pub async fn read_data_url(file: &File) -> Result<String, PageError> {
    let reader = FileReader::new()?;
    let (sender, receiver) = oneshot::channel::<Result<(), String>>();
    let sender = Rc::new(RefCell::new(Some(sender)));

    let on_load = {
        let sender = Rc::clone(&sender);
        Closure::<dyn FnMut()>::new(move || {
            if let Some(sender) = sender.borrow_mut().take() {
                let _ = sender.send(Ok(()));
            }
        })
    };
    let on_error = {
        let sender = Rc::clone(&sender);
        let reader = reader.clone();
        Closure::<dyn FnMut()>::new(move || {
            let detail = reader
                .error()
                .map(|error| error.message())
                .unwrap_or_else(|| "unknown read error".to_string());
            if let Some(sender) = sender.borrow_mut().take() {
                let _ = sender.send(Err(detail));
            }
        })
    };
    reader.set_onload(Some(on_load.as_ref().unchecked_ref()));
    reader.set_onerror(Some(on_error.as_ref().unchecked_ref()));
    reader.read_as_data_url(file)?;

    let settled = receiver
        .await
        .map_err(|_| PageError::Js("file read was abandoned".to_string()))?;
    reader.set_onload(None);
    reader.set_onerror(None);
    settled.map_err(PageError::Js)?;

    let result = reader.result()?;
    result
        .as_string()
        .ok_or_else(|| PageError::Js(format!("unexpected read result: {}", describe_js(&result))))
}
