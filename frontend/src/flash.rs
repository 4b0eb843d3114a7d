//! Flash messages: fade-out lifecycle, close controls, Escape hiding and the
//! shared `notify` entry point.

use std::cell::RefCell;

use gloo_timers::future::TimeoutFuture;
use shared::config::FlashSection;
use shared::notification::{
    FLASH_CLOSE_CLASS, FLASH_CONTAINER_CLASS, FLASH_MESSAGE_CLASS, FLASH_TEXT_CLASS,
};
use shared::{Notice, Severity};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::dom::{self, query_all, query_one, set_style};
use crate::error::PageError;
use crate::logging;

/// Owner of the page's flash container. The container is looked up once and
/// created on first use when the server rendered none.
pub struct FlashBoard {
    document: Document,
    main_content: Option<Element>,
    container: RefCell<Option<Element>>,
    timing: FlashSection,
}

impl FlashBoard {
    pub fn new(document: &Document, timing: FlashSection) -> Result<Self, PageError> {
        let main_content = query_one::<Element>(document, ".main-content")?;
        let container = query_one::<Element>(document, &format!(".{}", FLASH_CONTAINER_CLASS))?;
        Ok(Self {
            document: document.clone(),
            main_content,
            container: RefCell::new(container),
            timing,
        })
    }

    /// Schedules fade and removal for every message already on the page.
    pub fn expire_rendered_messages(&self) -> Result<(), PageError> {
        for message in query_all::<HtmlElement>(&self.document, &format!(".{}", FLASH_MESSAGE_CLASS))? {
            self.schedule_expiry(message);
        }
        Ok(())
    }

    /// Close buttons rendered by the server and created by `notify` are
    /// handled by one delegated listener.
    pub fn attach_close_controls(&self) -> Result<(), PageError> {
        dom::listen(&self.document, "click", |event| {
            let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
                return;
            };
            let Ok(Some(close)) = target.closest(&format!(".{}", FLASH_CLOSE_CLASS)) else {
                return;
            };
            if let Ok(Some(message)) = close.closest(&format!(".{}", FLASH_MESSAGE_CLASS)) {
                message.remove();
            }
        })
    }

    /// Hides, without removing, every flash message currently in the document.
    pub fn hide_all(&self) -> Result<(), PageError> {
        for message in query_all::<HtmlElement>(&self.document, &format!(".{}", FLASH_MESSAGE_CLASS))? {
            set_style(&message, "display", "none")?;
        }
        Ok(())
    }

    /// Appends a message and schedules its expiry. The returned element is
    /// already in the document.
    pub fn notify(&self, notice: &Notice) -> Result<HtmlElement, PageError> {
        let message = self.build_message(notice)?;
        self.container()?.append_child(&message)?;
        self.schedule_expiry(message.clone());
        Ok(message)
    }

    /// `notify` for callers that cannot do anything about a DOM failure.
    pub fn show(&self, message: &str, severity: Severity) {
        if let Err(error) = self.notify(&Notice::new(message, severity)) {
            logging::error(&format!("Failed to show notification '{}': {}", message, error));
        }
    }

    fn build_message(&self, notice: &Notice) -> Result<HtmlElement, PageError> {
        let message: HtmlElement = self.document.create_element("div")?.unchecked_into();
        message.set_class_name(&notice.severity.css_class());

        let text = self.document.create_element("span")?;
        text.set_class_name(FLASH_TEXT_CLASS);
        text.set_text_content(Some(&notice.message));
        message.append_child(&text)?;

        let close = self.document.create_element("button")?;
        close.set_class_name(FLASH_CLOSE_CLASS);
        close.set_attribute("type", "button")?;
        close.set_text_content(Some("\u{00d7}"));
        message.append_child(&close)?;

        Ok(message)
    }

    fn container(&self) -> Result<Element, PageError> {
        if let Some(container) = self.container.borrow().as_ref() {
            if container.is_connected() {
                return Ok(container.clone());
            }
        }

        let container = self.document.create_element("div")?;
        container.set_class_name(FLASH_CONTAINER_CLASS);
        match &self.main_content {
            Some(main_content) => {
                main_content.insert_before(&container, main_content.first_child().as_ref())?;
            }
            None => {
                logging::warn("No .main-content on this page, flash messages go to <body>");
                let body = self.document.body().ok_or(PageError::NoDocument)?;
                body.append_child(&container)?;
            }
        }
        self.container.replace(Some(container.clone()));
        Ok(container)
    }

    fn schedule_expiry(&self, message: HtmlElement) {
        let FlashSection {
            fade_delay_ms,
            removal_delay_ms,
        } = self.timing;
        wasm_bindgen_futures::spawn_local(async move {
            TimeoutFuture::new(fade_delay_ms).await;
            if let Err(error) = set_style(&message, "opacity", "0") {
                logging::warn(&format!("Flash fade failed: {}", error));
            }
            TimeoutFuture::new(removal_delay_ms).await;
            message.remove();
        });
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use crate::test_support::document;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn notification_fades_then_leaves_the_document() {
        let board = FlashBoard::new(&document(), FlashSection::default()).unwrap();
        let message = board.notify(&Notice::success("Saved")).unwrap();
        assert!(message.is_connected());
        assert_eq!(message.class_name(), "flash-message flash-success");

        TimeoutFuture::new(5100).await;
        assert!(message.is_connected());
        assert_eq!(message.style().get_property_value("opacity").unwrap(), "0");

        TimeoutFuture::new(200).await;
        assert!(!message.is_connected());
    }

    #[wasm_bindgen_test]
    fn message_text_is_not_parsed_as_markup() {
        let board = FlashBoard::new(&document(), FlashSection::default()).unwrap();
        let message = board.notify(&Notice::error("<b>bold</b>")).unwrap();
        assert_eq!(message.query_selector("b").unwrap(), None);
        assert_eq!(
            message.query_selector(".flash-text").unwrap().unwrap().text_content().as_deref(),
            Some("<b>bold</b>")
        );
        message.remove();
    }

    #[wasm_bindgen_test]
    fn close_control_removes_its_message() {
        let board = FlashBoard::new(&document(), FlashSection::default()).unwrap();
        board.attach_close_controls().unwrap();
        let message = board.notify(&Notice::new("Closable", Severity::Info)).unwrap();

        let close: HtmlElement = message
            .query_selector(".flash-close")
            .unwrap()
            .unwrap()
            .unchecked_into();
        close.click();
        assert!(!message.is_connected());
    }

    #[wasm_bindgen_test]
    fn hide_all_keeps_messages_in_place() {
        let board = FlashBoard::new(&document(), FlashSection::default()).unwrap();
        let message = board.notify(&Notice::new("Hidden", Severity::Info)).unwrap();
        board.hide_all().unwrap();
        assert_eq!(message.style().get_property_value("display").unwrap(), "none");
        assert!(message.is_connected());
        message.remove();
    }
}
