use shared::anchors::anchor_target;
use web_sys::{
    Document, HtmlAnchorElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};

use crate::dom::{self, query_all};
use crate::error::PageError;

/// In-page links scroll smoothly instead of jumping.
pub fn attach(document: &Document) -> Result<(), PageError> {
    for link in query_all::<HtmlAnchorElement>(document, "a[href^=\"#\"]")? {
        let document = document.clone();
        let source = link.clone();
        dom::listen(&link, "click", move |event| {
            event.prevent_default();
            let href = source.get_attribute("href").unwrap_or_default();
            let Some(target) = anchor_target(&href).and_then(|id| document.get_element_by_id(id)) else {
                return;
            };
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&options);
        })?;
    }
    Ok(())
}
