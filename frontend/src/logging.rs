//! Console output for page diagnostics, tagged so it is easy to filter
//! among the host page's own logging.

use wasm_bindgen::JsValue;

const TAG: &str = "[HostelComplaints]";

pub fn info(message: &str) {
    web_sys::console::log_1(&JsValue::from_str(&format!("{} {}", TAG, message)));
}

pub fn warn(message: &str) {
    web_sys::console::warn_1(&JsValue::from_str(&format!("{} {}", TAG, message)));
}

/// Developer-facing detail; the user only ever sees a notification.
pub fn error(message: &str) {
    web_sys::console::error_1(&JsValue::from_str(&format!("{} {}", TAG, message)));
}
