use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

#[derive(Debug, Error)]
pub enum PageError {
    #[error("browser call failed: {0}")]
    Js(String),
    #[error("no window or document available")]
    NoDocument,
    #[error(transparent)]
    Config(#[from] shared::ConfigError),
}

impl From<JsValue> for PageError {
    fn from(value: JsValue) -> Self {
        Self::Js(describe_js(&value))
    }
}

impl From<PageError> for JsValue {
    fn from(error: PageError) -> Self {
        js_sys::Error::new(&error.to_string()).into()
    }
}

/// Best-effort readable text for a thrown JS value.
pub fn describe_js(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    format!("{:?}", value)
}
