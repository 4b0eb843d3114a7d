//! Single-attempt AJAX submission of a form, with the submit button held busy
//! until the request settles.

use shared::notification::{SUBMIT_FAILURE_MESSAGE, SUBMIT_SUCCESS_MESSAGE};
use shared::{BusyControl, BusyGuard, Notice};
use thiserror::Error;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, HtmlFormElement, RequestInit, Response, Window};

use crate::error::describe_js;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubmitFailure {
    #[error("Network response was not ok (HTTP {0})")]
    Status(u16),
    #[error("request failed: {0}")]
    Network(String),
    #[error("success callback failed: {0}")]
    Callback(String),
}

/// Where the encoded form goes. Only success or failure matters; a
/// successful body is read and dropped.
#[allow(async_fn_in_trait)]
pub trait FormTransport {
    async fn post(&self) -> Result<(), SubmitFailure>;
}

/// Posts through `transport` and reports the outcome through `notify`.
///
/// The busy guard is released on every path, including a failing callback.
pub async fn run_submission<C, T, N, S>(
    button: Option<C>,
    busy_label: &str,
    transport: &T,
    mut notify: N,
    on_success: S,
) -> Result<(), SubmitFailure>
where
    C: BusyControl,
    T: FormTransport,
    N: FnMut(Notice),
    S: FnOnce() -> Result<(), SubmitFailure>,
{
    let _busy = button.map(|control| BusyGuard::acquire(control, busy_label));

    let outcome = match transport.post().await {
        Ok(()) => {
            notify(Notice::success(SUBMIT_SUCCESS_MESSAGE));
            on_success()
        }
        Err(failure) => Err(failure),
    };

    if outcome.is_err() {
        notify(Notice::error(SUBMIT_FAILURE_MESSAGE));
    }
    outcome
}

/// `fetch` POST of the form's data to its `action`.
pub struct FetchTransport {
    pub window: Window,
    pub form: HtmlFormElement,
}

impl FormTransport for FetchTransport {
    async fn post(&self) -> Result<(), SubmitFailure> {
        let network = |error: wasm_bindgen::JsValue| SubmitFailure::Network(describe_js(&error));

        let body = FormData::new_with_form(&self.form).map_err(network)?;
        let init = RequestInit::new();
        init.set_method("POST");
        init.set_body(&body);

        let response = JsFuture::from(self.window.fetch_with_str_and_init(&self.form.action(), &init))
            .await
            .map_err(network)?;
        let response: Response = response.dyn_into().map_err(network)?;
        if !response.ok() {
            return Err(SubmitFailure::Status(response.status()));
        }

        JsFuture::from(response.text().map_err(network)?)
            .await
            .map_err(network)?;
        Ok(())
    }
}
