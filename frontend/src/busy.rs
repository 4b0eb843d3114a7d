use shared::BusyControl;
use web_sys::HtmlButtonElement;

/// A form's submit button as a busy-state target.
pub struct SubmitButton(pub HtmlButtonElement);

impl BusyControl for SubmitButton {
    fn label(&self) -> String {
        self.0.text_content().unwrap_or_default()
    }

    fn set_label(&self, label: &str) {
        self.0.set_text_content(Some(label));
    }

    fn set_disabled(&self, disabled: bool) {
        self.0.set_disabled(disabled);
    }
}
