/// Modifier state and key name of a `keydown` event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyChord {
    pub key: String,
    pub ctrl: bool,
    pub meta: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    /// Ctrl+Enter / Cmd+Enter inside a form.
    SubmitActiveForm,
    /// Escape hides every flash message.
    HideFlashMessages,
}

impl KeyChord {
    pub fn shortcut(&self) -> Option<Shortcut> {
        match self.key.as_str() {
            "Enter" if self.ctrl || self.meta => Some(Shortcut::SubmitActiveForm),
            "Escape" => Some(Shortcut::HideFlashMessages),
            _ => None,
        }
    }
}
