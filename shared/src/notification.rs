use serde::{Deserialize, Serialize};

pub const FLASH_CONTAINER_CLASS: &str = "flash-messages";
pub const FLASH_MESSAGE_CLASS: &str = "flash-message";
pub const FLASH_TEXT_CLASS: &str = "flash-text";
pub const FLASH_CLOSE_CLASS: &str = "flash-close";

pub const SUBMIT_SUCCESS_MESSAGE: &str = "Form submitted successfully!";
pub const SUBMIT_FAILURE_MESSAGE: &str = "Error submitting form. Please try again.";

/// Severity tag of a flash message, rendered as `flash-{severity}`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Info,
    Success,
    Error,
}

impl Severity {
    /// Templates pass free-form strings; anything unknown is shown as info.
    pub fn parse_lossy(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "success" => Self::Success,
            "error" => Self::Error,
            _ => Self::Info,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    pub fn css_class(self) -> String {
        format!("{} flash-{}", FLASH_MESSAGE_CLASS, self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub severity: Severity,
}

impl Notice {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Error)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Success)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_severity_falls_back_to_info() {
        assert_eq!(Severity::parse_lossy("warning"), Severity::Info);
        assert_eq!(Severity::parse_lossy(""), Severity::Info);
        assert_eq!(Severity::parse_lossy(" Error "), Severity::Error);
        assert_eq!(Severity::parse_lossy("success"), Severity::Success);
    }

    #[test]
    fn css_class_carries_both_tags() {
        assert_eq!(Severity::Error.css_class(), "flash-message flash-error");
        assert_eq!(Severity::default().css_class(), "flash-message flash-info");
    }

    #[test]
    fn severity_deserializes_lowercase() {
        let severity: Severity = serde_json::from_str("\"success\"").unwrap();
        assert_eq!(severity, Severity::Success);
    }
}
