use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MIB: u64 = 1024 * 1024;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid JSON page config: {0}")]
    Json(#[from] serde_json::Error),
}

// ===== PAGE CONFIG =====

/// Every tunable of the page interactions. Missing keys fall back to the
/// defaults, so a host page only has to spell out what it overrides.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct PageConfig {
    pub flash: FlashSection,
    pub forms: FormsSection,
    pub upload: UploadSection,
    pub status: StatusSection,
    pub filters: FiltersSection,
    pub counter: CounterSection,
    pub colors: ColorSection,
}

impl PageConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct FlashSection {
    /// Visible time before the fade starts.
    pub fade_delay_ms: u32,
    /// Must match the CSS opacity transition.
    pub removal_delay_ms: u32,
}

impl Default for FlashSection {
    fn default() -> Self {
        Self {
            fade_delay_ms: 5000,
            removal_delay_ms: 300,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct FormsSection {
    pub required_fields_message: String,
    /// Submit label while an AJAX submission is in flight.
    pub submitting_label: String,
}

impl Default for FormsSection {
    fn default() -> Self {
        Self {
            required_fields_message: "Please fill in all required fields.".to_string(),
            submitting_label: "Submitting...".to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct UploadSection {
    pub max_bytes: u64,
    pub allowed_mime_types: Vec<String>,
    pub preview_max_px: u32,
}

impl Default for UploadSection {
    fn default() -> Self {
        Self {
            max_bytes: 16 * MIB,
            allowed_mime_types: ["image/jpeg", "image/jpg", "image/png", "image/gif"]
                .into_iter()
                .map(String::from)
                .collect(),
            preview_max_px: 200,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct StatusSection {
    pub busy_label: String,
    pub busy_reset_ms: u32,
}

impl Default for StatusSection {
    fn default() -> Self {
        Self {
            busy_label: "Updating...".to_string(),
            busy_reset_ms: 2000,
        }
    }
}

/// How filter changes are coalesced before the form auto-submits.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum DebounceScope {
    /// Every change schedules its own submit; nothing is cancelled.
    #[default]
    PerControl,
    /// Only the latest change inside the delay window submits.
    PerForm,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct FiltersSection {
    pub auto_submit_delay_ms: u32,
    pub debounce: DebounceScope,
}

impl Default for FiltersSection {
    fn default() -> Self {
        Self {
            auto_submit_delay_ms: 500,
            debounce: DebounceScope::PerControl,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct CounterSection {
    pub max_length: u32,
    pub warning_below: i64,
}

impl Default for CounterSection {
    fn default() -> Self {
        Self {
            max_length: 1000,
            warning_below: 50,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ColorSection {
    pub error: String,
    pub field_border: String,
    pub muted_text: String,
}

impl Default for ColorSection {
    fn default() -> Self {
        Self {
            error: "#dc3545".to_string(),
            field_border: "#ddd".to_string(),
            muted_text: "#666".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_page_constants() {
        let config = PageConfig::default();
        assert_eq!(config.flash.fade_delay_ms, 5000);
        assert_eq!(config.flash.removal_delay_ms, 300);
        assert_eq!(config.upload.max_bytes, 16 * 1024 * 1024);
        assert_eq!(config.upload.allowed_mime_types.len(), 4);
        assert_eq!(config.status.busy_reset_ms, 2000);
        assert_eq!(config.filters.auto_submit_delay_ms, 500);
        assert_eq!(config.filters.debounce, DebounceScope::PerControl);
        assert_eq!(config.counter.max_length, 1000);
        assert_eq!(config.counter.warning_below, 50);
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let config =
            PageConfig::from_json(r#"{"filters": {"debounce": "per-form"}, "counter": {"max_length": 500}}"#)
                .unwrap();
        assert_eq!(config.filters.debounce, DebounceScope::PerForm);
        assert_eq!(config.filters.auto_submit_delay_ms, 500);
        assert_eq!(config.counter.max_length, 500);
        assert_eq!(config.counter.warning_below, 50);
        assert_eq!(config.flash, FlashSection::default());
    }

    #[test]
    fn empty_json_object_is_default() {
        assert_eq!(PageConfig::from_json("{}").unwrap(), PageConfig::default());
    }

    #[test]
    fn upload_override_replaces_the_type_list() {
        let config =
            PageConfig::from_json(r#"{"upload": {"max_bytes": 1048576, "allowed_mime_types": ["image/png"]}}"#)
                .unwrap();
        assert_eq!(config.upload.max_bytes, MIB);
        assert_eq!(config.upload.allowed_mime_types, vec!["image/png".to_string()]);
        assert_eq!(config.upload.preview_max_px, 200);
    }

    #[test]
    fn malformed_json_is_reported() {
        let error = PageConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(error, ConfigError::Json(_)));
        assert!(error.to_string().starts_with("invalid JSON page config"));
    }
}
