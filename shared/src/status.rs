use serde::{Deserialize, Serialize};

/// Lifecycle of a complaint as the server stores it.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComplaintStatus {
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    Resolved,
}

impl ComplaintStatus {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Pending" => Some(Self::Pending),
            "In Progress" => Some(Self::InProgress),
            "Resolved" => Some(Self::Resolved),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Resolved => "Resolved",
        }
    }
}

/// Text of the native confirm dialog. Values outside the known vocabulary
/// are shown verbatim.
pub fn confirmation_prompt(selected: &str) -> String {
    let shown = ComplaintStatus::parse(selected).map_or(selected, |status| status.as_str());
    format!("Are you sure you want to update this complaint status to \"{}\"?", shown)
}
