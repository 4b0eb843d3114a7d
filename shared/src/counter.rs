use crate::config::CounterSection;

pub const COUNTER_CLASS: &str = "char-counter";
pub const COUNTER_BASE_STYLE: &str =
    "text-align: right; font-size: 0.875rem; color: #666; margin-top: 0.25rem;";

/// Text length as the browser reports it (UTF-16 code units).
pub fn browser_length(value: &str) -> i64 {
    value.encode_utf16().count() as i64
}

/// Snapshot of the advisory counter. Derived on every input, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterReading {
    /// May go negative; the field itself is not capped.
    pub remaining: i64,
    pub warning: bool,
}

impl CounterReading {
    pub fn for_value(rules: &CounterSection, value: &str) -> Self {
        Self::for_length(rules, browser_length(value))
    }

    pub fn for_length(rules: &CounterSection, length: i64) -> Self {
        let remaining = i64::from(rules.max_length) - length;
        Self {
            remaining,
            warning: remaining < rules.warning_below,
        }
    }

    pub fn label(&self) -> String {
        format!("{} characters remaining", self.remaining)
    }
}
