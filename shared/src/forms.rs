//! Required-field evaluation for the submit gate.

/// Whitespace as the browser's `String.prototype.trim` sees it: Unicode
/// White_Space minus NEL, plus the byte order mark.
pub fn is_js_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

pub fn js_trim(value: &str) -> &str {
    value.trim_matches(is_js_whitespace)
}

pub fn is_blank(value: &str) -> bool {
    js_trim(value).is_empty()
}

/// Result of one submit attempt. Nothing is carried over between attempts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequiredCheck {
    /// Positions (in document order) of required fields left blank.
    pub blank: Vec<usize>,
}

impl RequiredCheck {
    pub fn evaluate<'a>(values: impl IntoIterator<Item = &'a str>) -> Self {
        let blank = values
            .into_iter()
            .enumerate()
            .filter(|(_, value)| is_blank(value))
            .map(|(index, _)| index)
            .collect();
        Self { blank }
    }

    pub fn is_valid(&self) -> bool {
        self.blank.is_empty()
    }
}
