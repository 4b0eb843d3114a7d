use std::borrow::Borrow;

use thiserror::Error;

use crate::config::{MIB, UploadSection};

/// The parts of a browser `File` the guard looks at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCandidate {
    pub name: String,
    pub size: u64,
    pub mime: String,
}

/// Why a selected image was refused. The `Display` text is what the user sees.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UploadRejection {
    #[error("File size must be less than {}.", format_limit(.limit))]
    TooLarge { size: u64, limit: u64 },
    #[error("Please select a valid image file (JPG, PNG, GIF).")]
    UnsupportedType(String),
}

pub fn format_limit(bytes: impl Borrow<u64>) -> String {
    let bytes = *bytes.borrow();
    if bytes >= MIB && bytes % MIB == 0 {
        format!("{}MB", bytes / MIB)
    } else if bytes >= 1024 && bytes % 1024 == 0 {
        format!("{}KB", bytes / 1024)
    } else {
        format!("{} bytes", bytes)
    }
}

/// Size is checked before type; a file exactly at the limit is accepted.
pub fn check_upload(rules: &UploadSection, file: &FileCandidate) -> Result<(), UploadRejection> {
    if file.size > rules.max_bytes {
        return Err(UploadRejection::TooLarge {
            size: file.size,
            limit: rules.max_bytes,
        });
    }

    if !rules.allowed_mime_types.iter().any(|allowed| *allowed == file.mime) {
        return Err(UploadRejection::UnsupportedType(file.mime.clone()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str, size: u64, mime: &str) -> FileCandidate {
        FileCandidate {
            name: name.to_string(),
            size,
            mime: mime.to_string(),
        }
    }

    #[test]
    fn accepts_every_allowed_type() {
        let rules = UploadSection::default();
        for mime in ["image/jpeg", "image/jpg", "image/png", "image/gif"] {
            assert_eq!(check_upload(&rules, &file("a", 500 * 1024, mime)), Ok(()));
        }
    }

    #[test]
    fn twenty_megabyte_png_is_too_large() {
        let rules = UploadSection::default();
        let rejection = check_upload(&rules, &file("big.png", 20 * MIB, "image/png")).unwrap_err();
        assert_eq!(rejection.to_string(), "File size must be less than 16MB.");
    }

    #[test]
    fn limit_is_inclusive() {
        let rules = UploadSection::default();
        assert!(check_upload(&rules, &file("edge.gif", 16 * MIB, "image/gif")).is_ok());
        assert!(check_upload(&rules, &file("edge.gif", 16 * MIB + 1, "image/gif")).is_err());
    }

    #[test]
    fn size_is_checked_before_type() {
        let rules = UploadSection::default();
        let rejection = check_upload(&rules, &file("huge.bmp", 17 * MIB, "image/bmp")).unwrap_err();
        assert!(matches!(rejection, UploadRejection::TooLarge { .. }));
    }

    #[test]
    fn rejects_other_and_missing_types() {
        let rules = UploadSection::default();
        for mime in ["image/webp", "image/PNG", "application/pdf", ""] {
            let rejection = check_upload(&rules, &file("x", 10, mime)).unwrap_err();
            assert_eq!(
                rejection.to_string(),
                "Please select a valid image file (JPG, PNG, GIF)."
            );
        }
    }

    #[test]
    fn limit_formatting() {
        assert_eq!(format_limit(16 * MIB), "16MB");
        assert_eq!(format_limit(512 * 1024), "512KB");
        assert_eq!(format_limit(1000), "1000 bytes");
    }
}
