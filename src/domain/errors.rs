//! Domain validation errors.
//!
//! The `Display` text of each variant is the message shown next to the
//! offending field or file input.

use std::fmt;

/// Errors that can occur during field and file validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required name field is blank.
    EmptyName,

    /// The provided email address is invalid.
    InvalidEmail(String),

    /// The provided phone number is invalid.
    InvalidPhone(String),

    /// More files were selected than allowed.
    TooManyFiles { max: usize },

    /// The selected files exceed the aggregate size limit.
    FilesTooLarge { total_bytes: u64, max_bytes: u64 },
}

/// Render a byte count as MiB with one decimal place.
pub(crate) fn format_mib(bytes: u64) -> String {
    format!("{:.1}", bytes as f64 / 1024.0 / 1024.0)
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "This field is required"),
            Self::InvalidEmail(email) => write!(f, "Invalid email address: {}", email),
            Self::InvalidPhone(phone) => write!(f, "Invalid phone number: {}", phone),
            Self::TooManyFiles { max } => write!(f, "Maximum of {} files allowed.", max),
            Self::FilesTooLarge {
                total_bytes,
                max_bytes,
            } => write!(
                f,
                "Total file size exceeds {}MB limit. Current total: {}MB.",
                max_bytes / 1024 / 1024,
                format_mib(*total_bytes)
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_messages() {
        assert_eq!(
            ValidationError::TooManyFiles { max: 4 }.to_string(),
            "Maximum of 4 files allowed."
        );
        let err = ValidationError::FilesTooLarge {
            total_bytes: 11 * 1024 * 1024,
            max_bytes: 10 * 1024 * 1024,
        };
        assert_eq!(
            err.to_string(),
            "Total file size exceeds 10MB limit. Current total: 11.0MB."
        );
    }

    #[test]
    fn test_format_mib() {
        assert_eq!(format_mib(0), "0.0");
        assert_eq!(format_mib(1024 * 1024 / 2), "0.5");
        assert_eq!(format_mib(3 * 1024 * 1024), "3.0");
    }
}
