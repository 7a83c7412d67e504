//! Attachment set validation.
//!
//! A selection is accepted or rejected as a whole: count first, then the
//! aggregate size. Rejected selections are never trimmed to fit.

use crate::domain::errors::{format_mib, ValidationError};
use crate::models::FileEntry;

/// Maximum number of attachments.
pub const MAX_FILES: usize = 4;

/// Aggregate size limit in MiB.
pub const MAX_TOTAL_SIZE_MB: u64 = 10;

/// Aggregate size limit in bytes.
pub const MAX_TOTAL_SIZE_BYTES: u64 = MAX_TOTAL_SIZE_MB * 1024 * 1024;

/// Outcome of checking a file selection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FileCheckResult {
    pub ok: bool,
    pub message: Option<String>,
    pub display_items: Vec<String>,
}

impl FileCheckResult {
    fn accepted(display_items: Vec<String>) -> Self {
        Self {
            ok: true,
            message: None,
            display_items,
        }
    }

    fn rejected(error: ValidationError) -> Self {
        Self {
            ok: false,
            message: Some(error.to_string()),
            display_items: Vec::new(),
        }
    }
}

/// Check a selection against the count and aggregate-size limits.
///
/// An empty selection is the neutral state and is accepted with no message.
pub fn check_files(files: &[FileEntry]) -> FileCheckResult {
    if files.is_empty() {
        return FileCheckResult::accepted(Vec::new());
    }

    if files.len() > MAX_FILES {
        return FileCheckResult::rejected(ValidationError::TooManyFiles { max: MAX_FILES });
    }

    let total_bytes = files
        .iter()
        .fold(0u64, |acc, f| acc.saturating_add(f.size_bytes));

    if total_bytes > MAX_TOTAL_SIZE_BYTES {
        return FileCheckResult::rejected(ValidationError::FilesTooLarge {
            total_bytes,
            max_bytes: MAX_TOTAL_SIZE_BYTES,
        });
    }

    FileCheckResult::accepted(
        files
            .iter()
            .map(|f| format!("{} ({}MB)", f.name, format_mib(f.size_bytes)))
            .collect(),
    )
}
