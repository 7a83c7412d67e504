//! Aggregate form state.

use super::fields::{Field, FieldValues};
use super::files::{check_files, FileCheckResult};
use crate::models::{FileEntry, FileSelection};

/// AND of every field rule and the most recent file check.
pub fn recompute_validity(fields: &FieldValues, file_valid: bool) -> bool {
    fields.all_valid() && file_valid
}

/// Values and attachment state owned by one open form instance.
///
/// Validity is never cached; [`FormState::is_valid`] derives it from the
/// current values on every call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    values: FieldValues,
    files: FileSelection,
    file_valid: bool,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormState {
    pub fn new() -> Self {
        Self {
            values: FieldValues::default(),
            files: FileSelection::default(),
            file_valid: true,
        }
    }

    pub fn values(&self) -> &FieldValues {
        &self.values
    }

    pub fn files(&self) -> &FileSelection {
        &self.files
    }

    pub fn file_valid(&self) -> bool {
        self.file_valid
    }

    pub fn set_value(&mut self, field: Field, value: impl Into<String>) {
        self.values.set(field, value);
    }

    pub fn is_field_valid(&self, field: Field) -> bool {
        self.values.is_field_valid(field)
    }

    /// Replace the selection and check it. A rejected selection is cleared.
    pub fn select_files(&mut self, files: Vec<FileEntry>) -> FileCheckResult {
        let result = check_files(&files);
        self.file_valid = result.ok;
        self.files = if result.ok {
            FileSelection::new(files)
        } else {
            FileSelection::default()
        };
        result
    }

    pub fn is_valid(&self) -> bool {
        recompute_validity(&self.values, self.file_valid)
    }

    /// Back to an empty form with a neutral file state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
