//! Form validation: per-field rules, attachment checks, and the aggregate
//! submit-readiness signal.

pub mod fields;
pub mod files;
pub mod state;

pub use fields::{Field, FieldValues};
pub use files::{check_files, FileCheckResult, MAX_FILES, MAX_TOTAL_SIZE_BYTES, MAX_TOTAL_SIZE_MB};
pub use state::{recompute_validity, FormState};
